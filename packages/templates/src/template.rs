use pagecraft_schema::{PageContent, Section};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of page a template is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    ProductLp,
    BenefitPage,
    Whitepaper,
}

/// A named, ordered list of prototype sections.
///
/// The prototypes carry stable template-local ids for display purposes only;
/// [`PageTemplate::instantiate`] replaces them with fresh ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: PageKind,
    pub sections: Vec<Section>,
}

impl PageTemplate {
    /// Stamp a fresh document from this template.
    ///
    /// Every section gets a new unique id and an order field matching its
    /// position, so repeated instantiation never produces shared identity.
    pub fn instantiate(&self) -> PageContent {
        let sections = self
            .sections
            .iter()
            .enumerate()
            .map(|(index, prototype)| {
                let mut section = prototype.clone();
                section.id = Uuid::new_v4().to_string();
                section.order = index as i64;
                section
            })
            .collect();

        PageContent { sections }
    }
}
