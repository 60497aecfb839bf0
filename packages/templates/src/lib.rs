//! # Pagecraft Templates
//!
//! Built-in starting points for new pages. A template is a named, ordered
//! list of prototype sections; instantiating one stamps fresh section ids so
//! two pages created from the same template never share identity.

mod builtin;
mod template;

pub use builtin::{all, benefit_page, by_id, by_kind, product_lp, whitepaper};
pub use template::{PageKind, PageTemplate};
