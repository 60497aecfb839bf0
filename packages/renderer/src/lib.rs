//! # Pagecraft Renderer
//!
//! Pure rendering of validated sections to a virtual DOM and static HTML.
//!
//! ```text
//! Section ──render_section──▶ VNode ──compile_fragment──▶ HTML
//! ```
//!
//! Rendering never fails: unknown (opaque) section types degrade to a
//! neutral placeholder, and a configured image layout with a missing slot
//! renders an empty column rather than collapsing.

pub mod html;
pub mod renderer;
pub mod vnode;

#[cfg(test)]
mod tests_render;

#[cfg(test)]
mod tests_styles;

#[cfg(test)]
mod tests_html;

pub use html::{compile_fragment, compile_page, CompileOptions};
pub use renderer::{render_document, render_section};
pub use vnode::VNode;
