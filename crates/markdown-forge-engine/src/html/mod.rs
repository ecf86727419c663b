//! # HTML Node Model
//!
//! The rendered tree produced by the assembler. A node is either a leaf
//! holding a value directly or a parent wrapping an ordered list of children;
//! both render through the same [`HtmlNode::to_html`].
//!
//! ## Render Contract
//!
//! - A leaf must carry a value (an empty string is fine)
//! - A parent must carry a non-empty tag and at least one child
//! - Attributes render as ` key="value"` in insertion order
//!
//! No escaping is performed; values are emitted verbatim.

pub mod node;

pub use node::{Attributes, HtmlNode, RenderError};
