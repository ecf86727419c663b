//! # markdown-forge-engine
//!
//! Converts a small Markdown dialect into HTML, and builds static sites out
//! of directories of such documents.
//!
//! ```text
//! document → blocks → classified blocks → spans → node tree → HTML string
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markdown_forge_engine::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nBody").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Body</p></div>");
//! ```

pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use html::{Attributes, HtmlNode, RenderError};
pub use parsing::{markdown_to_html, markdown_to_html_node};
pub use site::{BuildSummary, SiteError, SiteOptions, build_site};
