//! # Inline Parsing
//!
//! Turns the flat text of one block into an ordered sequence of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! The tokenizer is a pipeline of five passes over a span sequence. Each pass
//! only splits spans that are still `Plain`; anything an earlier pass claimed
//! flows through untouched. The order is a contract, see [`parser::PASSES`]:
//!
//! 1. Bold (`**`)
//! 2. Italic (`_`)
//! 3. Code (`` ` ``)
//! 4. Image (`![alt](url)`)
//! 5. Link (`[text](url)`)
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: delimiter and marker syntax owned per inline kind
//! - **`parser`**: `text_to_spans()` entry point and the individual passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlinePass, PASSES, text_to_spans};
pub use types::{SpanKind, TextSpan};
