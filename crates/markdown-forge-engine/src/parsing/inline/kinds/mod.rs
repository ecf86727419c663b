//! # Inline Kinds
//!
//! Inline syntax owns its delimiters here; the parser never hardcodes `**`,
//! `` ` `` or the bracket patterns.
//!
//! - **`Delimiter`**: symmetric tokens for bold (`**`), italic (`_`) and code (`` ` ``)
//! - **`Marker`**: bracket markers for images (`![alt](url)`) and links (`[text](url)`)

pub mod delimiter;
pub mod marker;

pub use delimiter::Delimiter;
pub use marker::{Marker, MarkerMatch};
