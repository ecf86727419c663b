//! # Block Parsing
//!
//! Splits a document into blocks and decides what each block is.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): blank-line boundaries cut the document
//!    into trimmed, non-empty blocks
//! 2. **Classification** (`classify`): each block is tested against the
//!    block kinds in precedence order; the first match wins
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: per-kind syntax (prefixes, markers, fences) and stripping
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_kind`
//!
//! ## Key Invariants
//!
//! - Blank-line regions are the only text segmentation discards
//! - Classification looks at one block at a time; no state carries across blocks
//! - Code fences are raw zones: their content is never inline-parsed

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_kind;
pub use segment::markdown_to_blocks;
pub use types::{Block, BlockKind};

/// Segments and classifies a document in one go.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| Block {
            text,
            kind: block_to_block_kind(text),
        })
        .collect()
}
