//! Block-level scanner for the restricted markdown subset.
//!
//! The scanner is line-oriented and handles:
//! - Fenced code blocks
//! - ATX headings (levels 1-6)
//! - Bullet lists
//! - Blockquotes
//! - Paragraphs
//!
//! Rules are tried in that order at each cursor position; the first match
//! wins. Blank lines separate blocks and end list/quote runs.

mod node;
mod scanner;

pub use node::Block;
pub use scanner::BlockScanner;

/// Scan markdown into an ordered sequence of blocks.
///
/// Input is CRLF-normalized before line splitting. Never fails; empty or
/// all-blank input produces the single [`Block::Placeholder`].
///
/// # Example
/// ```
/// use minimark::block::{scan, Block};
///
/// let blocks = scan("# Hello\n\nWorld");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
/// ```
pub fn scan(markdown: &str) -> Vec<Block> {
    let normalized = markdown.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    BlockScanner::new(&normalized).scan(&mut blocks);
    blocks
}
