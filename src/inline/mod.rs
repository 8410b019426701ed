//! Inline renderer for block text payloads.
//!
//! Recognizes four span kinds inside a block's joined text: bold,
//! inline code, italic and links. Matching is greedy and non-nested for
//! same-delimiter spans; unmatched substrings survive as plain text.

mod parser;
mod span;

pub use parser::parse_inline;
pub use span::{flatten, Inline, Link};
