//! Keyed document tree: block scanning plus inline parsing.

use crate::block::{self, Block};
use crate::inline::{parse_inline, Inline};

/// A block with its text payloads inline-parsed. Code content stays
/// literal and the placeholder carries nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Heading with parsed inline content.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Inline spans of the heading text.
        spans: Vec<Inline>,
    },
    /// Literal code block.
    CodeBlock {
        /// Raw code content.
        code: String,
    },
    /// Bullet list with per-item inline spans.
    BulletList {
        /// Parsed items in source order.
        items: Vec<Vec<Inline>>,
    },
    /// Blockquote with parsed inline content.
    BlockQuote {
        /// Inline spans of the folded quote text.
        spans: Vec<Inline>,
    },
    /// Paragraph with parsed inline content.
    Paragraph {
        /// Inline spans of the joined paragraph text.
        spans: Vec<Inline>,
    },
    /// Sentinel for empty input; renders as a "no content" notice.
    Placeholder,
}

/// A renderable block tagged with a generated key.
///
/// Keys are opaque identifiers, unique within one invocation and
/// namespaced by the caller so that several rendered documents can
/// coexist on one page. They have no effect on parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Generated identifier: `{namespace}-{tag}-{ordinal}`.
    pub key: String,
    /// The parsed block.
    pub node: Node,
}

/// Run the full pipeline: scan blocks, inline-parse their payloads and
/// tag each block with a namespaced key.
///
/// Total over all inputs; empty or blank markdown yields the single
/// placeholder block.
///
/// # Example
/// ```
/// use minimark::{render_markdown, Node};
///
/// let blocks = render_markdown("# Hi\n\n- a\n- b", "post");
/// assert_eq!(blocks[0].key, "post-h-0");
/// assert!(matches!(blocks[1].node, Node::BulletList { .. }));
/// ```
pub fn render_markdown(markdown: &str, key_namespace: &str) -> Vec<RenderedBlock> {
    block::scan(markdown)
        .into_iter()
        .enumerate()
        .map(|(ordinal, block)| {
            let key = match &block {
                Block::Placeholder => format!("{key_namespace}-empty"),
                other => format!("{key_namespace}-{}-{ordinal}", other.key_tag()),
            };
            RenderedBlock {
                key,
                node: parse_block(block),
            }
        })
        .collect()
}

/// Inline-parse a block's payload. Fenced code is never inline-parsed.
fn parse_block(block: Block) -> Node {
    match block {
        Block::Heading { level, text } => Node::Heading {
            level,
            spans: parse_inline(&text),
        },
        Block::CodeBlock { code } => Node::CodeBlock { code },
        Block::BulletList { items } => Node::BulletList {
            items: items.iter().map(|item| parse_inline(item)).collect(),
        },
        Block::BlockQuote { text } => Node::BlockQuote {
            spans: parse_inline(&text),
        },
        Block::Paragraph { text } => Node::Paragraph {
            spans: parse_inline(&text),
        },
        Block::Placeholder => Node::Placeholder,
    }
}
