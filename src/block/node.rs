//! Block-level node types.

/// A block-level element produced by the scanner.
///
/// Blocks carry their raw text payload; inline parsing happens when the
/// document tree is assembled. Order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Trimmed heading text.
        text: String,
    },

    /// Fenced code block. Interior lines joined by newline, verbatim.
    /// The fence lines themselves (including any language info) are dropped.
    CodeBlock {
        /// Raw code content.
        code: String,
    },

    /// Run of consecutive bullet lines (`-` or `*`).
    BulletList {
        /// Item texts in source order, markers stripped and trimmed.
        items: Vec<String>,
    },

    /// Run of consecutive quote lines folded into one logical quote.
    BlockQuote {
        /// Quote text, lines joined with single spaces.
        text: String,
    },

    /// Default block: consecutive plain lines joined with single spaces.
    Paragraph {
        /// Paragraph text.
        text: String,
    },

    /// Sentinel for empty or all-blank input. Callers always render
    /// something, so the scanner never returns an empty sequence.
    Placeholder,
}

impl Block {
    /// The renderable text payload, if this block has one.
    ///
    /// Code blocks are literal and the placeholder has no source text, so
    /// both return `None`.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } | Self::BlockQuote { text } | Self::Paragraph { text } => {
                Some(text)
            }
            Self::CodeBlock { .. } | Self::BulletList { .. } | Self::Placeholder => None,
        }
    }

    /// Short tag used when generating block keys.
    pub(crate) fn key_tag(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "h",
            Self::CodeBlock { .. } => "code",
            Self::BulletList { .. } => "list",
            Self::BlockQuote { .. } => "quote",
            Self::Paragraph { .. } => "p",
            Self::Placeholder => "empty",
        }
    }
}
