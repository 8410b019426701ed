//! HTML output writer over the keyed document tree.
//!
//! The writer owns a byte buffer with tag helpers; block and inline
//! nodes are walked recursively. Text content goes through the crate's
//! table-driven escaper, attribute values through `html-escape`.

use crate::doc::{Node, RenderedBlock};
use crate::escape;
use crate::inline::Inline;

/// Placeholder paragraph rendered for empty input.
const PLACEHOLDER_TEXT: &str = "No content yet.";

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use minimark::render::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.write_str("<p>");
/// writer.write_escaped_text(b"a < b");
/// writer.write_str("</p>");
/// assert_eq!(writer.into_string(), "<p>a &lt; b</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with capacity sized for the expected input.
    ///
    /// Typical HTML output is ~1.25x the input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write text content with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write an attribute value with double-quoted attribute escaping.
    #[inline]
    pub fn write_attr(&mut self, value: &str) {
        let encoded = html_escape::encode_double_quoted_attribute(value);
        self.out.extend_from_slice(encoded.as_bytes());
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Consume the writer, returning the output string.
    pub fn into_string(self) -> String {
        // The writer only ever appends valid UTF-8 fragments
        String::from_utf8(self.out).unwrap_or_default()
    }

    fn heading_start(&mut self, level: u8) {
        self.out.extend_from_slice(b"<h");
        self.out.push(b'0' + level.clamp(1, 6));
        self.out.push(b'>');
    }

    fn heading_end(&mut self, level: u8) {
        self.out.extend_from_slice(b"</h");
        self.out.push(b'0' + level.clamp(1, 6));
        self.out.extend_from_slice(b">\n");
    }

    fn link_start(&mut self, href: &str, external: bool) {
        self.write_str("<a href=\"");
        self.write_attr(href);
        self.write_str("\"");
        if external {
            // New-context/no-opener isolation for offsite links only
            self.write_str(" target=\"_blank\" rel=\"noreferrer noopener\"");
        }
        self.write_str(">");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a keyed document tree to an HTML string.
pub fn render_html(blocks: &[RenderedBlock]) -> String {
    let mut writer = HtmlWriter::new();
    for block in blocks {
        write_block(&mut writer, &block.node);
    }
    writer.into_string()
}

/// Render a single block node.
fn write_block(writer: &mut HtmlWriter, node: &Node) {
    match node {
        Node::Heading { level, spans } => {
            writer.heading_start(*level);
            write_spans(writer, spans);
            writer.heading_end(*level);
        }
        Node::CodeBlock { code } => {
            writer.write_str("<pre><code>");
            writer.write_escaped_text(code.as_bytes());
            writer.write_str("</code></pre>\n");
        }
        Node::BulletList { items } => {
            writer.write_str("<ul>\n");
            for item in items {
                writer.write_str("<li>");
                write_spans(writer, item);
                writer.write_str("</li>\n");
            }
            writer.write_str("</ul>\n");
        }
        Node::BlockQuote { spans } => {
            writer.write_str("<blockquote>");
            write_spans(writer, spans);
            writer.write_str("</blockquote>\n");
        }
        Node::Paragraph { spans } => {
            writer.write_str("<p>");
            write_spans(writer, spans);
            writer.write_str("</p>\n");
        }
        Node::Placeholder => {
            writer.write_str("<p>");
            writer.write_string(PLACEHOLDER_TEXT);
            writer.write_str("</p>\n");
        }
    }
}

/// Render an inline span sequence, recursing into bold/italic children.
fn write_spans(writer: &mut HtmlWriter, spans: &[Inline]) {
    for span in spans {
        match span {
            Inline::Text(text) => writer.write_escaped_text(text.as_bytes()),
            Inline::Strong(children) => {
                writer.write_str("<strong>");
                write_spans(writer, children);
                writer.write_str("</strong>");
            }
            Inline::Emph(children) => {
                writer.write_str("<em>");
                write_spans(writer, children);
                writer.write_str("</em>");
            }
            Inline::Code(code) => {
                writer.write_str("<code>");
                writer.write_escaped_text(code.as_bytes());
                writer.write_str("</code>");
            }
            Inline::Link(link) => {
                writer.link_start(&link.href, link.is_external());
                writer.write_escaped_text(link.label.as_bytes());
                writer.write_str("</a>");
            }
        }
    }
}
