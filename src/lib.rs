//! minimark: minimal markdown renderer for blog content and excerpts.
//!
//! Implements a deliberately restricted markdown subset for rendering
//! blog posts and generating SEO excerpts:
//!
//! - Blocks: ATX headings, fenced code, bullet lists, blockquotes,
//!   paragraphs. Rules are tried in that order, first match wins.
//! - Inline spans: bold, inline code, italic, links (http(s) and
//!   site-relative only). Unmatched delimiters stay literal text.
//! - Plain-text reduction: [`strip_markdown`] and [`excerpt_markdown`]
//!   for previews and meta descriptions.
//!
//! Everything is total: no input can fail, panic or return an error.
//! Empty or blank input produces a single placeholder block so callers
//! always have something to render.
//!
//! Out of scope by design: CommonMark/GFM compliance, nested blocks,
//! tables, footnotes, raw HTML passthrough and reference links.

pub mod block;
pub mod cursor;
pub mod doc;
pub mod escape;
pub mod inline;
pub mod render;
mod strip;

// Re-export primary types
pub use block::{scan, Block, BlockScanner};
pub use doc::{render_markdown, Node, RenderedBlock};
pub use inline::{flatten, parse_inline, Inline, Link};
pub use render::{render_html, HtmlWriter};
pub use strip::{
    excerpt_markdown, excerpt_markdown_with_limit, strip_markdown, DEFAULT_EXCERPT_LENGTH,
};

/// Convert markdown to HTML.
///
/// This is the primary API for simple use cases; it runs the full
/// pipeline under the default key namespace.
///
/// # Example
/// ```
/// let html = minimark::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<p>World</p>"));
/// ```
pub fn to_html(markdown: &str) -> String {
    render_html(&render_markdown(markdown, "markdown"))
}
