//! Inline tokenizer.
//!
//! Single forward pass with per-position matchers tried in priority
//! order: bold, inline code, italic, link. The first match at the
//! earliest position wins; everything between matches is preserved as
//! plain text, so no input character is ever dropped. Stray delimiters
//! that never form a complete pair stay literal.

use memchr::memchr;

use super::span::{Inline, Link};

/// Tokenize a block's text payload into inline spans.
///
/// Applied to heading, list-item, quote and paragraph text, never to
/// fenced code content. Bold and italic interiors are re-tokenized
/// recursively; code span interiors are emitted literally.
///
/// # Example
/// ```
/// use minimark::inline::{parse_inline, Inline};
///
/// let spans = parse_inline("a **b** c");
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[0], Inline::Text("a ".into()));
/// assert_eq!(spans[1], Inline::Strong(vec![Inline::Text("b".into())]));
/// ```
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        // Delimiters are ASCII, so a match can only begin at an ASCII
        // byte and slicing at match boundaries stays on char boundaries.
        let matched = match bytes[pos] {
            b'*' => match_strong(text, pos).or_else(|| match_emph(text, pos)),
            b'`' => match_code(text, pos),
            b'[' => match_link(text, pos),
            _ => None,
        };

        match matched {
            Some((span, end)) => {
                if pos > plain_start {
                    spans.push(Inline::Text(text[plain_start..pos].to_string()));
                }
                spans.push(span);
                pos = end;
                plain_start = end;
            }
            None => pos += 1,
        }
    }

    if plain_start < bytes.len() {
        spans.push(Inline::Text(text[plain_start..].to_string()));
    }

    spans
}

/// `**…**` with a non-empty, asterisk-free interior.
fn match_strong(text: &str, pos: usize) -> Option<(Inline, usize)> {
    let bytes = text.as_bytes();
    if !bytes[pos..].starts_with(b"**") {
        return None;
    }
    let interior_start = pos + 2;
    let close = interior_start + memchr(b'*', bytes.get(interior_start..)?)?;
    if close == interior_start || bytes.get(close + 1) != Some(&b'*') {
        return None;
    }
    let children = parse_inline(&text[interior_start..close]);
    Some((Inline::Strong(children), close + 2))
}

/// `*…*` with a non-empty, asterisk-free interior.
fn match_emph(text: &str, pos: usize) -> Option<(Inline, usize)> {
    let bytes = text.as_bytes();
    let interior_start = pos + 1;
    let close = interior_start + memchr(b'*', bytes.get(interior_start..)?)?;
    if close == interior_start {
        return None;
    }
    let children = parse_inline(&text[interior_start..close]);
    Some((Inline::Emph(children), close + 1))
}

/// `` `…` `` with a non-empty interior, emitted literally.
fn match_code(text: &str, pos: usize) -> Option<(Inline, usize)> {
    let bytes = text.as_bytes();
    let interior_start = pos + 1;
    let close = interior_start + memchr(b'`', bytes.get(interior_start..)?)?;
    if close == interior_start {
        return None;
    }
    Some((
        Inline::Code(text[interior_start..close].to_string()),
        close + 1,
    ))
}

/// `[label](href)` where the href is `http(s)://` or site-relative.
fn match_link(text: &str, pos: usize) -> Option<(Inline, usize)> {
    let bytes = text.as_bytes();
    let label_start = pos + 1;
    let label_end = label_start + memchr(b']', bytes.get(label_start..)?)?;
    if label_end == label_start || bytes.get(label_end + 1) != Some(&b'(') {
        return None;
    }
    let href_start = label_end + 2;
    let href_end = href_start + memchr(b')', bytes.get(href_start..)?)?;
    let href = &text[href_start..href_end];
    if !is_link_target(href) {
        return None;
    }
    Some((
        Inline::Link(Link {
            label: text[label_start..label_end].to_string(),
            href: href.to_string(),
        }),
        href_end + 1,
    ))
}

/// Recognized link targets: absolute http(s) URLs and site paths, each
/// with at least one character beyond the prefix.
fn is_link_target(href: &str) -> bool {
    if let Some(rest) = href.strip_prefix("https://") {
        !rest.is_empty()
    } else if let Some(rest) = href.strip_prefix("http://") {
        !rest.is_empty()
    } else if let Some(rest) = href.strip_prefix('/') {
        !rest.is_empty()
    } else {
        false
    }
}
