//! Plain-text reducer for excerpts and SEO descriptions.
//!
//! A fixed, ordered sequence of substitution passes over the whole raw
//! string. Deliberately independent of the block scanner: the passes
//! implement an overlapping grammar tuned for previews, e.g. fenced code
//! is dropped entirely because excerpts should not surface code.

use memchr::memchr;
use memchr::memmem;

/// Default excerpt budget in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

/// Strip all markdown syntax, producing flat text.
///
/// Pass order: fenced code blocks removed, inline code unwrapped, links
/// collapsed to their labels, heading/quote/list markers stripped per
/// line, bold then italic unwrapped, whitespace runs collapsed to single
/// spaces, result trimmed. Never fails; plain text passes through
/// unchanged aside from whitespace collapsing.
///
/// # Example
/// ```
/// use minimark::strip_markdown;
///
/// let text = strip_markdown("# Title\n\nSome **bold** and [a link](/x).");
/// assert_eq!(text, "Title Some bold and a link.");
/// ```
pub fn strip_markdown(markdown: &str) -> String {
    let text = markdown.replace("\r\n", "\n");
    let text = remove_fenced_blocks(&text);
    let text = unwrap_inline_code(&text);
    let text = unwrap_links(&text);
    let text = map_lines(&text, strip_heading_marker);
    let text = map_lines(&text, strip_quote_marker);
    let text = map_lines(&text, strip_list_marker);
    let text = unwrap_bold(&text);
    let text = unwrap_italic(&text);
    collapse_whitespace(&text)
}

/// Strip and truncate to the default 160-character budget.
pub fn excerpt_markdown(markdown: &str) -> String {
    excerpt_markdown_with_limit(markdown, DEFAULT_EXCERPT_LENGTH)
}

/// Strip and truncate to at most `max_length` characters.
///
/// If the stripped text fits, it is returned unchanged. Otherwise the
/// first `max_length - 1` characters are kept, right-trimmed, and the
/// one-character ellipsis marker is appended, so the total length never
/// exceeds `max_length`.
pub fn excerpt_markdown_with_limit(markdown: &str, max_length: usize) -> String {
    let plain = strip_markdown(markdown);
    if plain.chars().count() <= max_length {
        return plain;
    }
    let keep = max_length.saturating_sub(1);
    let cut_bytes = plain
        .char_indices()
        .nth(keep)
        .map_or(plain.len(), |(idx, _)| idx);
    let mut out = plain[..cut_bytes].trim_end().to_string();
    out.push('…');
    out
}

/// Apply a per-line substitution, preserving line structure.
fn map_lines<'a>(s: &'a str, f: impl Fn(&'a str) -> &'a str) -> String {
    s.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

/// Remove paired triple-backtick fences anywhere in the string, shortest
/// match first, replacing each pair (content included) with one space.
/// An unpaired trailing fence stays literal.
fn remove_fenced_blocks(s: &str) -> String {
    let finder = memmem::Finder::new("```");
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while let Some(off) = finder.find(&bytes[i..]) {
        let open = i + off;
        match finder.find(&bytes[open + 3..]) {
            Some(close_off) => {
                out.push_str(&s[i..open]);
                out.push(' ');
                i = open + 3 + close_off + 3;
            }
            None => break,
        }
    }
    out.push_str(&s[i..]);
    out
}

/// Collapse `` `code` `` spans to their interior text.
fn unwrap_inline_code(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while let Some(off) = memchr(b'`', &bytes[i..]) {
        let open = i + off;
        out.push_str(&s[i..open]);
        match memchr(b'`', &bytes[open + 1..]) {
            Some(close_off) if close_off > 0 => {
                let close = open + 1 + close_off;
                out.push_str(&s[open + 1..close]);
                i = close + 1;
            }
            _ => {
                // Adjacent pair or unpaired backtick: keep it literal and
                // let the next backtick start a fresh attempt
                out.push('`');
                i = open + 1;
            }
        }
    }
    out.push_str(&s[i..]);
    out
}

/// Collapse `[label](target)` to the label. Unlike the inline renderer,
/// any non-empty target qualifies here.
fn unwrap_links(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while let Some(off) = memchr(b'[', &bytes[i..]) {
        let open = i + off;
        out.push_str(&s[i..open]);
        match try_link_at(s, open) {
            Some((label, end)) => {
                out.push_str(label);
                i = end;
            }
            None => {
                out.push('[');
                i = open + 1;
            }
        }
    }
    out.push_str(&s[i..]);
    out
}

/// Match `[label](target)` at `open`, returning the label and the index
/// past the closing paren.
fn try_link_at(s: &str, open: usize) -> Option<(&str, usize)> {
    let bytes = s.as_bytes();
    let label_start = open + 1;
    let label_end = label_start + memchr(b']', bytes.get(label_start..)?)?;
    if label_end == label_start || bytes.get(label_end + 1) != Some(&b'(') {
        return None;
    }
    let target_start = label_end + 2;
    let target_end = target_start + memchr(b')', bytes.get(target_start..)?)?;
    if target_end == target_start {
        return None;
    }
    Some((&s[label_start..label_end], target_end + 1))
}

/// Strip a leading heading marker (1-6 `#` plus following whitespace).
/// No indent tolerance: the hashes must start the line.
fn strip_heading_marker(line: &str) -> &str {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return line;
    }
    let after = &line[hashes..];
    let trimmed = after.trim_start();
    if trimmed.len() == after.len() {
        // No whitespace after the hashes: not a heading marker
        return line;
    }
    trimmed
}

/// Strip a leading quote marker (indent, `>`, one optional space).
fn strip_quote_marker(line: &str) -> &str {
    let Some(after) = line.trim_start().strip_prefix('>') else {
        return line;
    };
    let mut chars = after.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => after,
    }
}

/// Strip a leading list marker (indent, `-` or `*`, following whitespace).
fn strip_list_marker(line: &str) -> &str {
    let rest = line.trim_start();
    let Some(after) = rest.strip_prefix(['-', '*']) else {
        return line;
    };
    let trimmed = after.trim_start();
    if trimmed.len() == after.len() {
        return line;
    }
    trimmed
}

/// Unwrap `**bold**` pairs (non-empty, asterisk-free interior).
fn unwrap_bold(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    let mut pos = 0;
    while let Some(off) = memchr(b'*', &bytes[pos..]) {
        let p = pos + off;
        if bytes.get(p + 1) == Some(&b'*') {
            if let Some(close_off) = memchr(b'*', &bytes[p + 2..]) {
                let q = p + 2 + close_off;
                if q > p + 2 && bytes.get(q + 1) == Some(&b'*') {
                    out.push_str(&s[i..p]);
                    out.push_str(&s[p + 2..q]);
                    i = q + 2;
                    pos = i;
                    continue;
                }
            }
        }
        pos = p + 1;
    }
    out.push_str(&s[i..]);
    out
}

/// Unwrap `*italic*` pairs (non-empty, asterisk-free interior).
fn unwrap_italic(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    let mut pos = 0;
    while let Some(off) = memchr(b'*', &bytes[pos..]) {
        let p = pos + off;
        if let Some(close_off) = memchr(b'*', &bytes[p + 1..]) {
            let q = p + 1 + close_off;
            if q > p + 1 {
                out.push_str(&s[i..p]);
                out.push_str(&s[p + 1..q]);
                i = q + 1;
                pos = i;
                continue;
            }
        }
        pos = p + 1;
    }
    out.push_str(&s[i..]);
    out
}

/// Collapse all whitespace runs to single spaces and trim.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
