//! Block scanner implementation.
//!
//! Single forward pass over the line buffer. At each position the rules
//! are tried in a fixed order: fence, heading, list, quote, paragraph.
//! The first match wins and a consumed line is never re-classified.

use smallvec::SmallVec;

use crate::cursor::LineCursor;

use super::node::Block;

/// Whitespace-only lines separate blocks and are never emitted.
#[inline]
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line whose left-trimmed content starts with three backticks.
#[inline]
pub(crate) fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Leading heading marker: optional indent, 1-6 `#`, then whitespace.
/// Returns the level and the text after the hashes (starting with the
/// whitespace). Seven or more hashes never match.
fn heading_marker(line: &str) -> Option<(u8, &str)> {
    let rest = line.trim_start();
    let hashes = rest.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let after = &rest[hashes..];
    match after.chars().next() {
        Some(c) if c.is_whitespace() => Some((hashes as u8, after)),
        _ => None,
    }
}

/// Whether the line carries a heading marker at all. Used both for
/// dispatch and to terminate paragraph runs.
#[inline]
pub(crate) fn is_heading_line(line: &str) -> bool {
    heading_marker(line).is_some()
}

/// Full heading match: marker plus at least one character of content
/// after the required whitespace. The content is trimmed and may trim to
/// empty (e.g. `"#  "` is a level-1 heading with empty text).
fn split_heading(line: &str) -> Option<(u8, &str)> {
    let (level, after) = heading_marker(line)?;
    let mut chars = after.chars();
    chars.next();
    if chars.next().is_none() {
        // Marker with nothing after the single whitespace char: not a
        // heading. Falls through to the paragraph rule.
        return None;
    }
    Some((level, after.trim()))
}

/// Bullet line: optional indent, `-` or `*`, then whitespace.
#[inline]
pub(crate) fn is_list_line(line: &str) -> bool {
    let rest = line.trim_start();
    let mut chars = rest.chars();
    matches!(chars.next(), Some('-') | Some('*'))
        && matches!(chars.next(), Some(c) if c.is_whitespace())
}

/// Strip the bullet marker and surrounding whitespace from a list line.
fn strip_list_marker(line: &str) -> &str {
    let rest = line.trim_start();
    rest[1..].trim()
}

/// Quote line: optional indent then `>`.
#[inline]
pub(crate) fn is_quote_line(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

/// Strip the quote marker (and its optional following space) from a line.
fn strip_quote_marker(line: &str) -> &str {
    let rest = line.trim_start();
    rest[1..].trim()
}

/// A line that belongs to a paragraph run.
#[inline]
fn is_paragraph_line(line: &str) -> bool {
    !is_blank(line)
        && !is_fence_line(line)
        && !is_heading_line(line)
        && !is_list_line(line)
        && !is_quote_line(line)
}

/// Block scanner state.
pub struct BlockScanner<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> BlockScanner<'a> {
    /// Create a scanner over CRLF-normalized input.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(input),
        }
    }

    /// Scan all blocks in source order.
    ///
    /// Never fails: malformed syntax degrades to the best-effort
    /// classification, and empty or all-blank input yields the single
    /// placeholder block rather than an empty sequence.
    pub fn scan(&mut self, blocks: &mut Vec<Block>) {
        while let Some(line) = self.cursor.peek() {
            if is_blank(line) {
                self.cursor.bump();
                continue;
            }

            if is_fence_line(line) {
                let block = self.scan_code_block();
                blocks.push(block);
                continue;
            }

            if let Some((level, text)) = split_heading(line) {
                let text = text.to_string();
                self.cursor.bump();
                blocks.push(Block::Heading { level, text });
                continue;
            }

            if is_list_line(line) {
                let block = self.scan_list();
                blocks.push(block);
                continue;
            }

            if is_quote_line(line) {
                let block = self.scan_quote();
                blocks.push(block);
                continue;
            }

            let block = self.scan_paragraph();
            blocks.push(block);
        }

        if blocks.is_empty() {
            blocks.push(Block::Placeholder);
        }
    }

    /// Consume a fenced code block. The opening fence line (with any info
    /// string) is discarded; interior lines are kept verbatim until a
    /// closing fence line or end of input. Unterminated fences are
    /// tolerated and close at end of input.
    fn scan_code_block(&mut self) -> Block {
        self.cursor.bump();
        let mut code_lines: SmallVec<[&str; 8]> = SmallVec::new();
        self.cursor
            .take_while_run(|l| !is_fence_line(l), |l| code_lines.push(l));
        if !self.cursor.is_eof() {
            // Closing fence, consumed and discarded
            self.cursor.bump();
        }
        Block::CodeBlock {
            code: code_lines.join("\n"),
        }
    }

    /// Consume a run of consecutive bullet lines into one list. A blank
    /// line ends the run; there is no loose-list tolerance.
    fn scan_list(&mut self) -> Block {
        let mut items: Vec<String> = Vec::new();
        self.cursor
            .take_while_run(is_list_line, |l| items.push(strip_list_marker(l).to_string()));
        Block::BulletList { items }
    }

    /// Consume consecutive quote lines into a single logical quote,
    /// markers stripped, joined with single spaces.
    fn scan_quote(&mut self) -> Block {
        let mut quote_lines: SmallVec<[&str; 8]> = SmallVec::new();
        self.cursor
            .take_while_run(is_quote_line, |l| quote_lines.push(strip_quote_marker(l)));
        Block::BlockQuote {
            text: quote_lines.join(" "),
        }
    }

    /// Consume a paragraph run: consecutive lines that match no other
    /// rule, trimmed and joined with single spaces.
    fn scan_paragraph(&mut self) -> Block {
        let mut para_lines: SmallVec<[&str; 8]> = SmallVec::new();
        self.cursor
            .take_while_run(is_paragraph_line, |l| para_lines.push(l.trim()));
        if para_lines.is_empty() {
            // A heading-shaped line that failed the full heading match
            // (marker with no content, e.g. "# ") reaches here. Consume it
            // as plain text so the cursor always advances.
            if let Some(line) = self.cursor.next_line() {
                para_lines.push(line.trim());
            }
        }
        Block::Paragraph {
            text: para_lines.join(" "),
        }
    }
}
