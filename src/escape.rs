//! HTML escaping for text content.
//!
//! Fast-path optimized: scans for the first escapable character, then
//! bulk-copies the segments between escapes.

use memchr::memchr3;

/// Lookup table for escapable characters in text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into the output buffer.
///
/// Escapes `<`, `>`, `&` and `"` to their entity equivalents.
///
/// # Example
/// ```
/// use minimark::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"<script>");
/// assert_eq!(out, b"&lt;script&gt;");
/// ```
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    if input.is_empty() {
        return;
    }

    // Fast path: nothing to escape, single bulk copy
    let mut pos = match memchr3(b'<', b'&', b'>', input) {
        Some(p) => {
            // memchr3 covers the three common escapes; quotes are rarer
            // and caught by the table scan below
            match input[..p].iter().position(|&b| b == b'"') {
                Some(q) => q,
                None => p,
            }
        }
        None => match input.iter().position(|&b| b == b'"') {
            Some(q) => q,
            None => {
                out.extend_from_slice(input);
                return;
            }
        },
    };

    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !TEXT_ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }
        if pos < input.len() {
            let escape_seq: &[u8] = match input[pos] {
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'&' => b"&amp;",
                b'"' => b"&quot;",
                other => {
                    // Not in the table; copy through
                    out.push(other);
                    pos += 1;
                    continue;
                }
            };
            out.extend_from_slice(escape_seq);
            pos += 1;
        }
    }
}

/// Escape a string of text content, returning a new string.
pub fn escape_text(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len() + 8);
    escape_text_into(&mut out, input.as_bytes());
    // Escaping only inserts ASCII entity sequences into valid UTF-8
    String::from_utf8(out).unwrap_or_default()
}
