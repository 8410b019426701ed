//! Inline span types.

/// A link recognized inside a block's text.
///
/// Only `http://`, `https://` and site-relative (`/`) targets are
/// recognized by the parser; anything else stays literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Link label, rendered as plain text.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl Link {
    /// Whether this link leaves the site.
    ///
    /// External links are rendered with new-context/no-opener isolation
    /// (`target="_blank" rel="noreferrer noopener"`); internal paths get
    /// neither attribute.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// An inline span within a block's renderable text.
///
/// `Strong` and `Emph` contain nested spans (their interiors are
/// re-tokenized); code spans are inert and link labels are plain text.
/// Flattening a span sequence reproduces the source text minus the
/// delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Unmatched text, preserved verbatim.
    Text(String),
    /// Bold span (`**…**`).
    Strong(Vec<Inline>),
    /// Italic span (`*…*`).
    Emph(Vec<Inline>),
    /// Inline code span (`` `…` ``), never parsed further.
    Code(String),
    /// Link (`[label](href)`).
    Link(Link),
}

impl Inline {
    /// Append this span's plain text (delimiters removed) to `out`.
    pub fn flatten_into(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::Code(text) => out.push_str(text),
            Self::Strong(children) | Self::Emph(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
            Self::Link(link) => out.push_str(&link.label),
        }
    }
}

/// Flatten a span sequence to plain text.
pub fn flatten(spans: &[Inline]) -> String {
    let mut out = String::new();
    for span in spans {
        span.flatten_into(&mut out);
    }
    out
}
