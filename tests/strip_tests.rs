use minimark::{excerpt_markdown, excerpt_markdown_with_limit, strip_markdown};

// Plain-text reducer behavior

#[test]
fn strip_full_document() {
    let doc = "# Post title\n\nFirst paragraph with **bold**, *italic*, `code` and [a link](https://x.com).\n\n- one\n- two\n\n> closing thought";
    assert_eq!(
        strip_markdown(doc),
        "Post title First paragraph with bold, italic, code and a link. one two closing thought"
    );
}

#[test]
fn strip_drops_fenced_code_content() {
    // Excerpts must not surface code
    let out = strip_markdown("intro\n\n```rust\nlet secret = 42;\n```\n\noutro");
    assert_eq!(out, "intro outro");
    assert!(!out.contains("secret"));
}

#[test]
fn strip_keeps_inline_code_text() {
    assert_eq!(strip_markdown("use `cargo build`"), "use cargo build");
}

#[test]
fn strip_link_any_target() {
    // The reducer collapses every link, not only http(s)/relative ones
    assert_eq!(strip_markdown("[label](mailto:a@b.c)"), "label");
}

#[test]
fn strip_non_markdown_passthrough() {
    assert_eq!(strip_markdown("Nothing here at all."), "Nothing here at all.");
}

#[test]
fn strip_empty_and_blank() {
    assert_eq!(strip_markdown(""), "");
    assert_eq!(strip_markdown(" \n \t \n"), "");
}

#[test]
fn strip_unbalanced_syntax_survives() {
    assert_eq!(strip_markdown("**half open"), "**half open");
    assert_eq!(strip_markdown("`tick"), "`tick");
    assert_eq!(strip_markdown("[label](unclosed"), "[label](unclosed");
}

#[test]
fn strip_crlf_input() {
    assert_eq!(strip_markdown("# a\r\nb"), "a b");
}

#[test]
fn strip_idempotent_on_stripped_text() {
    let docs = [
        "# Heading\n\nbody with **bold** here",
        "- a\n- b",
        "> quote with `code`",
        "plain",
        "",
    ];
    for doc in docs {
        let once = strip_markdown(doc);
        let twice = strip_markdown(&once);
        assert_eq!(twice, once, "stripping {doc:?} twice diverged");
    }
}

// Excerpt truncation law

#[test]
fn excerpt_law_long_input() {
    let long = "this stripped text is definitely longer than ten characters";
    let out = excerpt_markdown_with_limit(long, 10);
    assert!(out.chars().count() <= 10, "over budget: {out:?}");
    assert!(out.ends_with('…'), "missing marker: {out:?}");
}

#[test]
fn excerpt_law_short_input() {
    let out = excerpt_markdown_with_limit("tiny", 10);
    assert_eq!(out, "tiny");
    assert!(!out.ends_with('…'));
}

#[test]
fn excerpt_law_boundary() {
    // Exactly max_length chars: unchanged, no marker
    let ten = "abcdefghij";
    assert_eq!(excerpt_markdown_with_limit(ten, 10), ten);
    // One over: truncated
    let eleven = "abcdefghijk";
    let out = excerpt_markdown_with_limit(eleven, 10);
    assert_eq!(out, "abcdefghi…");
    assert_eq!(out.chars().count(), 10);
}

#[test]
fn excerpt_default_is_160() {
    let long = "x".repeat(300);
    let out = excerpt_markdown(&long);
    assert_eq!(out.chars().count(), 160);
    assert!(out.ends_with('…'));

    let exactly = "y".repeat(160);
    assert_eq!(excerpt_markdown(&exactly), exactly);
}

#[test]
fn excerpt_counts_chars_not_bytes() {
    let umlauts = "ä".repeat(20);
    let out = excerpt_markdown_with_limit(&umlauts, 10);
    assert_eq!(out.chars().count(), 10);
    assert_eq!(out, format!("{}…", "ä".repeat(9)));
}

#[test]
fn excerpt_strips_before_measuring() {
    // Markdown syntax does not count against the budget
    let doc = "**aaaa** `bbbb`";
    assert_eq!(excerpt_markdown_with_limit(doc, 9), "aaaa bbbb");
}
