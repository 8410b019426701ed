use minimark::{render_html, render_markdown, to_html};

// End-to-end HTML rendering

#[test]
fn document_renders_in_order() {
    let html = to_html("# T\n\npara\n\n- a\n\n> q");
    let positions: Vec<usize> = ["<h1>", "<p>para", "<ul>", "<blockquote>"]
        .iter()
        .map(|tag| html.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "blocks out of order: {html}");
}

#[test]
fn fence_literalness() {
    let html = to_html("```\n**not bold**\n```");
    assert_eq!(html, "<pre><code>**not bold**</code></pre>\n");
}

#[test]
fn code_block_html_is_escaped() {
    let html = to_html("```\n<script>alert('x')</script>\n```");
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn external_link_gets_isolation_attributes() {
    let html = to_html("[x](https://ext.com)");
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noreferrer noopener\""));
}

#[test]
fn internal_link_gets_no_isolation_attributes() {
    let html = to_html("[x](/internal)");
    assert!(!html.contains("target="));
    assert!(!html.contains("rel="));
    assert!(html.contains("href=\"/internal\""));
}

#[test]
fn nested_inline_markup_renders() {
    let html = to_html("**see `run()`**");
    assert_eq!(
        html,
        "<p><strong>see <code>run()</code></strong></p>\n"
    );
}

#[test]
fn placeholder_rendered_for_blank_input() {
    assert_eq!(to_html("\n \n"), "<p>No content yet.</p>\n");
}

#[test]
fn list_items_render_individually() {
    let html = to_html("- *a*\n- b");
    assert_eq!(
        html,
        "<ul>\n<li><em>a</em></li>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn text_content_is_escaped() {
    let html = to_html("AT&T says 1 < 2");
    assert_eq!(html, "<p>AT&amp;T says 1 &lt; 2</p>\n");
}

#[test]
fn render_html_matches_to_html() {
    let input = "# A\n\nB **C**";
    assert_eq!(render_html(&render_markdown(input, "markdown")), to_html(input));
}

#[test]
fn namespace_does_not_change_html() {
    let input = "# A\n\n- b";
    let a = render_html(&render_markdown(input, "one"));
    let b = render_html(&render_markdown(input, "two"));
    assert_eq!(a, b);
}
