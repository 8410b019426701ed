use minimark::{scan, Block};

// Block scanner behavior through the public API

#[test]
fn heading_basic() {
    assert_eq!(
        scan("# Hello"),
        vec![Block::Heading {
            level: 1,
            text: "Hello".into()
        }]
    );
}

#[test]
fn heading_indented() {
    assert_eq!(
        scan("   ## Indented"),
        vec![Block::Heading {
            level: 2,
            text: "Indented".into()
        }]
    );
}

#[test]
fn heading_seven_hashes_falls_through() {
    assert_eq!(
        scan("####### too many"),
        vec![Block::Paragraph {
            text: "####### too many".into()
        }]
    );
}

#[test]
fn heading_without_space_is_paragraph() {
    assert_eq!(
        scan("#nospace"),
        vec![Block::Paragraph {
            text: "#nospace".into()
        }]
    );
}

#[test]
fn list_grouping_single_block() {
    assert_eq!(
        scan("- a\n- b\n- c"),
        vec![Block::BulletList {
            items: vec!["a".into(), "b".into(), "c".into()]
        }]
    );
}

#[test]
fn list_items_trimmed() {
    assert_eq!(
        scan("-   spaced out   \n*  starred  "),
        vec![Block::BulletList {
            items: vec!["spaced out".into(), "starred".into()]
        }]
    );
}

#[test]
fn blank_line_terminates_list_run() {
    let blocks = scan("- a\n\n- b");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[0], Block::BulletList { items } if items.len() == 1));
    assert!(matches!(&blocks[1], Block::BulletList { items } if items.len() == 1));
}

#[test]
fn quote_folds_to_single_block() {
    assert_eq!(
        scan("> line one\n> line two\n>line three"),
        vec![Block::BlockQuote {
            text: "line one line two line three".into()
        }]
    );
}

#[test]
fn paragraph_runs_join_with_spaces() {
    assert_eq!(
        scan("first\nsecond\n\nthird"),
        vec![
            Block::Paragraph {
                text: "first second".into()
            },
            Block::Paragraph {
                text: "third".into()
            },
        ]
    );
}

#[test]
fn paragraph_ends_at_structural_lines() {
    let blocks = scan("text\n- item\ntext again");
    assert_eq!(blocks.len(), 3);
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
    assert!(matches!(blocks[1], Block::BulletList { .. }));
    assert!(matches!(blocks[2], Block::Paragraph { .. }));
}

#[test]
fn fence_consumes_until_closing() {
    assert_eq!(
        scan("```\nline 1\nline 2\n```\nafter"),
        vec![
            Block::CodeBlock {
                code: "line 1\nline 2".into()
            },
            Block::Paragraph {
                text: "after".into()
            },
        ]
    );
}

#[test]
fn fence_interior_is_never_reclassified() {
    let blocks = scan("```\n# heading\n- list\n> quote\n```");
    assert_eq!(
        blocks,
        vec![Block::CodeBlock {
            code: "# heading\n- list\n> quote".into()
        }]
    );
}

#[test]
fn unterminated_fence_closes_at_eof() {
    assert_eq!(
        scan("```\ndangling"),
        vec![Block::CodeBlock {
            code: "dangling".into()
        }]
    );
}

#[test]
fn empty_input_yields_placeholder() {
    assert_eq!(scan(""), vec![Block::Placeholder]);
    assert_eq!(scan("   \n  "), vec![Block::Placeholder]);
    assert_eq!(scan("\n\n\n"), vec![Block::Placeholder]);
}

#[test]
fn placeholder_never_mixed_with_content() {
    let blocks = scan("text");
    assert!(!blocks.contains(&Block::Placeholder));
}

#[test]
fn crlf_input_normalized() {
    assert_eq!(
        scan("- a\r\n- b"),
        vec![Block::BulletList {
            items: vec!["a".into(), "b".into()]
        }]
    );
}

#[test]
fn every_line_lands_in_exactly_one_block() {
    // Each non-blank source line's content must appear in the output once
    let input = "# h\n\npara one\npara two\n\n- li\n\n> q\n\n```\ncode\n```";
    let blocks = scan(input);
    let mut joined = String::new();
    for block in &blocks {
        match block {
            Block::Heading { text, .. }
            | Block::BlockQuote { text }
            | Block::Paragraph { text } => joined.push_str(text),
            Block::CodeBlock { code } => joined.push_str(code),
            Block::BulletList { items } => joined.push_str(&items.join(" ")),
            Block::Placeholder => {}
        }
        joined.push(' ');
    }
    for word in ["h", "para one", "para two", "li", "q", "code"] {
        assert!(joined.contains(word), "missing {word:?} in {joined:?}");
    }
}
