use crate::parser::markdown::slugify;
use crate::parser::{Highlighter, compile_markdown_to_html};

// single newlines inside a paragraph should survive as line breaks, the site content relies on it
#[test]
fn test_compile_markdown_line_breaks() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("line one\nline two", &highlighter);

    assert!(result.contains("line one<br />"));
    assert!(result.contains("line two"));
}

// every heading gets an anchor id derived from its text
#[test]
fn test_compile_markdown_heading_anchors() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("# Getting Started!\n\n## Tools & Setup", &highlighter);

    assert!(result.contains(r#"<h1 id="getting-started">Getting Started!</h1>"#));
    assert!(result.contains(r#"<h2 id="tools--setup">"#));
}

// the same heading twice must not produce the same id twice
#[test]
fn test_compile_markdown_duplicate_heading_ids() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("## Intro\n\n## Intro\n\n## Intro", &highlighter);

    assert!(result.contains(r#"<h2 id="intro">"#));
    assert!(result.contains(r#"<h2 id="intro-1">"#));
    assert!(result.contains(r#"<h2 id="intro-2">"#));
}

// persian headings keep their letters in the anchor
#[test]
fn test_compile_markdown_non_latin_heading_anchor() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("# سلام دنیا", &highlighter);

    assert!(result.contains(r#"<h1 id="سلام-دنیا">سلام دنیا</h1>"#));
}

// a heading whose own text ends in a number must not collide with a generated suffix
#[test]
fn test_compile_markdown_heading_ids_stay_unique() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("## Foo 1\n\n## Foo\n\n## Foo", &highlighter);

    assert!(result.contains(r#"<h2 id="foo-1">Foo 1</h2>"#));
    assert!(result.contains(r#"<h2 id="foo">Foo</h2>"#));
    assert!(result.contains(r#"<h2 id="foo-2">Foo</h2>"#));
    assert_eq!(result.matches(r#"id="foo-1""#).count(), 1);
}

// attribute syntax is not markdown the site uses, braces stay part of the heading text
#[test]
fn test_compile_markdown_heading_braces_are_text() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("# Title {#custom}", &highlighter);

    assert!(result.contains(r#"<h1 id="title-custom">Title {#custom}</h1>"#));
}

#[test]
fn test_compile_markdown_tables() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |", &highlighter);

    assert!(result.contains("<table>"));
    assert!(result.contains("<td>1</td>"));
}

// fenced code with a known language is highlighted inline and marked as done
#[test]
fn test_compile_markdown_fenced_code_highlighted() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("```rust\nfn main() {}\n```", &highlighter);

    assert!(result.contains(r#"<pre><code class="hljs language-rust" data-highlighted="yes">"#));
    assert!(result.contains("<span class="));
    assert!(result.contains("main"));
}

// indented code has no declared language but still goes through the highlighter
#[test]
fn test_compile_markdown_indented_code_highlighted() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("text\n\n    a < b\n", &highlighter);

    assert!(result.contains(r#"data-highlighted="yes""#));
    assert!(result.contains("a &lt; b"));
}

// an unknown declared language falls back to detection from the first line
#[test]
fn test_highlight_unknown_language_detects() {
    let highlighter = Highlighter::new();
    let result = highlighter.highlight("#!/bin/bash\necho hi\n", Some("notalanguage"));

    assert_ne!(result.language, "notalanguage");
    assert_ne!(result.language, "plaintext");
}

// blocks without a usable language or first line are guessed from their contents
#[test]
fn test_highlight_guesses_from_content() {
    let highlighter = Highlighter::new();

    let python = highlighter.highlight("def main():\n    print(1)\n", None);
    assert_eq!(python.language, "python");

    let sql = highlighter.highlight("SELECT name FROM users WHERE id = 1", Some("unknown-dialect"));
    assert_eq!(sql.language, "sql");
}

// a single stray keyword is not enough to call it a language
#[test]
fn test_highlight_guess_needs_several_markers() {
    let highlighter = Highlighter::new();
    let result = highlighter.highlight("echo hello", None);

    assert_eq!(result.language, "plaintext");
}

// undeclared fenced code in a page goes through the same guess
#[test]
fn test_compile_markdown_undeclared_fence_guessed() {
    let highlighter = Highlighter::new();
    let result = compile_markdown_to_html("```\nimport os\nprint(os.name)\n```", &highlighter);

    assert!(result.contains(r#"class="hljs language-python""#));
}

// when nothing can be detected the code is emitted as escaped plain text
#[test]
fn test_highlight_plain_text_fallback() {
    let highlighter = Highlighter::new();
    let result = highlighter.highlight("a < b", Some("zzz"));

    assert_eq!(result.language, "plaintext");
    assert!(result.html.contains("a &lt; b"));
}

#[test]
fn test_highlighter_knows_common_languages() {
    let highlighter = Highlighter::new();

    assert!(highlighter.is_known_language("rust"));
    assert!(highlighter.is_known_language("python"));
    assert!(!highlighter.is_known_language("definitely-not-a-language"));
}

// the live region pass only touches blocks nobody highlighted yet
#[test]
fn test_highlight_code_blocks_only_unmarked() {
    let highlighter = Highlighter::new();

    let already = compile_markdown_to_html("```rust\nlet x = 1;\n```", &highlighter);
    assert_eq!(highlighter.highlight_code_blocks(&already), already);

    let raw = r#"<p>before</p><pre><code class="language-rust">let x = 1;</code></pre><p>after</p>"#;
    let result = highlighter.highlight_code_blocks(raw);

    assert!(result.starts_with("<p>before</p>"));
    assert!(result.ends_with("<p>after</p>"));
    assert!(result.contains(r#"class="hljs language-rust" data-highlighted="yes""#));
}

// escaped text in an unmarked block must not get escaped twice
#[test]
fn test_highlight_code_blocks_keeps_escaping() {
    let highlighter = Highlighter::new();
    let result = highlighter.highlight_code_blocks("<pre><code>a &lt; b</code></pre>");

    assert!(result.contains("a &lt; b"));
    assert!(!result.contains("&amp;lt;"));
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Hello World"), "hello-world");
    assert_eq!(slugify("  What is OSM?  "), "what-is-osm");
    assert_eq!(slugify("snake_case-and-dash"), "snake_case-and-dash");
    assert_eq!(slugify("!!!"), "");
}
