#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]

use coursemark_markup::{
  HighlightMode, MarkupRenderer, RenderOptions, render_markup,
};

/// Check that the HTML output contains all expected fragments.
fn assert_html_contains(html: &str, expected: &[&str]) {
  for &needle in expected {
    assert!(
      html.contains(needle),
      "Expected HTML to contain '{needle}', but it did not.\nFull \
       HTML:\n{html}"
    );
  }
}

/// Check that the fragments appear in the given order.
fn assert_html_order(html: &str, expected: &[&str]) {
  let mut from = 0;
  for &needle in expected {
    match html[from..].find(needle) {
      Some(at) => from += at + needle.len(),
      None => panic!(
        "Expected '{needle}' after byte {from} in HTML, but it was not \
         found.\nFull HTML:\n{html}"
      ),
    }
  }
}

#[test]
fn test_plain_text_is_paragraph_wrapped() {
  assert_eq!(render_markup("hello world"), "<p>hello world</p>");
}

#[test]
fn test_fence_isolation() {
  let html = render_markup("```python\n# not a heading\n- not a list\n```");
  assert_html_contains(&html, &[
    r#"<span class="lang-badge">python</span>"#,
  ]);
  assert!(!html.contains("<h1>"), "heading rule leaked into code:\n{html}");
  assert!(!html.contains("<ul>"), "list rule leaked into code:\n{html}");
  assert!(
    !html.contains("<p>"),
    "paragraph rule leaked into code:\n{html}"
  );
}

#[test]
fn test_heading_precedence() {
  let html = render_markup("###### a");
  assert_html_contains(&html, &["<h6>a</h6>"]);
  for level in 1..=5 {
    assert!(
      !html.contains(&format!("<h{level}>")),
      "h6 line matched h{level}:\n{html}"
    );
  }
}

#[test]
fn test_list_grouping() {
  let html = render_markup("- a\n- b\n- c");
  assert_eq!(html.matches("<ul>").count(), 1);
  assert_eq!(html.matches("<li>").count(), 3);
  assert_html_order(&html, &[
    "<ul>", "<li>a</li>", "<li>b</li>", "<li>c</li>", "</ul>",
  ]);
}

#[test]
fn test_round_trip_document() {
  let md = "# Title\nSome **bold** and *italic* text with `code`.\n- item \
            one\n- item two\n```python\ndef f(x):\n    return x\n```";
  let html = render_markup(md);

  assert_html_order(&html, &[
    "<h1>Title</h1>",
    "<p>Some <strong>bold</strong> and <em>italic</em> text with \
     <code>code</code>.</p>",
    "<ul><li>item one</li><li>item two</li></ul>",
    "<pre class=\"code-block\">",
  ]);
  assert_html_contains(&html, &[
    r#"<span class="lang-badge">python</span>"#,
    r#"<code class="language-python">"#,
    r#"<span class="tok-keyword">def</span>"#,
    r#"<span class="tok-keyword">return</span>"#,
  ]);
}

#[test]
fn test_unterminated_fence_degrades_to_prose() {
  let html = render_markup("```js\nconsole.log(1)");
  assert!(!html.contains("<pre"), "unterminated fence became a block:\n{html}");
  assert_html_contains(&html, &["<p>```js</p>", "<p>console.log(1)</p>"]);
}

#[test]
fn test_unknown_language_tag() {
  let html = render_markup("```foo\nx=1\n```");
  assert_html_contains(&html, &[
    r#"<span class="lang-badge">foo</span>"#,
    r#"<code class="language-foo">x=1</code>"#,
  ]);
  assert!(!html.contains("tok-"), "unknown language got token spans:\n{html}");
}

#[test]
fn test_placeholder_literal_in_prose_does_not_interfere() {
  let md = "__CODE_BLOCK_0__\n```js\nlet x = 1;\n```";
  let html = render_markup(md);

  // The user-typed literal survives verbatim
  assert_html_contains(&html, &["__CODE_BLOCK_0__"]);
  // and the real fenced block still resolves
  assert_html_contains(&html, &[
    r#"<code class="language-js">"#,
    r#"<span class="tok-keyword">let</span>"#,
  ]);
  assert!(
    !html.contains("__CODE_BLOCK_0__<pre"),
    "literal was confused with a generated token:\n{html}"
  );
}

#[test]
fn test_input_markup_is_escaped() {
  let html = render_markup("a <script>alert(1)</script> & b");
  assert_html_contains(&html, &[
    "&lt;script&gt;",
    "&lt;/script&gt;",
    "&amp;",
  ]);
  assert!(!html.contains("<script>"), "raw HTML passed through:\n{html}");
}

#[test]
fn test_escaping_inside_code_blocks() {
  let html = MarkupRenderer::new(RenderOptions {
    highlight: HighlightMode::None,
  })
  .render("```\nif a < b && c > d {}\n```");
  assert_html_contains(&html, &["a &lt; b &amp;&amp; c &gt; d"]);
}
