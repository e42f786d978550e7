//! Prose transformation rules.
//!
//! Applied to escaped text after fence extraction, as an ordered list of
//! global substitutions over a working string. The order is load-bearing:
//! longest heading prefix first, inline code before emphasis, bold before
//! italic, lists before paragraph wrapping. Placeholder tokens contain
//! only word characters and pass through every rule unchanged.

use std::sync::LazyLock;

use log::error;
use regex::{Captures, Regex};

use crate::{fence::PLACEHOLDER_PREFIX, util::never_matching_regex};

fn compile(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    error!("Failed to compile prose rule /{pattern}/: {e}");
    never_matching_regex()
  })
}

/// Heading rules, longest prefix first so `######` is never claimed by the
/// shorter variants.
static HEADINGS: LazyLock<[(Regex, &'static str); 6]> = LazyLock::new(|| {
  [
    (compile(r"(?m)^######\s+(.*)$"), "<h6>$1</h6>"),
    (compile(r"(?m)^#####\s+(.*)$"), "<h5>$1</h5>"),
    (compile(r"(?m)^####\s+(.*)$"), "<h4>$1</h4>"),
    (compile(r"(?m)^###\s+(.*)$"), "<h3>$1</h3>"),
    (compile(r"(?m)^##\s+(.*)$"), "<h2>$1</h2>"),
    (compile(r"(?m)^#\s+(.*)$"), "<h1>$1</h1>"),
  ]
});

/// Single-backtick span with no backtick inside.
static INLINE_CODE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"`([^`]+)`"));

/// Double-asterisk emphasis; must run before the single-asterisk rule so
/// the pair is not consumed one asterisk at a time.
static BOLD: LazyLock<Regex> =
  LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));

static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));

/// One or more consecutive lines each starting with a `-` or `*` marker.
static LIST_BLOCK: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^(?:[-*]\s+.+\n?)+"));

static LIST_MARKER: LazyLock<Regex> =
  LazyLock::new(|| compile(r"^[-*]\s+"));

/// Stray `. ` prefix occasionally left on generated list items.
static STRAY_DOT: LazyLock<Regex> = LazyLock::new(|| compile(r"^\.\s+"));

static LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^(.+)$"));

/// Rewrite escaped prose into the restricted markup vocabulary.
///
/// Placeholder tokens embedded in the text are left verbatim for the
/// reassembly step.
#[must_use]
pub fn transform_prose(escaped: &str) -> String {
  let mut text = escaped.to_owned();

  for (pattern, replacement) in HEADINGS.iter() {
    text = pattern.replace_all(&text, *replacement).into_owned();
  }

  text = INLINE_CODE
    .replace_all(&text, "<code>$1</code>")
    .into_owned();
  text = BOLD
    .replace_all(&text, "<strong>$1</strong>")
    .into_owned();
  text = ITALIC.replace_all(&text, "<em>$1</em>").into_owned();

  text = LIST_BLOCK
    .replace_all(&text, |caps: &Captures| {
      let items: String = caps[0]
        .trim()
        .lines()
        .map(|line| {
          let stripped = LIST_MARKER.replace(line, "");
          let stripped = STRAY_DOT.replace(&stripped, "");
          format!("<li>{stripped}</li>")
        })
        .collect();
      format!("<ul>{items}</ul>")
    })
    .into_owned();

  // Paragraph wrapping; the regex crate has no lookahead, so lines that
  // already start block-level content are skipped in the replacer.
  text = LINE
    .replace_all(&text, |caps: &Captures| {
      let line = &caps[1];
      if starts_block(line) {
        (*line).to_owned()
      } else {
        format!("<p>{line}</p>")
      }
    })
    .into_owned();

  text
}

/// Lines that must not be paragraph-wrapped: markup already introduced by
/// an earlier rule, closing tags, and code block placeholders.
fn starts_block(line: &str) -> bool {
  line.starts_with("<h")
    || line.starts_with("<ul>")
    || line.starts_with("<pre")
    || line.starts_with("<p>")
    || line.starts_with("</")
    || line.starts_with(PLACEHOLDER_PREFIX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_heading_levels() {
    assert_eq!(transform_prose("# a"), "<h1>a</h1>");
    assert_eq!(transform_prose("### a"), "<h3>a</h3>");
    assert_eq!(transform_prose("###### a"), "<h6>a</h6>");
  }

  #[test]
  fn test_heading_longest_prefix_wins() {
    let html = transform_prose("###### deep");
    assert!(!html.contains("<h1>"));
    assert!(html.contains("<h6>deep</h6>"));
  }

  #[test]
  fn test_inline_code_span() {
    let html = transform_prose("use `x.y` here");
    assert!(html.contains("<code>x.y</code>"));
  }

  #[test]
  fn test_bold_before_italic() {
    let html = transform_prose("**bold** and *italic*");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<em>italic</em>"));
  }

  #[test]
  fn test_list_grouping() {
    let html = transform_prose("- a\n- b\n- c");
    assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
  }

  #[test]
  fn test_list_asterisk_marker() {
    let html = transform_prose("* one\n* two");
    assert_eq!(html, "<ul><li>one</li><li>two</li></ul>");
  }

  #[test]
  fn test_list_stray_dot_prefix() {
    let html = transform_prose("- . item");
    assert_eq!(html, "<ul><li>item</li></ul>");
  }

  #[test]
  fn test_paragraph_wrapping() {
    assert_eq!(transform_prose("hello"), "<p>hello</p>");
  }

  #[test]
  fn test_paragraph_skips_markup_lines() {
    let html = transform_prose("# t\nbody");
    assert_eq!(html, "<h1>t</h1>\n<p>body</p>");
  }

  #[test]
  fn test_placeholder_line_not_wrapped() {
    let html = transform_prose("__CODE_BLOCK_7_0__");
    assert_eq!(html, "__CODE_BLOCK_7_0__");
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(transform_prose(""), "");
  }
}
