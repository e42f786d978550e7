//! Per-language tokenizer rule tables.
//!
//! Each table is an ordered list of rules compiled once behind a
//! `LazyLock` and treated as read-only thereafter. Patterns are written
//! against escaped text.
//!
//! Rules operate on a list of [`Span`]s rather than on the markup string,
//! so a later rule can never match inside the `<span>` wrappers an earlier
//! rule produced. Earlier rules claim text first: a keyword inside an
//! already-classified comment stays part of the comment.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use super::{Language, TokenClass};
use crate::util::never_matching_regex;

/// Integer or decimal literal.
const NUMBER: &str = r"\b\d+(?:\.\d+)?\b";

/// A classified substring of the code body. `class` is `None` for text no
/// rule has claimed yet.
#[derive(Debug, Clone)]
pub(super) struct Span {
  pub(super) text:  String,
  pub(super) class: Option<TokenClass>,
}

impl Span {
  fn new(text: &str, class: Option<TokenClass>) -> Self {
    Self {
      text: text.to_owned(),
      class,
    }
  }

  /// Render the span, wrapping classified text in a classed `<span>`.
  pub(super) fn render(&self) -> String {
    self.class.map_or_else(
      || self.text.clone(),
      |class| {
        format!(
          "<span class=\"{}\">{}</span>",
          class.css_class(),
          self.text
        )
      },
    )
  }
}

/// A single tokenizer rule: a pattern and what to do with its matches.
pub(super) struct HighlightRule {
  pattern: Regex,
  action:  RuleAction,
}

enum RuleAction {
  /// Classify the whole match.
  Claim(TokenClass),
  /// Split an escaped markup tag into delimiter, tag name and
  /// attribute/value spans.
  MarkupTag,
}

impl HighlightRule {
  fn claim(pattern: &str, class: TokenClass) -> Self {
    Self {
      pattern: compile(pattern),
      action:  RuleAction::Claim(class),
    }
  }

  fn markup_tag(pattern: &str) -> Self {
    Self {
      pattern: compile(pattern),
      action:  RuleAction::MarkupTag,
    }
  }

  /// Apply this rule to one span. Already-classified spans pass through
  /// untouched; unclassified spans are split around the matches.
  pub(super) fn apply(&self, span: Span) -> Vec<Span> {
    if span.class.is_some() {
      return vec![span];
    }

    let mut out = Vec::new();
    let mut last = 0;

    match self.action {
      RuleAction::Claim(class) => {
        for m in self.pattern.find_iter(&span.text) {
          push_span(&mut out, &span.text[last..m.start()], None);
          push_span(&mut out, m.as_str(), Some(class));
          last = m.end();
        }
      },
      RuleAction::MarkupTag => {
        for caps in self.pattern.captures_iter(&span.text) {
          let Some(whole) = caps.get(0) else { continue };
          push_span(&mut out, &span.text[last..whole.start()], None);
          push_span(&mut out, &caps[1], None);
          push_span(&mut out, &caps[2], Some(TokenClass::Tag));
          push_attr_spans(&mut out, &caps[3]);
          push_span(&mut out, &caps[4], None);
          last = whole.end();
        }
      },
    }

    if out.is_empty() {
      return vec![span];
    }
    push_span(&mut out, &span.text[last..], None);
    out
  }
}

fn push_span(out: &mut Vec<Span>, text: &str, class: Option<TokenClass>) {
  if !text.is_empty() {
    out.push(Span::new(text, class));
  }
}

/// Split the attribute section of a tag into name/`=`/value spans.
fn push_attr_spans(out: &mut Vec<Span>, attrs: &str) {
  let mut last = 0;
  for caps in MARKUP_ATTR.captures_iter(attrs) {
    let Some(whole) = caps.get(0) else { continue };
    push_span(out, &attrs[last..whole.start()], None);
    push_span(out, &caps[1], Some(TokenClass::Attribute));
    push_span(out, &caps[2], None);
    push_span(out, &caps[3], Some(TokenClass::String));
    last = whole.end();
  }
  push_span(out, &attrs[last..], None);
}

fn compile(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    error!("Failed to compile highlight rule /{pattern}/: {e}");
    never_matching_regex()
  })
}

/// `attribute="value"` pairs inside an escaped markup tag.
static MARKUP_ATTR: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"([a-zA-Z_:][a-zA-Z0-9:._-]*)(=)("[^"]*"|'[^']*')"#)
    .unwrap_or_else(|e| {
      error!("Failed to compile MARKUP_ATTR regex: {e}");
      never_matching_regex()
    })
});

static JAVASCRIPT: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r"(?m)//.*$", TokenClass::Comment),
    HighlightRule::claim(
      r#""[^"]*"|'[^']*'|`[^`]*`"#,
      TokenClass::String,
    ),
    HighlightRule::claim(NUMBER, TokenClass::Number),
    HighlightRule::claim(
      r"\b(?:const|let|var|function|return|if|else|for|while|class|extends|new|try|catch|finally|throw|import|from|export|default|await|async|switch|case|break|continue|this|super)\b",
      TokenClass::Keyword,
    ),
  ]
});

static PYTHON: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r"(?m)#.*$", TokenClass::Comment),
    HighlightRule::claim(
      r#"(?s)""".*?"""|'''.*?'''|"[^"]*"|'[^']*'"#,
      TokenClass::String,
    ),
    HighlightRule::claim(NUMBER, TokenClass::Number),
    HighlightRule::claim(
      r"\b(?:def|class|return|if|elif|else|for|while|try|except|finally|with|as|import|from|pass|break|continue|lambda|yield|global|nonlocal|assert|raise|in|is|and|or|not)\b",
      TokenClass::Keyword,
    ),
  ]
});

static JAVA: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r"(?m)//.*$", TokenClass::Comment),
    HighlightRule::claim(r"(?s)/\*.*?\*/", TokenClass::Comment),
    HighlightRule::claim(r#""[^"]*""#, TokenClass::String),
    HighlightRule::claim(NUMBER, TokenClass::Number),
    HighlightRule::claim(
      r"\b(?:class|interface|enum|public|private|protected|static|final|void|int|long|double|float|boolean|char|new|return|if|else|for|while|try|catch|finally|throw|throws|extends|implements|package|import)\b",
      TokenClass::Keyword,
    ),
  ]
});

static XML: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r"(?s)&lt;!--.*?--&gt;", TokenClass::Comment),
    HighlightRule::markup_tag(
      r"(&lt;/?)([a-zA-Z0-9:-]+)([^&]*?)(\s*/??&gt;)",
    ),
  ]
});

static JSON: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r#""[^"]*"\s*:"#, TokenClass::Attribute),
    HighlightRule::claim(r#""[^"]*""#, TokenClass::String),
    HighlightRule::claim(NUMBER, TokenClass::Number),
  ]
});

static SHELL: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r"(?m)^#.*", TokenClass::Comment),
    HighlightRule::claim(r#""[^"]*"|'[^']*'"#, TokenClass::String),
    HighlightRule::claim(NUMBER, TokenClass::Number),
  ]
});

static SQL: LazyLock<Vec<HighlightRule>> = LazyLock::new(|| {
  vec![
    HighlightRule::claim(r"(?m)--.*$", TokenClass::Comment),
    HighlightRule::claim(r#""[^"]*"|'[^']*'"#, TokenClass::String),
    HighlightRule::claim(
      r"(?i)\b(?:SELECT|FROM|WHERE|AND|OR|INSERT|INTO|VALUES|UPDATE|SET|DELETE|JOIN|LEFT|RIGHT|INNER|OUTER|ON|GROUP BY|ORDER BY|LIMIT|OFFSET)\b",
      TokenClass::Keyword,
    ),
  ]
});

/// The ordered rule table for `language`.
pub(super) fn table(language: Language) -> &'static [HighlightRule] {
  match language {
    Language::Javascript => &JAVASCRIPT,
    Language::Python => &PYTHON,
    Language::Java => &JAVA,
    Language::Xml => &XML,
    Language::Json => &JSON,
    Language::Shell => &SHELL,
    Language::Sql => &SQL,
  }
}
