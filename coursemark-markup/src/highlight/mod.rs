//! Built-in code highlighting.
//!
//! A small, closed set of languages each carries an ordered table of
//! (pattern, class) rules. Rules are applied in sequence over the
//! *already-escaped* code body, so markup-language patterns match the
//! `&lt;`/`&gt;` entity forms rather than raw angle brackets. Tokenization
//! works over a list of classified spans: each rule only claims text no
//! earlier rule has classified, so rule order encodes precedence (comments
//! before strings, strings before keywords) and a rule can never match
//! inside the markup produced for another rule's span.
//!
//! Unknown or absent language tags resolve to no rules at all, which
//! leaves the escaped body unchanged.

mod rules;

/// Languages with a built-in tokenizer rule table.
///
/// Resolved from fence tags via [`Language::from_tag`]; tags outside the
/// closed set have no `Language` and degrade to plain escaped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  /// JavaScript and TypeScript (tags: `js`, `javascript`, `ts`,
  /// `typescript`).
  Javascript,
  /// Python (tags: `py`, `python`).
  Python,
  /// Java (tag: `java`).
  Java,
  /// XML and HTML (tags: `xml`, `html`).
  Xml,
  /// JSON (tag: `json`).
  Json,
  /// Shell scripts (tags: `bash`, `sh`, `shell`).
  Shell,
  /// SQL (tag: `sql`).
  Sql,
}

impl Language {
  /// Resolve a fence language tag (case-insensitive) to a supported
  /// language.
  #[must_use]
  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag.to_lowercase().as_str() {
      "js" | "javascript" | "ts" | "typescript" => Some(Self::Javascript),
      "py" | "python" => Some(Self::Python),
      "java" => Some(Self::Java),
      "xml" | "html" => Some(Self::Xml),
      "json" => Some(Self::Json),
      "bash" | "sh" | "shell" => Some(Self::Shell),
      "sql" => Some(Self::Sql),
      _ => None,
    }
  }
}

/// Semantic classes a tokenizer rule may assign to a matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
  /// Reserved words of the language.
  Keyword,
  /// String literals, including template/triple-quoted forms.
  String,
  /// Integer and decimal literals.
  Number,
  /// Line and block comments.
  Comment,
  /// Markup tag names.
  Tag,
  /// Markup attribute names and JSON object keys.
  Attribute,
}

impl TokenClass {
  /// CSS class emitted on the wrapping `<span>`.
  #[must_use]
  pub const fn css_class(self) -> &'static str {
    match self {
      Self::Keyword => "tok-keyword",
      Self::String => "tok-string",
      Self::Number => "tok-number",
      Self::Comment => "tok-comment",
      Self::Tag => "tok-tag",
      Self::Attribute => "tok-attr",
    }
  }
}

/// Apply `language`'s ordered rule table to an already-escaped code body.
///
/// This is a pure text-to-text rewrite; the output is the input with
/// matched regions wrapped in classed `<span>` elements.
#[must_use]
pub fn tokenize(language: Language, escaped: &str) -> String {
  let mut spans = vec![rules::Span {
    text:  escaped.to_owned(),
    class: None,
  }];
  for rule in rules::table(language) {
    spans = spans
      .into_iter()
      .flat_map(|span| rule.apply(span))
      .collect();
  }
  spans.iter().map(rules::Span::render).collect()
}
