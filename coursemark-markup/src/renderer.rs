//! Top-level rendering pipeline.
//!
//! Composes fence extraction, prose transformation and placeholder
//! reassembly into a single total function over raw document strings.

use serde::{Deserialize, Serialize};

use crate::{
  escape::escape,
  fence::{FencedBlock, extract_fences},
  highlight::{Language, tokenize},
  prose::transform_prose,
};

/// Which path produces the body markup of rendered code blocks.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
  /// Use the built-in per-language tokenizer rule tables.
  #[default]
  Builtin,
  /// Emit plain escaped bodies; the badge and `language-*` class are kept
  /// as the mount contract for a caller-side highlighter that rewrites
  /// code element contents after render.
  External,
  /// Emit plain escaped bodies with no language class at all.
  None,
}

/// Options for configuring the markup renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
  /// Code block highlighting mode.
  pub highlight: HighlightMode,
}

/// Renderer for the constrained course markdown dialect.
///
/// Each [`render`](Self::render) call is independent and side-effect-free;
/// nothing persists between calls.
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
  options: RenderOptions,
}

impl MarkupRenderer {
  /// Create a renderer with the given options.
  #[must_use]
  pub const fn new(options: RenderOptions) -> Self {
    Self { options }
  }

  /// The options this renderer was created with.
  #[must_use]
  pub const fn options(&self) -> &RenderOptions {
    &self.options
  }

  /// Render a raw document to the restricted markup vocabulary.
  ///
  /// Total over all inputs: malformed constructs degrade to escaped
  /// paragraph text rather than failing.
  #[must_use]
  pub fn render(&self, raw: &str) -> String {
    let extraction =
      extract_fences(raw, |block| self.render_code_block(block));
    let escaped = escape(extraction.text.trim());
    let markup = transform_prose(&escaped);
    extraction.reassemble(&markup)
  }

  /// Render one fenced block into its `<pre>`/`<code>` container.
  fn render_code_block(&self, block: &FencedBlock) -> String {
    let escaped = escape(&block.body);
    let language = block.language.as_deref();

    let body = match (self.options.highlight, language) {
      (HighlightMode::Builtin, Some(tag)) => Language::from_tag(tag)
        .map_or_else(|| escaped.clone(), |lang| tokenize(lang, &escaped)),
      _ => escaped,
    };

    let badge = language.map_or_else(String::new, |tag| {
      format!("<span class=\"lang-badge\">{tag}</span>")
    });
    let code_class = match (self.options.highlight, language) {
      (HighlightMode::None, _) | (_, None) => String::new(),
      (_, Some(tag)) => format!(" class=\"language-{tag}\""),
    };

    format!(
      "<pre class=\"code-block\">{badge}<code{code_class}>{body}</code></pre>"
    )
  }
}

/// Render `raw` with default options.
#[must_use]
pub fn render_markup(raw: &str) -> String {
  MarkupRenderer::default().render(raw)
}
