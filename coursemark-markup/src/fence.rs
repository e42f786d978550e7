//! Fenced code block extraction.
//!
//! Scans the raw document for triple-backtick fences, hands each one to a
//! caller-supplied block renderer, and replaces the fenced region with an
//! opaque placeholder token that is inert to every prose rewrite rule.
//! Unterminated fences deliberately stay in the text and fall through to
//! the prose path.

use std::sync::{
  LazyLock,
  atomic::{AtomicU64, Ordering},
};

use log::error;
use regex::{Captures, Regex};

use crate::util::never_matching_regex;

/// A fence delimited by three backticks, with an optional language tag
/// glued to the opening fence. The body capture requires a closing fence,
/// so an unterminated fence never matches.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)```([a-zA-Z0-9_+-]+)?\n(.*?)```").unwrap_or_else(|e| {
    error!("Failed to compile FENCE regex: {e}");
    never_matching_regex()
  })
});

/// Runs of two or more newlines inside a code body.
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\n{2,}").unwrap_or_else(|e| {
    error!("Failed to compile BLANK_RUNS regex: {e}");
    never_matching_regex()
  })
});

/// Common prefix of every placeholder token. The prose transformer treats
/// lines starting with this prefix as block-level content.
pub const PLACEHOLDER_PREFIX: &str = "__CODE_BLOCK_";

/// Monotonic per-render serial embedded in placeholder tokens so that a
/// user-typed literal like `__CODE_BLOCK_0__` can never alias a token
/// generated for the current call.
static RENDER_SERIAL: AtomicU64 = AtomicU64::new(0);

/// A fenced code region lifted out of the raw document.
///
/// The language tag is lowercased (or absent when the fence carried none)
/// and the body is normalized: leading/trailing blank lines trimmed and
/// internal blank-line runs collapsed to single newlines. The collapse is
/// a deliberate lossy normalization, not a faithful code round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
  /// Lowercased language tag from the opening fence, if any.
  pub language: Option<String>,
  /// Normalized code body.
  pub body:     String,
}

/// Result of [`extract_fences`]: the document with fences replaced by
/// placeholder tokens, plus the rendered block markup in order of
/// appearance.
#[derive(Debug, Clone)]
pub struct Extraction {
  /// The document text with each fenced region replaced by a placeholder.
  pub text:   String,
  /// Rendered markup for each block, indexable by placeholder index.
  pub blocks: Vec<String>,
  serial:     u64,
}

impl Extraction {
  /// The placeholder token standing in for block `index` in this call.
  #[must_use]
  pub fn placeholder(&self, index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{}_{index}__", self.serial)
  }

  /// Substitute every placeholder token in `markup` with its stored block
  /// markup, in ascending index order.
  #[must_use]
  pub fn reassemble(&self, markup: &str) -> String {
    let mut out = markup.to_owned();
    for (index, block) in self.blocks.iter().enumerate() {
      out = out.replace(&self.placeholder(index), block);
    }
    out
  }
}

/// Find all fenced code regions in `raw`, render each through `render`,
/// and return the text with fences replaced by placeholder tokens.
///
/// Line endings are normalized (CRLF to LF) before scanning. Blocks are
/// processed in left-to-right order of appearance; the placeholder index
/// is a zero-based counter over blocks found so far in this call.
pub fn extract_fences<F>(raw: &str, mut render: F) -> Extraction
where
  F: FnMut(&FencedBlock) -> String,
{
  let normalized = raw.replace("\r\n", "\n");
  let serial = RENDER_SERIAL.fetch_add(1, Ordering::Relaxed);

  let mut blocks = Vec::new();
  let text = FENCE
    .replace_all(&normalized, |caps: &Captures| {
      let block = FencedBlock {
        language: caps.get(1).map(|m| m.as_str().to_lowercase()),
        body:     normalize_body(caps.get(2).map_or("", |m| m.as_str())),
      };
      let token = format!("{PLACEHOLDER_PREFIX}{serial}_{}__", blocks.len());
      blocks.push(render(&block));
      token
    })
    .into_owned();

  Extraction {
    text,
    blocks,
    serial,
  }
}

/// Collapse blank-line runs and trim leading/trailing blank lines.
fn normalize_body(body: &str) -> String {
  BLANK_RUNS
    .replace_all(body, "\n")
    .trim_matches('\n')
    .to_owned()
}
