//! Minimal escaping for untrusted text.

/// Escape `&`, `<` and `>` for safe embedding in markup.
///
/// The ampersand is replaced first so that entities introduced by the other
/// two substitutions are not escaped a second time. This is deliberately a
/// naive character substitution rather than an entity-aware encoder: input
/// that already contains entity-like text (`&amp;`) is escaped again, and
/// the function must be applied exactly once per text segment.
#[must_use]
pub fn escape(text: &str) -> String {
  text
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}
