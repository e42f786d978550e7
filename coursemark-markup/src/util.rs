use regex::Regex;

/// Create a regex that never matches anything.
///
/// Used as a fallback when one of the static patterns fails to compile,
/// which turns a broken rule into a no-op instead of a panic at first use.
pub(crate) fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").expect("Failed to compile never-matching regex")
}
