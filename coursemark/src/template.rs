//! Static HTML shell for full-page output.

use coursemark_markup::escape;

/// Standalone page wrapping a rendered fragment. The stylesheet carries the
/// `.prose` typography and the `tok-*` palette the tokenizer emits.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<style>
  body { margin: 0 auto; max-width: 48rem; padding: 2rem 1rem; font-family: system-ui, sans-serif; line-height: 1.5; color: #111827; }
  .prose h1, .prose h2, .prose h3, .prose h4, .prose h5, .prose h6 { margin: 0.7em 0 0.35em; font-weight: 700; }
  .prose p { margin: 0.45em 0; }
  .prose ul, .prose ol { margin: 0.5em 0; padding-left: 1.2em; }
  .prose ul { list-style: disc; list-style-position: outside; }
  .prose li { margin: 0.2em 0; }
  .prose pre { margin: 10px 0; overflow: auto; text-align: left; background: #1f2937; color: #f3f4f6; padding: 12px; border-radius: 8px; position: relative; }
  .prose pre .lang-badge { position: absolute; top: 6px; right: 8px; font-size: 12px; color: #9ca3af; }
  .prose code { font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace; }
  .tok-keyword { color: #93c5fd; }
  .tok-string  { color: #86efac; }
  .tok-number  { color: #fca5a5; }
  .tok-comment { color: #9ca3af; }
  .tok-tag     { color: #fcd34d; }
  .tok-attr    { color: #fde68a; }
</style>
</head>
<body>
<div class="prose">
{{content}}
</div>
</body>
</html>
"##;

/// Wrap a rendered HTML fragment in the standalone page shell. The title is
/// escaped; the fragment is trusted pipeline output and inserted as-is.
#[must_use]
pub fn render_page(title: &str, content: &str) -> String {
  PAGE_TEMPLATE
    .replace("{{title}}", &escape(title))
    .replace("{{content}}", content)
}
