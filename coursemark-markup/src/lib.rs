//! # coursemark-markup
//!
//! Rendering pipeline for the constrained markdown dialect used by
//! AI-generated course content: headings, bold/italic, inline code, fenced
//! code blocks with language tags, unordered lists and paragraphs. The
//! pipeline converts raw text into a restricted, already-sanitized HTML
//! vocabulary that a display surface may embed verbatim.
//!
//! ## Quick start
//!
//! ```rust
//! use coursemark_markup::{MarkupRenderer, RenderOptions};
//!
//! let renderer = MarkupRenderer::new(RenderOptions::default());
//! let html = renderer.render("# Hello\n\nSome **bold** text.");
//!
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```
//!
//! ## Pipeline
//!
//! 1. Fenced code regions are lifted out and replaced by opaque placeholder
//!    tokens ([`fence`]).
//! 2. The remaining prose is escaped ([`escape()`]) and rewritten through
//!    an ordered list of substitution rules ([`prose`]).
//! 3. Each placeholder is substituted back with its rendered code block.
//!
//! Code block bodies are escaped and, depending on
//! [`HighlightMode`], run through a small per-language rule table
//! ([`highlight`]) that wraps keywords, strings, numbers, comments and
//! markup tags in classed `<span>` elements.
//!
//! The pipeline is total: any string input produces some output, and
//! malformed constructs degrade to escaped paragraph text instead of
//! failing.

pub mod escape;
pub mod fence;
pub mod highlight;
pub mod prose;
pub mod renderer;

pub(crate) mod util;

pub use crate::{
  escape::escape,
  fence::{Extraction, FencedBlock, extract_fences},
  highlight::{Language, TokenClass, tokenize},
  prose::transform_prose,
  renderer::{HighlightMode, MarkupRenderer, RenderOptions, render_markup},
};
