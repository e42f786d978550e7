//! # coursemark-api
//!
//! Synchronous client for the course-generation backend: authentication,
//! course/topic listing, outline creation and topic content generation.
//! Also owns the persisted login session (the CLI analog of a browser's
//! key-value session store).
//!
//! The rendering pipeline never touches this crate; it only ever sees the
//! already-fetched content string.

mod client;
mod error;
mod session;
mod types;

pub use crate::{
  client::ApiClient,
  error::{ApiError, ApiResult},
  session::Session,
  types::{Course, CourseOutline, GeneratedTopic, TokenResponse, Topic},
};
