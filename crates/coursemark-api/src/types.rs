//! JSON shapes exchanged with the course-generation backend.

use serde::{Deserialize, Serialize};

/// A course owned by the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
  pub id:    u64,
  pub title: String,
}

/// One topic of a course outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
  pub id:    u64,
  pub title: String,
}

/// Response to an outline request: the created course and its topics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseOutline {
  pub course_id: u64,
  pub topics:    Vec<Topic>,
}

/// AI-generated content of a single topic, together with enough context
/// to navigate back to the course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedTopic {
  pub course_title: String,
  pub course_id:    u64,
  pub topic_id:     u64,
  /// Raw markdown dialect, to be fed through the rendering pipeline.
  pub content:      String,
}

/// Response to a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
  pub access_token: String,
  #[serde(default)]
  pub token_type:   Option<String>,
}

/// Login form payload.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
  pub username: &'a str,
  pub password: &'a str,
}

/// Registration form payload.
#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
  pub username: &'a str,
  pub email:    &'a str,
  pub password: &'a str,
}

/// Outline request payload: the course title plus free-form wishes that
/// steer topic generation.
#[derive(Debug, Serialize)]
pub(crate) struct OutlineRequest<'a> {
  pub title:  &'a str,
  pub wishes: &'a str,
}
