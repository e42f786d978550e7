//! REST client for the course-generation backend.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::{
  error::{ApiError, ApiResult},
  types::{
    Course,
    CourseOutline,
    GeneratedTopic,
    LoginRequest,
    OutlineRequest,
    RegisterRequest,
    TokenResponse,
    Topic,
  },
};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Synchronous client for the backend REST API.
///
/// Carries an optional bearer token; endpoints that require
/// authentication return [`ApiError::Unauthenticated`] when it is absent.
pub struct ApiClient {
  agent:    Agent,
  base_url: String,
  token:    Option<String>,
}

impl ApiClient {
  /// Create a client for the backend at `base_url`, optionally
  /// authenticated with a session token.
  #[must_use]
  pub fn new(base_url: &str, token: Option<String>) -> Self {
    let agent: Agent = Agent::config_builder()
      .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
      .http_status_as_error(false)
      .build()
      .into();

    Self {
      agent,
      base_url: base_url.trim_end_matches('/').to_owned(),
      token,
    }
  }

  /// Whether this client carries a session token.
  #[must_use]
  pub const fn is_authenticated(&self) -> bool {
    self.token.is_some()
  }

  /// Exchange credentials for a bearer token.
  pub fn login(
    &self,
    username: &str,
    password: &str,
  ) -> ApiResult<TokenResponse> {
    let url = format!("{}/auth/login", self.base_url);
    debug!("POST {url}");
    let response = self
      .agent
      .post(&url)
      .header("Accept", "application/json")
      .send_json(LoginRequest { username, password })?;
    read_json_response(response)
  }

  /// Create a new account.
  pub fn register(
    &self,
    username: &str,
    email: &str,
    password: &str,
  ) -> ApiResult<()> {
    let url = format!("{}/auth/register", self.base_url);
    debug!("POST {url}");
    let response = self.agent.post(&url).send_json(RegisterRequest {
      username,
      email,
      password,
    })?;
    discard_response(response)
  }

  /// List the authenticated user's courses.
  pub fn my_courses(&self) -> ApiResult<Vec<Course>> {
    self.get_authed("/courses/mine")
  }

  /// Request generation of a course outline from a title and free-form
  /// wishes.
  pub fn create_outline(
    &self,
    title: &str,
    wishes: &str,
  ) -> ApiResult<CourseOutline> {
    let url = format!("{}/courses/outline", self.base_url);
    debug!("POST {url}");
    let response = self
      .agent
      .post(&url)
      .header("Authorization", &self.bearer()?)
      .header("Accept", "application/json")
      .send_json(OutlineRequest { title, wishes })?;
    read_json_response(response)
  }

  /// List the topics of one course.
  pub fn course_topics(&self, course_id: u64) -> ApiResult<Vec<Topic>> {
    self.get_authed(&format!("/courses/{course_id}/topics"))
  }

  /// Generate (or fetch the generated) content of a topic.
  pub fn generate_topic(&self, topic_id: u64) -> ApiResult<GeneratedTopic> {
    let url =
      format!("{}/courses/topics/{topic_id}/generate", self.base_url);
    debug!("POST {url}");
    let response = self
      .agent
      .post(&url)
      .header("Authorization", &self.bearer()?)
      .header("Accept", "application/json")
      .send_empty()?;
    read_json_response(response)
  }

  fn bearer(&self) -> ApiResult<String> {
    self
      .token
      .as_ref()
      .map(|token| format!("Bearer {token}"))
      .ok_or(ApiError::Unauthenticated)
  }

  fn get_authed<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
    let url = format!("{}{path}", self.base_url);
    debug!("GET {url}");
    let response = self
      .agent
      .get(&url)
      .header("Authorization", &self.bearer()?)
      .header("Accept", "application/json")
      .call()?;
    read_json_response(response)
  }
}

/// Check the status, then deserialize the JSON body.
fn read_json_response<T: DeserializeOwned>(
  response: ureq::http::Response<ureq::Body>,
) -> ApiResult<T> {
  let mut body = check_status(response)?;
  Ok(body.read_json()?)
}

/// Check the status and drop the body.
fn discard_response(
  response: ureq::http::Response<ureq::Body>,
) -> ApiResult<()> {
  check_status(response).map(|_| ())
}

fn check_status(
  response: ureq::http::Response<ureq::Body>,
) -> ApiResult<ureq::Body> {
  let status = response.status().as_u16();
  let mut body = response.into_body();
  if status >= 400 {
    let text = body
      .read_to_string()
      .unwrap_or_else(|_| "(unable to read error body)".to_owned());
    return Err(ApiError::Http { status, body: text });
  }
  Ok(body)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
  }

  #[test]
  fn test_unauthenticated_bearer() {
    let client = ApiClient::new("http://localhost:8000", None);
    assert!(!client.is_authenticated());
    assert!(matches!(
      client.bearer(),
      Err(ApiError::Unauthenticated)
    ));
  }

  #[test]
  fn test_bearer_header_value() {
    let client =
      ApiClient::new("http://localhost:8000", Some("tok".to_owned()));
    assert!(client.is_authenticated());
    assert_eq!(
      client.bearer().map_err(|e| e.to_string()),
      Ok("Bearer tok".to_owned())
    );
  }
}
