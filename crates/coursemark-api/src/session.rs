//! Persisted login session.

use std::{fs, io, path::Path};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

/// The bearer token and the username it was issued for, persisted as a
/// small JSON file between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub token:    String,
  pub username: String,
}

impl Session {
  /// Load the session from `path`.
  ///
  /// A missing file means logged out; an unreadable or corrupt file also
  /// degrades to logged out, with a warning.
  #[must_use]
  pub fn load(path: &Path) -> Option<Self> {
    let data = match fs::read_to_string(path) {
      Ok(data) => data,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
      Err(e) => {
        warn!("Failed to read session file {}: {e}", path.display());
        return None;
      },
    };

    match serde_json::from_str(&data) {
      Ok(session) => Some(session),
      Err(e) => {
        warn!("Ignoring corrupt session file {}: {e}", path.display());
        None
      },
    }
  }

  /// Persist the session to `path`, creating parent directories as
  /// needed.
  pub fn save(&self, path: &Path) -> ApiResult<()> {
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(self)?)?;
    debug!("Saved session for {} to {}", self.username, path.display());
    Ok(())
  }

  /// Remove the persisted session. Succeeds when none exists.
  pub fn clear(path: &Path) -> ApiResult<()> {
    match fs::remove_file(path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  fn sample() -> Session {
    Session {
      token:    "tok-123".to_owned(),
      username: "ada".to_owned(),
    }
  }

  #[test]
  fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    sample().save(&path).unwrap();
    assert_eq!(Session::load(&path), Some(sample()));
  }

  #[test]
  fn test_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/state/session.json");

    sample().save(&path).unwrap();
    assert!(path.exists());
  }

  #[test]
  fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Session::load(&dir.path().join("absent.json")), None);
  }

  #[test]
  fn test_load_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{not json").unwrap();

    assert_eq!(Session::load(&path), None);
  }

  #[test]
  fn test_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    sample().save(&path).unwrap();
    Session::clear(&path).unwrap();
    assert!(!path.exists());
    // Clearing again is not an error
    Session::clear(&path).unwrap();
  }
}
