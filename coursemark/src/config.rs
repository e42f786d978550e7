use std::{
  env, fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use coursemark_markup::HighlightMode;
use log::debug;
use serde::Deserialize;

use crate::cli::Cli;

/// Settings read from an optional TOML file and overridden by flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Base URL of the backend API.
  pub api_url: String,

  /// Where the login session is persisted.
  pub session_file: PathBuf,

  /// Default highlighting strategy for rendered code blocks.
  pub highlight: Option<HighlightMode>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_url:      "http://localhost:8000".to_owned(),
      session_file: default_session_file(),
      highlight:    None,
    }
  }
}

impl Config {
  /// Load configuration, merging the config file (if any) with CLI flags.
  /// Flags win over file values.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = match &cli.config_file {
      Some(path) => Self::from_file(path)?,
      None => Self::default(),
    };

    if let Some(api_url) = &cli.api_url {
      config.api_url = api_url.clone();
    }

    Ok(config)
  }

  fn from_file(path: &Path) -> Result<Self> {
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read config file: {}", path.display())
    })?;
    toml::from_str(&content).wrap_err_with(|| {
      format!("Failed to parse config file: {}", path.display())
    })
  }
}

fn default_session_file() -> PathBuf {
  let base = env::var_os("XDG_CONFIG_HOME").map_or_else(
    || {
      env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), |home| PathBuf::from(home).join(".config"))
    },
    PathBuf::from,
  );
  base.join("coursemark").join("session.json")
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use std::io::Write;

  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.api_url, "http://localhost:8000");
    assert!(config.session_file.ends_with("coursemark/session.json"));
    assert_eq!(config.highlight, None);
  }

  #[test]
  fn test_parse_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
      file,
      "api_url = \"https://api.example.org\"\n\
       session_file = \"/tmp/session.json\"\n\
       highlight = \"external\""
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.api_url, "https://api.example.org");
    assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
    assert_eq!(config.highlight, Some(HighlightMode::External));
  }

  #[test]
  fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_url = \"https://api.example.org\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.api_url, "https://api.example.org");
    assert!(config.session_file.ends_with("coursemark/session.json"));
  }

  #[test]
  fn test_unknown_key_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_uri = \"typo\"").unwrap();

    assert!(Config::from_file(file.path()).is_err());
  }
}
