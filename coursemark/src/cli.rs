use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use coursemark_markup::HighlightMode;

/// Command line interface for coursemark
#[derive(Parser, Debug)]
#[command(author, version, about = "Coursemark: course content toolkit")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a TOML configuration file
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,

  /// Base URL of the backend API
  #[arg(long = "api-url")]
  pub api_url: Option<String>,
}

/// All supported subcommands for the coursemark CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render a markdown file (or stdin) to HTML.
  Render {
    /// Path to the markdown file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write the HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a full standalone HTML page.
    #[arg(long = "full-page")]
    full_page: bool,

    /// Page title used with --full-page.
    #[arg(short = 'T', long, default_value = "Coursemark")]
    title: String,

    /// Code block highlighting strategy.
    #[arg(short = 'H', long, value_enum)]
    highlight: Option<HighlightArg>,
  },

  /// Log in to the backend and persist the session.
  Login {
    /// Username to authenticate as.
    username: String,
  },

  /// Register a new account and log in.
  Register {
    /// Username for the new account.
    username: String,

    /// Email address for the new account.
    #[arg(short, long)]
    email: String,
  },

  /// Discard the persisted session.
  Logout,

  /// List your courses.
  Courses,

  /// Request a generated course outline.
  Outline {
    /// Course title to build an outline for.
    title: String,

    /// Free-form wishes guiding the outline.
    #[arg(short, long, default_value = "")]
    wishes: String,
  },

  /// List the topics of a course.
  Topics {
    /// Course identifier.
    course_id: u64,
  },

  /// Generate a topic's content and render it to HTML.
  Topic {
    /// Topic identifier.
    topic_id: u64,

    /// Write the HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a full standalone HTML page.
    #[arg(long = "full-page")]
    full_page: bool,

    /// Code block highlighting strategy.
    #[arg(short = 'H', long, value_enum)]
    highlight: Option<HighlightArg>,
  },
}

/// Highlighting strategy as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightArg {
  /// Emit `tok-*` spans from the built-in tokenizer.
  Builtin,
  /// Keep `language-*` classes for a client-side highlighter.
  External,
  /// Plain escaped code bodies.
  None,
}

impl From<HighlightArg> for HighlightMode {
  fn from(arg: HighlightArg) -> Self {
    match arg {
      HighlightArg::Builtin => Self::Builtin,
      HighlightArg::External => Self::External,
      HighlightArg::None => Self::None,
    }
  }
}

impl Cli {
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_render_defaults() {
    let cli = Cli::try_parse_from(["coursemark", "render", "notes.md"]).unwrap();
    match cli.command {
      Commands::Render {
        input,
        full_page,
        highlight,
        ..
      } => {
        assert_eq!(input, Some(PathBuf::from("notes.md")));
        assert!(!full_page);
        assert_eq!(highlight, None);
      },
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn test_highlight_arg_maps_to_mode() {
    let cli =
      Cli::try_parse_from(["coursemark", "render", "-H", "external"]).unwrap();
    match cli.command {
      Commands::Render { highlight, .. } => {
        assert_eq!(
          highlight.map(HighlightMode::from),
          Some(HighlightMode::External)
        );
      },
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn test_topic_requires_id() {
    assert!(Cli::try_parse_from(["coursemark", "topic"]).is_err());
  }
}
