//! Subcommand implementations.

use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use coursemark_api::{ApiClient, Session};
use coursemark_markup::{HighlightMode, MarkupRenderer, RenderOptions};
use log::info;

use crate::{cli::HighlightArg, config::Config, template};

/// Render a markdown file (or stdin) to an HTML fragment or full page.
pub fn render(
  config: &Config,
  input: Option<&Path>,
  output: Option<&Path>,
  full_page: bool,
  title: &str,
  highlight: Option<HighlightArg>,
) -> Result<()> {
  let markdown = match input {
    Some(path) => fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
    None => {
      let mut buffer = String::new();
      io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("Failed to read stdin")?;
      buffer
    },
  };

  let html = render_fragment(config, &markdown, highlight);
  let html = if full_page {
    template::render_page(title, &html)
  } else {
    html
  };
  write_output(&html, output)
}

/// Log in and persist the session.
pub fn login(config: &Config, username: &str) -> Result<()> {
  let password = prompt_password()?;
  let client = ApiClient::new(&config.api_url, None);
  let token = client.login(username, &password)?;

  let session = Session {
    token:    token.access_token,
    username: username.to_owned(),
  };
  session.save(&config.session_file)?;
  println!("Logged in as {username}");
  Ok(())
}

/// Create an account, then log in with the same credentials.
pub fn register(config: &Config, username: &str, email: &str) -> Result<()> {
  let password = prompt_password()?;
  let client = ApiClient::new(&config.api_url, None);
  client.register(username, email, &password)?;
  info!("Registered account {username}");

  let token = client.login(username, &password)?;
  let session = Session {
    token:    token.access_token,
    username: username.to_owned(),
  };
  session.save(&config.session_file)?;
  println!("Registered and logged in as {username}");
  Ok(())
}

/// Discard the persisted session.
pub fn logout(config: &Config) -> Result<()> {
  Session::clear(&config.session_file)?;
  println!("Logged out");
  Ok(())
}

/// List the user's courses.
pub fn courses(config: &Config) -> Result<()> {
  let client = authed_client(config)?;
  let courses = client.my_courses()?;

  if courses.is_empty() {
    println!("No courses yet");
    return Ok(());
  }
  for course in courses {
    println!("{:>6}  {}", course.id, course.title);
  }
  Ok(())
}

/// Request a generated outline and print its topics.
pub fn outline(config: &Config, title: &str, wishes: &str) -> Result<()> {
  let client = authed_client(config)?;
  let outline = client.create_outline(title, wishes)?;

  println!("Course {} outline:", outline.course_id);
  for topic in outline.topics {
    println!("{:>6}  {}", topic.id, topic.title);
  }
  Ok(())
}

/// List the topics of one course.
pub fn topics(config: &Config, course_id: u64) -> Result<()> {
  let client = authed_client(config)?;
  let topics = client.course_topics(course_id)?;

  if topics.is_empty() {
    println!("Course {course_id} has no topics");
    return Ok(());
  }
  for topic in topics {
    println!("{:>6}  {}", topic.id, topic.title);
  }
  Ok(())
}

/// Generate a topic's content and render it through the pipeline.
pub fn topic(
  config: &Config,
  topic_id: u64,
  output: Option<&Path>,
  full_page: bool,
  highlight: Option<HighlightArg>,
) -> Result<()> {
  let client = authed_client(config)?;
  let generated = client.generate_topic(topic_id)?;
  info!(
    "Generated topic {} of course {} ({})",
    generated.topic_id, generated.course_id, generated.course_title
  );

  let html = render_fragment(config, &generated.content, highlight);
  let html = if full_page {
    template::render_page(&generated.course_title, &html)
  } else {
    html
  };
  write_output(&html, output)
}

fn render_fragment(
  config: &Config,
  markdown: &str,
  highlight: Option<HighlightArg>,
) -> String {
  let mode = highlight
    .map(HighlightMode::from)
    .or(config.highlight)
    .unwrap_or_default();
  MarkupRenderer::new(RenderOptions { highlight: mode }).render(markdown)
}

fn write_output(html: &str, output: Option<&Path>) -> Result<()> {
  match output {
    Some(path) => {
      fs::write(path, html)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
      info!("Wrote {}", path.display());
    },
    None => println!("{html}"),
  }
  Ok(())
}

fn authed_client(config: &Config) -> Result<ApiClient> {
  let Some(session) = Session::load(&config.session_file) else {
    bail!("Not logged in. Run `coursemark login <username>` first.");
  };
  Ok(ApiClient::new(&config.api_url, Some(session.token)))
}

fn prompt_password() -> Result<String> {
  eprint!("Password: ");
  io::stderr().flush()?;
  let mut password = String::new();
  io::stdin()
    .read_line(&mut password)
    .wrap_err("Failed to read password")?;
  Ok(password.trim_end_matches(['\r', '\n']).to_owned())
}
