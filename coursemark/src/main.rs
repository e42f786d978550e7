use color_eyre::eyre::Result;
use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod template;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let config = Config::load(&cli)?;

  match cli.command {
    Commands::Render {
      input,
      output,
      full_page,
      title,
      highlight,
    } => commands::render(
      &config,
      input.as_deref(),
      output.as_deref(),
      full_page,
      &title,
      highlight,
    ),
    Commands::Login { username } => commands::login(&config, &username),
    Commands::Register { username, email } => {
      commands::register(&config, &username, &email)
    },
    Commands::Logout => commands::logout(&config),
    Commands::Courses => commands::courses(&config),
    Commands::Outline { title, wishes } => {
      commands::outline(&config, &title, &wishes)
    },
    Commands::Topics { course_id } => commands::topics(&config, course_id),
    Commands::Topic {
      topic_id,
      output,
      full_page,
      highlight,
    } => commands::topic(
      &config,
      topic_id,
      output.as_deref(),
      full_page,
      highlight,
    ),
  }
}
