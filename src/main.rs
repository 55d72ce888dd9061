mod changes;
mod commands;
mod core;
mod release;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use crate::core::error::{CodelogError, print_error};
use crate::core::layout::ChangelogLayout;

/// Build a changelog from per-change YAML fragments
#[derive(Parser)]
#[command(name = "codelog")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Increase diagnostic output (-v, -vv, -vvv); RUST_LOG overrides
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Create the changelogs/ layout with a default configuration
  Setup,

  /// Add an unreleased change fragment from the template
  New {
    /// Short description used in the fragment file name
    name: Option<String>,
  },

  /// Release the unreleased fragments as VERSION
  Release {
    /// Version to release
    #[arg(id = "release_version", value_name = "VERSION")]
    version: Option<String>,
    /// Release date in `date_input_format` (default: today)
    date: Option<String>,
    /// Print the release entry without writing anything
    #[arg(long)]
    preview: bool,
    /// Print the preview as JSON
    #[arg(long, requires = "preview")]
    json: bool,
  },

  /// Release the next major, minor or patch version
  Bump {
    /// Version component to increment: major, minor, patch
    level: String,
    /// Release date in `date_input_format` (default: today)
    date: Option<String>,
    /// Print the release entry without writing anything
    #[arg(long)]
    preview: bool,
  },

  /// Rebuild the changelog from the header and every release file
  Regenerate,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();
  ui::logging::init(cli.verbose);

  let project_root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(CodelogError::from(e).context("Failed to get current directory")),
  };
  let layout = ChangelogLayout::new(project_root);

  let result = match cli.command {
    Commands::Setup => commands::run_setup(&layout),
    Commands::New { name } => commands::run_new(&layout, name).map(|_| ()),
    Commands::Release {
      version,
      date,
      preview,
      json,
    } => commands::run_release(&layout, version, date, preview, json),
    Commands::Bump { level, date, preview } => commands::run_bump(&layout, &level, date, preview),
    Commands::Regenerate => commands::run_regenerate(&layout),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: CodelogError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
