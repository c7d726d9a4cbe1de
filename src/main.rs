// src/main.rs
use std::path::PathBuf;
use std::{env, process};

use clap::Parser;
use console::style;
use log::LevelFilter;

use create_leeais::cli::Cli;
use create_leeais::create;
use create_leeais::error::BuildError;

fn main() {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  if let Err(err) = run(cli) {
    eprintln!("\n{} {}\n", style("❌ An error occurred:").red(), err);
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<(), BuildError> {
  println!("\n{}\n", style("🚀 Leeais Project Builder").cyan().bold());

  let templates_dir = determine_templates_dir(cli.templates_dir.clone())?;
  log::debug!("Using templates directory: {}", templates_dir.display());

  let cwd = env::current_dir()?;
  create::run_create(&cli, &cwd, &templates_dir)
}

/// Determines the templates directory path.
/// Order of preference:
/// 1. --templates-dir CLI argument
/// 2. CREATE_LEEAIS_TEMPLATES_DIR environment variable
/// 3. templates/ subdirectory relative to the executable
/// 4. templates/ subdirectory relative to the current working directory (fallback)
fn determine_templates_dir(cli_path: Option<PathBuf>) -> Result<PathBuf, BuildError> {
  if let Some(path) = cli_path {
    if path.is_dir() {
      return Ok(path);
    } else {
      log::warn!(
        "Provided --templates-dir path does not exist or is not a directory: {}",
        path.display()
      );
    }
  }

  // Env variable check happens automatically via clap's `env` attribute

  // Relative to executable
  if let Ok(mut exe_path) = env::current_exe() {
    exe_path.pop(); // Remove the executable name
    let path = exe_path.join("templates");
    if path.is_dir() {
      return Ok(path);
    }
  }

  // Relative to current working directory as a last resort
  let path = PathBuf::from("templates");
  if path.is_dir() {
    return Ok(path);
  }

  Err(BuildError::CannotDetermineTemplatesDir)
}
