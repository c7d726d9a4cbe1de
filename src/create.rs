// src/create.rs
use std::path::Path;

use console::style;
use log::{debug, info};

use crate::cli::Cli;
use crate::error::BuildError;
use crate::install;
use crate::prompt;
use crate::report;
use crate::scaffold::{self, Outcome};

/// The whole pipeline: resolve inputs, materialize the project, optionally
/// install dependencies, print next steps. Control flows strictly forward;
/// the resolved configuration is the only state passed between stages.
pub fn run_create(cli: &Cli, cwd: &Path, templates_dir: &Path) -> Result<(), BuildError> {
  info!("Running create pipeline...");

  let config = prompt::resolve_config(cli)?;
  debug!("Resolved config: {:?}", config);

  let destination = match scaffold::materialize(&config, cwd, templates_dir)? {
    Outcome::Created { path } => path,
    Outcome::ComingSoon => {
      println!(
        "\n{}\n",
        style(format!(
          "⚠️  The \"{}\" template is coming soon! Stay tuned.",
          config.template
        ))
        .yellow()
      );
      return Ok(());
    }
  };
  info!("Project materialized at {}", destination.display());

  if config.should_install {
    install::install_dependencies(&destination, config.package_manager);
  } else {
    println!("\n{}\n", style("⚠️  Skipped dependency installation.").yellow());
  }

  report::print_success(&config, config.should_install);

  Ok(())
}
