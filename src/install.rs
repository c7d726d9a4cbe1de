// src/install.rs
use std::path::Path;

use console::style;
use duct::cmd;
use log::{debug, warn};

use crate::config::PackageManager;

/// Program and arguments for a manager's install invocation. Yarn's bare
/// invocation already performs an install; the rest take an explicit
/// `install` argument.
pub fn install_command(package_manager: PackageManager) -> (&'static str, Vec<&'static str>) {
  match package_manager {
    PackageManager::Yarn => ("yarn", vec![]),
    other => (other.as_str(), vec!["install"]),
  }
}

/// Runs the selected package manager in `project_path` with inherited
/// standard streams. A non-zero exit or a launch failure is reported as a
/// warning and never propagates.
pub fn install_dependencies(project_path: &Path, package_manager: PackageManager) {
  println!(
    "\n{}\n",
    style(format!("📦 Installing dependencies using {}...", package_manager)).cyan()
  );

  let (program, args) = install_command(package_manager);
  debug!(
    "Running `{} {}` in {}",
    program,
    args.join(" "),
    project_path.display()
  );

  match cmd(program, args).dir(project_path).unchecked().run() {
    Ok(output) if output.status.success() => {
      println!("\n{}\n", style("✅ Dependencies installed successfully!").green());
    }
    Ok(output) => {
      let status_display = output
        .status
        .code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "terminated by signal".to_string());
      warn!("{} exited with status {}", program, status_display);
      report_failure(&format!("Command failed with code {}", status_display));
    }
    Err(launch_err) => {
      warn!("Could not launch {}: {}", program, launch_err);
      report_failure(&launch_err.to_string());
    }
  }
}

fn report_failure(message: &str) {
  println!(
    "\n{}",
    style("⚠️  Failed to install dependencies automatically.").yellow()
  );
  println!("{}\n", style(format!("Error: {}", message)).yellow());
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn yarn_installs_with_a_bare_invocation() {
    assert_eq!(install_command(PackageManager::Yarn), ("yarn", vec![]));
  }

  #[test]
  fn other_managers_take_an_install_argument() {
    assert_eq!(install_command(PackageManager::Npm), ("npm", vec!["install"]));
    assert_eq!(install_command(PackageManager::Pnpm), ("pnpm", vec!["install"]));
    assert_eq!(install_command(PackageManager::Bun), ("bun", vec!["install"]));
  }
}
