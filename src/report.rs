// src/report.rs
use console::style;

use crate::config::{ResolvedConfig, Template};

/// Ordered command lines telling the user how to enter the project, install
/// dependencies if that was skipped, and start the right dev workflow for
/// their template and package manager.
pub fn next_steps(config: &ResolvedConfig, installed: bool) -> Vec<String> {
  let pm = config.package_manager;
  let mut lines = vec![format!("cd {}", config.project_name)];

  if !installed {
    lines.push(format!("{} install", pm));
  }

  match config.template {
    Template::ReactNative => {
      lines.push(format!("{} start", pm));
      lines.push(format!("{} run android  (or ios)", pm));
    }
    _ => {
      let run = if pm.needs_run_keyword() { "run " } else { "" };
      lines.push(format!("{} {}dev", pm, run));
    }
  }

  lines
}

/// Prints the summary plus the follow-up git hint.
pub fn print_success(config: &ResolvedConfig, installed: bool) {
  println!("{}", style("🎉 Done! Now run:\n").green().bold());
  for line in next_steps(config, installed) {
    println!("  {}", line);
  }
  println!();

  println!("{}", style("------------------------------------").dim());
  println!(
    "👉  Get started with Git:\n    git init\n    {} run prepare",
    config.package_manager
  );
  println!("{}", style("------------------------------------").dim());
  println!();
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::PackageManager;

  fn config(
    template: Template,
    package_manager: PackageManager,
    should_install: bool,
  ) -> ResolvedConfig {
    ResolvedConfig {
      project_name: "my-app".to_string(),
      template,
      package_manager,
      should_install,
    }
  }

  #[test]
  fn npm_react_with_install_done() {
    let lines = next_steps(&config(Template::React, PackageManager::Npm, true), true);
    assert_eq!(lines, vec!["cd my-app", "npm run dev"]);
  }

  #[test]
  fn skipped_install_adds_the_install_line() {
    let lines = next_steps(&config(Template::React, PackageManager::Npm, false), false);
    assert_eq!(lines, vec!["cd my-app", "npm install", "npm run dev"]);
  }

  #[test]
  fn run_keyword_is_npm_only() {
    for pm in [PackageManager::Yarn, PackageManager::Pnpm, PackageManager::Bun] {
      let lines = next_steps(&config(Template::React, pm, true), true);
      assert_eq!(lines[1], format!("{} dev", pm));
    }
  }

  #[test]
  fn mobile_template_gets_a_two_line_start_sequence() {
    let lines = next_steps(&config(Template::ReactNative, PackageManager::Yarn, true), true);
    assert_eq!(lines, vec!["cd my-app", "yarn start", "yarn run android  (or ios)"]);
  }

  #[test]
  fn lines_are_deterministic() {
    let cfg = config(Template::React, PackageManager::Pnpm, false);
    assert_eq!(next_steps(&cfg, false), next_steps(&cfg, false));
  }
}
