// src/config.rs
use std::fmt;

/// Templates the builder knows about. Only `React` ships a bundled source
/// tree; the rest are placeholders that exit early with a "coming soon"
/// notice instead of materializing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
  React,
  ReactNative,
  Next,
  Nest,
  Node,
}

impl Template {
  /// Fixed choice order used by the template select prompt.
  pub const ALL: [Template; 5] = [
    Template::React,
    Template::ReactNative,
    Template::Next,
    Template::Nest,
    Template::Node,
  ];

  /// Lenient parse of a CLI-supplied value. Unknown strings map to `None`
  /// so the field falls through to the interactive prompt instead of
  /// aborting the run.
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "react" => Some(Template::React),
      "react-native" => Some(Template::ReactNative),
      "next" => Some(Template::Next),
      "nest" => Some(Template::Nest),
      "node" => Some(Template::Node),
      _ => None,
    }
  }

  /// Value as typed on the command line; doubles as the template source
  /// directory name under the templates root.
  pub fn as_str(&self) -> &'static str {
    match self {
      Template::React => "react",
      Template::ReactNative => "react-native",
      Template::Next => "next",
      Template::Nest => "nest",
      Template::Node => "node",
    }
  }

  /// Label shown in the template select prompt.
  pub fn label(&self) -> &'static str {
    match self {
      Template::React => "React (Vite + TypeScript)",
      Template::ReactNative => "React Native (Coming Soon)",
      Template::Next => "Next.js (Coming Soon)",
      Template::Nest => "NestJS (Coming Soon)",
      Template::Node => "Node.js (Coming Soon)",
    }
  }

  /// Whether a bundled source tree exists for this template.
  pub fn is_supported(&self) -> bool {
    matches!(self, Template::React)
  }
}

impl fmt::Display for Template {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
  Npm,
  Yarn,
  Pnpm,
  Bun,
}

impl PackageManager {
  /// Fixed choice order used by the package manager select prompt; npm
  /// first so it is also the default.
  pub const ALL: [PackageManager; 4] = [
    PackageManager::Npm,
    PackageManager::Yarn,
    PackageManager::Pnpm,
    PackageManager::Bun,
  ];

  /// Lenient parse of a CLI-supplied value, same contract as
  /// [`Template::parse`].
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "npm" => Some(PackageManager::Npm),
      "yarn" => Some(PackageManager::Yarn),
      "pnpm" => Some(PackageManager::Pnpm),
      "bun" => Some(PackageManager::Bun),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm",
      PackageManager::Yarn => "yarn",
      PackageManager::Pnpm => "pnpm",
      PackageManager::Bun => "bun",
    }
  }

  /// Whether this manager's CLI needs the `run` keyword before script names.
  pub fn needs_run_keyword(&self) -> bool {
    matches!(self, PackageManager::Npm)
  }
}

impl fmt::Display for PackageManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The fully merged, validated set of user choices driving the pipeline.
/// Constructed once by the input resolver and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
  pub project_name: String,
  pub template: Template,
  pub package_manager: PackageManager,
  pub should_install: bool,
}
