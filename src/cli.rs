// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "create-leeais", // Command name users type
    author,
    version,
    about = "Scaffolds a new Leeais starter project from a bundled template.",
    long_about = None
)]
pub struct Cli {
  /// Name of the project (also the destination directory)
  pub project_name: Option<String>,

  /// Template to use (react, react-native, next, nest, node)
  #[arg(short, long)]
  pub template: Option<String>,

  /// Install dependencies immediately
  #[arg(long, overrides_with = "no_install")]
  pub install: bool,

  /// Skip dependency installation
  #[arg(long, overrides_with = "install")]
  pub no_install: bool,

  /// Package manager to use (npm, yarn, pnpm, bun)
  #[arg(long)]
  pub pm: Option<String>,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  #[arg(long)] // Configures the --templates-dir command-line flag
  #[clap(env = "CREATE_LEEAIS_TEMPLATES_DIR")] // Configures the environment variable fallback
  pub templates_dir: Option<PathBuf>,
}

impl Cli {
  /// Tri-state install decision: `--install` yields `Some(true)`,
  /// `--no-install` yields `Some(false)`, neither yields `None` (prompt).
  pub fn install_flag(&self) -> Option<bool> {
    if self.install {
      Some(true)
    } else if self.no_install {
      Some(false)
    } else {
      None
    }
  }
}
