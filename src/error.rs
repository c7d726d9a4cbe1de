// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Directory \"{}\" already exists!", .path.display())]
  DestinationExists { path: PathBuf },

  #[error("Template source not found at: {}", .path.display())]
  TemplateSourceMissing { path: PathBuf },

  #[error("Could not patch manifest '{}': {}", .manifest_path.display(), .source)]
  ManifestPatch {
    manifest_path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Manifest '{}' is not a JSON object", .manifest_path.display())]
  ManifestNotObject { manifest_path: PathBuf },

  #[error("Error walking template directory '{}': {}", .path.display(), .source)]
  WalkDir {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("User interaction failed: {0}")]
  Dialoguer(#[from] dialoguer::Error),

  #[error("Could not determine templates directory")]
  CannotDetermineTemplatesDir,
}
