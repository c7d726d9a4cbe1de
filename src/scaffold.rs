use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::config::ResolvedConfig;
use crate::error::BuildError;

/// Template files shipped under a neutral name and renamed into their
/// dot-file form after copy.
const RENAME_MAP: [(&str, &str); 1] = [("_gitignore", ".gitignore")];

const MANIFEST_FILE: &str = "package.json";

/// Outcome of a materialization attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
  /// The destination directory was created and populated.
  Created { path: PathBuf },
  /// The chosen template is a placeholder; nothing was written.
  ComingSoon,
}

/// Creates `<cwd>/<projectName>` from the matching template source tree and
/// applies the post-copy transforms (dot-file renames, manifest name patch).
///
/// The destination-exists check runs before anything else, so a failed
/// attempt leaves prior filesystem state untouched. A failure mid-copy may
/// leave a partially populated destination behind; no rollback is attempted.
pub fn materialize(
  config: &ResolvedConfig,
  cwd: &Path,
  templates_dir: &Path,
) -> Result<Outcome, BuildError> {
  let destination = cwd.join(&config.project_name);

  if destination.exists() {
    return Err(BuildError::DestinationExists { path: destination });
  }

  if !config.template.is_supported() {
    debug!("Template '{}' has no bundled source tree.", config.template);
    return Ok(Outcome::ComingSoon);
  }

  let template_path = templates_dir.join(config.template.as_str());
  if !template_path.is_dir() {
    return Err(BuildError::TemplateSourceMissing { path: template_path });
  }

  let spinner = ProgressBar::new_spinner();
  spinner.set_style(
    ProgressStyle::default_spinner()
      .template("{spinner:.green} {msg}")
      .expect("Failed to set spinner style"),
  );
  spinner.set_message(format!(
    "Creating {} project in {}...",
    config.template,
    destination.display()
  ));
  spinner.enable_steady_tick(Duration::from_millis(80));

  let result = populate(&template_path, &destination, &config.project_name);
  match &result {
    Ok(()) => spinner.finish_with_message("Project scaffolded successfully!"),
    Err(_) => spinner.abandon(),
  }

  result.map(|()| Outcome::Created { path: destination })
}

fn populate(
  template_path: &Path,
  destination: &Path,
  project_name: &str,
) -> Result<(), BuildError> {
  fs::create_dir_all(destination)?;
  copy_template_dir(template_path, destination)?;
  rename_template_files(destination)?;
  patch_manifest(destination, project_name)?;
  Ok(())
}

/// Recursively copies every file and subdirectory, preserving relative
/// paths and file contents byte-for-byte.
fn copy_template_dir(template_path: &Path, output_path: &Path) -> Result<(), BuildError> {
  debug!(
    "Copying template from {} to {}",
    template_path.display(),
    output_path.display()
  );

  for entry_result in WalkDir::new(template_path) {
    let entry = entry_result.map_err(|walk_err| BuildError::WalkDir {
      path: template_path.to_path_buf(),
      source: walk_err,
    })?;

    let current_path = entry.path();

    // Skip the root template directory itself
    if current_path == template_path {
      continue;
    }

    let relative_path = match current_path.strip_prefix(template_path) {
      Ok(p) => p,
      Err(_) => continue,
    };
    let output_entry_path = output_path.join(relative_path);

    if entry.file_type().is_dir() {
      trace!("Creating directory: {}", output_entry_path.display());
      fs::create_dir_all(&output_entry_path)?;
    } else if entry.file_type().is_file() {
      if let Some(parent) = output_entry_path.parent() {
        if !parent.exists() {
          fs::create_dir_all(parent)?;
        }
      }
      trace!("Copying file to: {}", output_entry_path.display());
      fs::copy(current_path, &output_entry_path)?;
    } else {
      debug!(
        "Skipping non-file/non-directory entry: {}",
        current_path.display()
      );
    }
  }

  Ok(())
}

/// Applies the fixed rename table. Absence of a source name is not an error.
fn rename_template_files(project_path: &Path) -> Result<(), BuildError> {
  for (from, to) in RENAME_MAP {
    let from_path = project_path.join(from);
    if from_path.exists() {
      trace!("Renaming {} -> {}", from, to);
      fs::rename(from_path, project_path.join(to))?;
    }
  }
  Ok(())
}

/// Sets the manifest's `name` field to the project name, rewriting with
/// stable 2-space indentation and preserving every other field. A missing
/// manifest is skipped; a manifest that fails to parse is fatal.
fn patch_manifest(project_path: &Path, project_name: &str) -> Result<(), BuildError> {
  let manifest_path = project_path.join(MANIFEST_FILE);
  if !manifest_path.is_file() {
    debug!("No {} at destination root, skipping manifest patch.", MANIFEST_FILE);
    return Ok(());
  }

  let content = fs::read_to_string(&manifest_path)?;
  let mut manifest: serde_json::Value =
    serde_json::from_str(&content).map_err(|e| BuildError::ManifestPatch {
      manifest_path: manifest_path.clone(),
      source: e,
    })?;

  let Some(object) = manifest.as_object_mut() else {
    return Err(BuildError::ManifestNotObject { manifest_path });
  };
  object.insert(
    "name".to_string(),
    serde_json::Value::String(project_name.to_string()),
  );

  let mut serialized =
    serde_json::to_string_pretty(&manifest).map_err(|e| BuildError::ManifestPatch {
      manifest_path: manifest_path.clone(),
      source: e,
    })?;
  serialized.push('\n');
  fs::write(&manifest_path, serialized)?;

  debug!("Patched manifest name to '{}'", project_name);
  Ok(())
}
