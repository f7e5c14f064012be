//! Writes generated bundle artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::BundleOutput;

/// Write the artifact into `out_dir`, returning the path of the written file.
///
/// The directory is created when missing. The artifact's own suggested
/// `filename` decides the file name.
pub fn export_artifact(output: &BundleOutput, out_dir: &Path) -> Result<PathBuf> {
  fs::create_dir_all(out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;

  let target = out_dir.join(&output.filename);
  fs::write(&target, &output.content)
    .with_context(|| format!("failed to write {}", target.display()))?;

  Ok(target)
}
