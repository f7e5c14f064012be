//! Data structures shared across the bundling pipeline.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

/// Semantic category assigned to an input file from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
  /// HTML documents (`html`, `htm`).
  Markup,
  /// CSS stylesheets (`css`).
  Stylesheet,
  /// JavaScript and TypeScript sources (`js`, `jsx`, `ts`, `tsx`).
  Script,
  /// Raster and vector images (`jpg`, `jpeg`, `png`, `gif`, `svg`, `webp`, `bmp`, `ico`).
  Image,
  /// Video files (`mp4`, `webm`).
  Video,
  /// Everything else; excluded from bundling.
  Unsupported,
}

impl FileCategory {
  /// Category for a lowercase file extension.
  pub fn from_extension(extension: &str) -> Self {
    match extension {
      "html" | "htm" => Self::Markup,
      "css" => Self::Stylesheet,
      "js" | "jsx" | "ts" | "tsx" => Self::Script,
      "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "bmp" | "ico" => Self::Image,
      "mp4" | "webm" => Self::Video,
      _ => Self::Unsupported,
    }
  }

  /// Category for a file name, using the text after the final `.`.
  ///
  /// The lookup is case-insensitive. A name without a dot has no extension
  /// and is unsupported.
  pub fn from_file_name(name: &str) -> Self {
    let extension = name.rsplit('.').next().unwrap_or(name);
    Self::from_extension(&extension.to_ascii_lowercase())
  }
}

/// A named byte blob supplied by the caller.
///
/// The bundler never mutates input files; reading their bytes is the only
/// operation that can fail, and only for path-backed files.
#[derive(Debug, Clone)]
pub struct InputFile {
  name: String,
  source: FileSource,
}

#[derive(Debug, Clone)]
enum FileSource {
  Memory(Vec<u8>),
  Disk(PathBuf),
}

impl InputFile {
  /// Create an input file from in-memory bytes.
  pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
    Self {
      name: name.into(),
      source: FileSource::Memory(bytes.into()),
    }
  }

  /// Create an input file backed by a filesystem path.
  ///
  /// The file name is the last path component; the bytes are read lazily
  /// when the bundler materialises content.
  pub fn from_path(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let name = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default();
    Self {
      name,
      source: FileSource::Disk(path),
    }
  }

  /// File name, which may include path separators for in-memory files.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Size in bytes, if known without reading the content.
  pub fn size(&self) -> Option<u64> {
    match &self.source {
      FileSource::Memory(bytes) => Some(bytes.len() as u64),
      FileSource::Disk(path) => fs::metadata(path).map(|meta| meta.len()).ok(),
    }
  }

  /// Raw bytes of the file.
  ///
  /// A failed read aborts the whole bundling run; an incomplete bundle
  /// would be worse than none.
  pub fn read_bytes(&self) -> Result<Vec<u8>> {
    match &self.source {
      FileSource::Memory(bytes) => Ok(bytes.clone()),
      FileSource::Disk(path) => {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
      }
    }
  }
}

/// Input files grouped by category, preserving input order within each.
#[derive(Debug, Default)]
pub struct ClassifiedFiles {
  /// HTML documents.
  pub markup: Vec<InputFile>,
  /// CSS stylesheets.
  pub stylesheets: Vec<InputFile>,
  /// Script sources.
  pub scripts: Vec<InputFile>,
  /// Image assets inlined as data URIs.
  pub images: Vec<InputFile>,
  /// Video assets inlined as data URIs.
  pub videos: Vec<InputFile>,
  /// Names of files dropped because their type is unsupported.
  pub skipped: Vec<String>,
}

impl ClassifiedFiles {
  /// Number of files that made it into a supported category.
  pub fn supported_count(&self) -> usize {
    self.markup.len()
      + self.stylesheets.len()
      + self.scripts.len()
      + self.images.len()
      + self.videos.len()
  }
}

/// Finished artifact produced by one bundling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOutput {
  /// Generated document or module text.
  pub content: String,
  /// Suggested file name, always carrying the extension for the output kind.
  pub filename: String,
}

/// The two artifact kinds the bundler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
  /// One self-contained HTML document.
  StandaloneDocument,
  /// One JavaScript module defining an isolated Web Component.
  IsolatedComponent,
}

impl OutputKind {
  /// File extension for artifacts of this kind, including the dot.
  pub fn extension(&self) -> &'static str {
    match self {
      Self::StandaloneDocument => ".html",
      Self::IsolatedComponent => ".js",
    }
  }
}

/// Metadata describing a completed bundle.
///
/// Callers that keep a record of generated bundles persist this summary
/// only; the bundle content itself is never stored by the core.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSummary {
  /// Artifact file name.
  pub name: String,
  /// Artifact kind.
  pub output_type: OutputKind,
  /// Number of supported input files that went into the bundle.
  pub file_count: usize,
  /// Creation time as seconds since the Unix epoch.
  pub created_at: u64,
}

impl BundleSummary {
  /// Build a summary for a finished bundle, stamped with the current time.
  pub fn new(output: &BundleOutput, output_type: OutputKind, file_count: usize) -> Self {
    let created_at = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|elapsed| elapsed.as_secs())
      .unwrap_or(0);
    Self {
      name: output.filename.clone(),
      output_type,
      file_count,
      created_at,
    }
  }
}
