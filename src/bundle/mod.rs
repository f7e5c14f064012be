//! Output generation for standalone documents and Web Component modules.

pub mod component;
pub mod document;

use anyhow::Result;

use crate::loader::{build_asset_map, load_texts};
use crate::models::ClassifiedFiles;
use crate::rewrite::{rewrite_css_urls, rewrite_html_src};

/// Loaded and reference-rewritten content shared by both output kinds.
pub(crate) struct PreparedContent {
  /// Rewritten markup texts, one per input file, in input order.
  pub markup: Vec<String>,
  /// All stylesheets rewritten and joined with blank lines.
  pub stylesheet: String,
  /// Script texts, unwrapped, in input order.
  pub scripts: Vec<String>,
}

/// Load every category and rewrite asset references.
///
/// All loads complete before rewriting starts; a single failed read aborts
/// the run rather than producing a partial bundle.
pub(crate) fn prepare_content(files: &ClassifiedFiles) -> Result<PreparedContent> {
  let markup_texts = load_texts(&files.markup)?;
  let stylesheet_texts = load_texts(&files.stylesheets)?;
  let script_texts = load_texts(&files.scripts)?;
  let assets = build_asset_map(&files.images, &files.videos)?;

  let stylesheet = stylesheet_texts
    .iter()
    .map(|css| rewrite_css_urls(css, &assets))
    .collect::<Vec<_>>()
    .join("\n\n");
  let markup = markup_texts
    .iter()
    .map(|html| rewrite_html_src(html, &assets))
    .collect();

  Ok(PreparedContent {
    markup,
    stylesheet,
    scripts: script_texts,
  })
}

/// Resolve the artifact file name.
///
/// A non-blank caller-supplied name is used verbatim, gaining `extension`
/// only when it is not already the suffix; otherwise the default stem plus
/// extension is used.
pub(crate) fn resolve_output_filename(
  custom_name: Option<&str>,
  default_stem: &str,
  extension: &str,
) -> String {
  let stem = custom_name
    .filter(|name| !name.trim().is_empty())
    .unwrap_or(default_stem);

  if stem.ends_with(extension) {
    stem.to_string()
  } else {
    format!("{stem}{extension}")
  }
}
