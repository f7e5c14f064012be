//! Assembles one self-contained HTML document from classified inputs.

use anyhow::Result;

use super::{prepare_content, resolve_output_filename};
use crate::models::{BundleOutput, ClassifiedFiles};

const EMPTY_DOCUMENT: &str = "<!DOCTYPE html><html><head></head><body></body></html>";

/// Generate a standalone HTML document.
///
/// The first markup file becomes the document base (a minimal empty
/// document when none is supplied); combined stylesheets land in a
/// `<style>` block before the first `</head>` and each script is wrapped in
/// a strict-mode IIFE before the combined `<script>` block is inserted
/// ahead of the first `</body>`. Both insertion points fall back to the
/// document edges when the closing tag is absent.
pub fn generate_standalone_html(
  files: &ClassifiedFiles,
  custom_name: Option<&str>,
) -> Result<BundleOutput> {
  let prepared = prepare_content(files)?;

  let combined_scripts = prepared
    .scripts
    .iter()
    .map(|js| wrap_script_in_iife(js))
    .collect::<Vec<_>>()
    .join("\n\n");

  // Additional markup files are rewritten but only the first becomes the base.
  let mut document = prepared
    .markup
    .first()
    .map(String::as_str)
    .filter(|text| !text.is_empty())
    .unwrap_or(EMPTY_DOCUMENT)
    .to_string();

  if !prepared.stylesheet.is_empty() {
    let style_block = format!("<style>\n{}\n</style>", prepared.stylesheet);
    document = if document.contains("</head>") {
      document.replacen("</head>", &format!("{style_block}\n</head>"), 1)
    } else {
      format!("{style_block}\n{document}")
    };
  }

  if !combined_scripts.is_empty() {
    let script_block = format!("<script>\n{combined_scripts}\n</script>");
    document = if document.contains("</body>") {
      document.replacen("</body>", &format!("{script_block}\n</body>"), 1)
    } else {
      format!("{document}\n{script_block}")
    };
  }

  Ok(BundleOutput {
    content: document,
    filename: resolve_output_filename(custom_name, "bundle", ".html"),
  })
}

/// Wrap one script so its top-level declarations cannot collide with other
/// scripts or the host page.
fn wrap_script_in_iife(js: &str) -> String {
  format!("(function() {{\n  'use strict';\n  {js}\n}})();")
}
