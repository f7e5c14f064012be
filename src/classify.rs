//! Sorts raw input files into semantic categories by file extension.

use log::warn;

use crate::models::{ClassifiedFiles, FileCategory, InputFile};

/// Group input files by category.
///
/// Unsupported files are dropped from bundling but never abort it: their
/// names are recorded in [`ClassifiedFiles::skipped`] and a warning is
/// logged. Input order is preserved within each category.
pub fn classify_files(files: impl IntoIterator<Item = InputFile>) -> ClassifiedFiles {
  let mut classified = ClassifiedFiles::default();

  for file in files {
    match FileCategory::from_file_name(file.name()) {
      FileCategory::Markup => classified.markup.push(file),
      FileCategory::Stylesheet => classified.stylesheets.push(file),
      FileCategory::Script => classified.scripts.push(file),
      FileCategory::Image => classified.images.push(file),
      FileCategory::Video => classified.videos.push(file),
      FileCategory::Unsupported => {
        warn!("unsupported file type: {}", file.name());
        classified.skipped.push(file.name().to_string());
      }
    }
  }

  classified
}

#[cfg(test)]
mod tests {
  use super::*;

  fn named(names: &[&str]) -> Vec<InputFile> {
    names
      .iter()
      .map(|name| InputFile::from_bytes(*name, Vec::new()))
      .collect()
  }

  #[test]
  fn every_supported_extension_maps_to_its_category() {
    let cases = [
      ("markup", vec!["a.html", "b.htm"]),
      ("stylesheet", vec!["a.css"]),
      ("script", vec!["a.js", "b.jsx", "c.ts", "d.tsx"]),
      (
        "image",
        vec!["a.jpg", "b.jpeg", "c.png", "d.gif", "e.svg", "f.webp", "g.bmp", "h.ico"],
      ),
      ("video", vec!["a.mp4", "b.webm"]),
    ];

    for (category, names) in cases {
      let classified = classify_files(named(&names));
      assert!(classified.skipped.is_empty(), "{category} produced skips");
      let count = match category {
        "markup" => classified.markup.len(),
        "stylesheet" => classified.stylesheets.len(),
        "script" => classified.scripts.len(),
        "image" => classified.images.len(),
        "video" => classified.videos.len(),
        _ => unreachable!(),
      };
      assert_eq!(count, names.len(), "{category} bucket incomplete");
      assert_eq!(classified.supported_count(), names.len());
    }
  }

  #[test]
  fn extension_lookup_is_case_insensitive() {
    let classified = classify_files(named(&["INDEX.HTML", "Logo.Png"]));
    assert_eq!(classified.markup.len(), 1);
    assert_eq!(classified.images.len(), 1);
  }

  #[test]
  fn unknown_types_are_skipped_with_a_diagnostic() {
    let classified = classify_files(named(&["notes.txt", "archive.tar.gz", "README"]));
    assert_eq!(classified.supported_count(), 0);
    assert_eq!(classified.skipped, vec!["notes.txt", "archive.tar.gz", "README"]);
  }

  #[test]
  fn input_order_is_preserved_within_a_category() {
    let classified = classify_files(named(&["z.css", "a.css", "m.css"]));
    let names: Vec<&str> = classified.stylesheets.iter().map(InputFile::name).collect();
    assert_eq!(names, vec!["z.css", "a.css", "m.css"]);
  }
}
