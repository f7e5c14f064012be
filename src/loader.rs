//! Materialises input file contents as text or self-describing data URIs.

use std::collections::BTreeMap;
use std::thread;

use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose};

use crate::models::InputFile;
use crate::rewrite::bare_file_name;

/// Read a file as UTF-8 text, replacing invalid sequences.
pub fn load_text(file: &InputFile) -> Result<String> {
  let bytes = file.read_bytes()?;
  Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encode a file as a `data:<mime>;base64,<payload>` string.
///
/// The result can be substituted directly into a `url(...)` or `src="..."`
/// context without further decoding.
pub fn load_data_uri(file: &InputFile) -> Result<String> {
  let bytes = file.read_bytes()?;
  let mime = mime_for_file_name(file.name());
  Ok(format!(
    "data:{};base64,{}",
    mime,
    general_purpose::STANDARD.encode(bytes)
  ))
}

/// Load a batch of files as text, preserving input order.
pub fn load_texts(files: &[InputFile]) -> Result<Vec<String>> {
  let refs: Vec<&InputFile> = files.iter().collect();
  load_all(&refs, load_text)
}

/// Build the asset lookup table from image and video inputs.
///
/// Keys are bare file names; entries are data URIs. Images are inserted
/// before videos, each in input order, so a duplicated bare name resolves
/// to the later file (last-write-wins).
pub fn build_asset_map(
  images: &[InputFile],
  videos: &[InputFile],
) -> Result<BTreeMap<String, String>> {
  let assets: Vec<&InputFile> = images.iter().chain(videos.iter()).collect();
  let encoded = load_all(&assets, load_data_uri)?;

  let mut map = BTreeMap::new();
  for (file, data) in assets.into_iter().zip(encoded) {
    map.insert(bare_file_name(file.name()).to_string(), data);
  }
  Ok(map)
}

/// Run one loader per file on scoped threads, collecting results in order.
fn load_all<T, F>(files: &[&InputFile], loader: F) -> Result<Vec<T>>
where
  T: Send,
  F: Fn(&InputFile) -> Result<T> + Sync,
{
  thread::scope(|scope| {
    let loader = &loader;
    let handles: Vec<_> = files
      .iter()
      .map(|&file| scope.spawn(move || loader(file)))
      .collect();

    handles
      .into_iter()
      .map(|handle| {
        handle
          .join()
          .map_err(|_| anyhow!("file load worker panicked"))?
      })
      .collect()
  })
}

fn mime_for_file_name(name: &str) -> &'static str {
  let extension = name.rsplit('.').next().unwrap_or(name).to_ascii_lowercase();
  match extension.as_str() {
    "jpg" | "jpeg" => "image/jpeg",
    "png" => "image/png",
    "gif" => "image/gif",
    "svg" => "image/svg+xml",
    "webp" => "image/webp",
    "bmp" => "image/bmp",
    "ico" => "image/x-icon",
    "mp4" => "video/mp4",
    "webm" => "video/webm",
    _ => "application/octet-stream",
  }
}
