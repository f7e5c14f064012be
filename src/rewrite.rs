//! Rewrites asset references in stylesheet and markup text to inlined data.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

/// Replace `url(...)` references whose bare file name is in the asset map.
///
/// The `url` keyword is matched case-insensitively and the path may be
/// unquoted or wrapped in single or double quotes. References that do not
/// resolve are left byte-for-byte unchanged.
pub fn rewrite_css_urls(css: &str, assets: &BTreeMap<String, String>) -> String {
  let pattern = Regex::new(r#"(?i)url\(['"]?([^'"()]+)['"]?\)"#).expect("invalid url regex");

  pattern
    .replace_all(css, |caps: &Captures| {
      match assets.get(bare_file_name(&caps[1])) {
        Some(data) => format!("url('{data}')"),
        None => caps[0].to_string(),
      }
    })
    .into_owned()
}

/// Replace `src="..."` attribute values whose bare file name is in the
/// asset map.
///
/// Any tag carrying `src` is covered, including `<img>`, `<video>`,
/// `<source>` and `<script>`. Unresolved references are left unchanged.
pub fn rewrite_html_src(html: &str, assets: &BTreeMap<String, String>) -> String {
  let pattern = Regex::new(r#"(?i)src=['"]([^'"]+)['"]"#).expect("invalid src regex");

  pattern
    .replace_all(html, |caps: &Captures| {
      match assets.get(bare_file_name(&caps[1])) {
        Some(data) => format!("src=\"{data}\""),
        None => caps[0].to_string(),
      }
    })
    .into_owned()
}

/// Rightmost path segment of a reference, accepting `/` and `\` separators.
pub fn bare_file_name(path: &str) -> &str {
  let tail = path.rsplit('/').next().unwrap_or(path);
  tail.rsplit('\\').next().unwrap_or(tail)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assets(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
      .iter()
      .map(|(name, data)| (name.to_string(), data.to_string()))
      .collect()
  }

  #[test]
  fn strips_path_prefixes_down_to_the_file_name() {
    assert_eq!(bare_file_name("logo.png"), "logo.png");
    assert_eq!(bare_file_name("./img/logo.png"), "logo.png");
    assert_eq!(bare_file_name("../assets/logo.png"), "logo.png");
    assert_eq!(bare_file_name("C:\\assets\\logo.png"), "logo.png");
    assert_eq!(bare_file_name("/mixed/path\\logo.png"), "logo.png");
  }

  #[test]
  fn rewrites_quoted_and_unquoted_css_urls() {
    let table = assets(&[("bg.png", "data:image/png;base64,QQ==")]);

    for css in [
      "body{background:url(bg.png)}",
      "body{background:url('bg.png')}",
      "body{background:url(\"bg.png\")}",
      "body{background:URL(../img/bg.png)}",
    ] {
      let rewritten = rewrite_css_urls(css, &table);
      assert!(rewritten.contains("url('data:image/png;base64,QQ==')"), "{css}");
      assert!(!rewritten.contains("bg.png"), "{css}");
    }
  }

  #[test]
  fn unresolved_css_references_are_untouched() {
    let table = assets(&[("other.png", "data:image/png;base64,QQ==")]);
    let css = "body{background:url('missing.png');color:red}";
    assert_eq!(rewrite_css_urls(css, &table), css);
  }

  #[test]
  fn rewrites_src_attributes_in_markup() {
    let table = assets(&[("cat.jpg", "data:image/jpeg;base64,QQ==")]);

    let html = r#"<img src="img/cat.jpg"><video src='cat.jpg'></video>"#;
    let rewritten = rewrite_html_src(html, &table);
    assert_eq!(
      rewritten,
      r#"<img src="data:image/jpeg;base64,QQ=="><video src="data:image/jpeg;base64,QQ=="></video>"#
    );
  }

  #[test]
  fn href_attributes_and_unknown_sources_are_preserved() {
    let table = assets(&[("cat.jpg", "data:image/jpeg;base64,QQ==")]);
    let html = r#"<a href="cat.jpg">link</a><img src="dog.jpg">"#;
    assert_eq!(rewrite_html_src(html, &table), html);
  }

  #[test]
  fn rewriting_already_rewritten_text_is_a_no_op() {
    let table = assets(&[
      ("bg.png", "data:image/png;base64,QQ=="),
      ("cat.jpg", "data:image/jpeg;base64,QQ=="),
    ]);

    let css = rewrite_css_urls("div{background:url(bg.png)}", &table);
    assert_eq!(rewrite_css_urls(&css, &table), css);

    let html = rewrite_html_src(r#"<img src="cat.jpg">"#, &table);
    assert_eq!(rewrite_html_src(&html, &table), html);
  }

  #[test]
  fn text_outside_matches_is_never_altered() {
    let table = assets(&[("bg.png", "data:image/png;base64,QQ==")]);
    let css = "/* url stays in comments unless it parses */ .a{color:blue}";
    assert_eq!(rewrite_css_urls(css, &table), css);
  }
}
