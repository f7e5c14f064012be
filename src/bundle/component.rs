//! Synthesises a self-registering Web Component from classified inputs.

use anyhow::Result;
use regex::Regex;

use super::{prepare_content, resolve_output_filename};
use crate::models::{BundleOutput, ClassifiedFiles};

/// Component class name used when the caller does not supply one.
pub const DEFAULT_COMPONENT_NAME: &str = "StackPackComponent";

/// Generate a JavaScript module defining an isolated Web Component.
///
/// All markup files are concatenated (body content extracted when present)
/// and rendered together with the combined stylesheet into an open shadow
/// root, so host page styles and selectors cannot leak in or out. The
/// combined scripts run once inside a strict-mode wrapper bound to the
/// component instance, with the shadow root exposed as the local
/// `shadowRoot` binding.
pub fn generate_web_component(
  files: &ClassifiedFiles,
  custom_name: Option<&str>,
  component_name: &str,
) -> Result<BundleOutput> {
  let prepared = prepare_content(files)?;

  let mut markup = prepared.markup.join("\n\n");
  let body_pattern = Regex::new(r"(?is)<body[^>]*>(.*)</body>").expect("invalid body regex");
  if let Some(caps) = body_pattern.captures(&markup) {
    markup = caps[1].to_string();
  }

  let combined_scripts = prepared.scripts.join("\n\n");
  let scripts_section = if combined_scripts.is_empty() {
    "// No scripts to initialize".to_string()
  } else {
    format!(
      "// Execute component scripts in isolated scope\n    \
       (function() {{\n      \
       'use strict';\n      \
       const shadowRoot = this.shadowRoot;\n      \
       {combined_scripts}\n    \
       }}).call(this);"
    )
  };

  let tag_name = component_tag_name(component_name);
  let content = format!(
    r#"class {component_name} extends HTMLElement {{
  constructor() {{
    super();
    this.attachShadow({{ mode: 'open' }});
  }}

  connectedCallback() {{
    this.render();
    this.initializeScripts();
  }}

  render() {{
    const template = document.createElement('template');
    template.innerHTML = `
      <style>
        {stylesheet}
      </style>
      {markup}
    `;

    this.shadowRoot.appendChild(template.content.cloneNode(true));
  }}

  initializeScripts() {{
    {scripts_section}
  }}
}}

// Register the custom element
customElements.define('{tag_name}', {component_name});
"#,
    stylesheet = prepared.stylesheet,
  );

  Ok(BundleOutput {
    content,
    filename: resolve_output_filename(custom_name, "component", ".js"),
  })
}

/// Derive the registration tag name from the component class name.
///
/// A hyphen is inserted at each lowercase-to-uppercase transition before
/// lowercasing, so `StackPackComponent` registers as `stack-pack-component`.
pub fn component_tag_name(component_name: &str) -> String {
  let mut tag = String::with_capacity(component_name.len() + 4);
  let mut previous_was_lowercase = false;

  for ch in component_name.chars() {
    if previous_was_lowercase && ch.is_uppercase() {
      tag.push('-');
    }
    previous_was_lowercase = ch.is_lowercase();
    tag.extend(ch.to_lowercase());
  }

  tag
}
