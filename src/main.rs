//! Command line entry point for bundling web assets into a single artifact.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use stackpack::bundle::component::{DEFAULT_COMPONENT_NAME, generate_web_component};
use stackpack::bundle::document::generate_standalone_html;
use stackpack::classify::classify_files;
use stackpack::export::export_artifact;
use stackpack::models::{BundleSummary, InputFile, OutputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKindArg {
  /// One self-contained HTML document.
  Html,
  /// One JavaScript module defining an isolated Web Component.
  Component,
}

impl From<OutputKindArg> for OutputKind {
  fn from(kind: OutputKindArg) -> Self {
    match kind {
      OutputKindArg::Html => OutputKind::StandaloneDocument,
      OutputKindArg::Component => OutputKind::IsolatedComponent,
    }
  }
}

#[derive(Debug, Parser)]
#[command(name = "stackpack", version, about = "Bundle web assets into one file")]
struct Cli {
  /// Files to include in the bundle.
  #[arg(required = true)]
  files: Vec<PathBuf>,

  /// Kind of artifact to produce.
  #[arg(long, value_enum, default_value_t = OutputKindArg::Html)]
  kind: OutputKindArg,

  /// Output file name; the matching extension is appended when missing.
  #[arg(long)]
  name: Option<String>,

  /// Class name for the generated Web Component.
  #[arg(long, default_value = DEFAULT_COMPONENT_NAME)]
  component_name: String,

  /// Directory the artifact is written to.
  #[arg(long, default_value = ".")]
  out_dir: PathBuf,

  /// Print a JSON summary of the bundle instead of the written path.
  #[arg(long)]
  summary: bool,
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  let files: Vec<InputFile> = cli.files.iter().map(InputFile::from_path).collect();
  let classified = classify_files(files);
  let file_count = classified.supported_count();

  let kind = OutputKind::from(cli.kind);
  let output = match kind {
    OutputKind::StandaloneDocument => generate_standalone_html(&classified, cli.name.as_deref())?,
    OutputKind::IsolatedComponent => {
      generate_web_component(&classified, cli.name.as_deref(), &cli.component_name)?
    }
  };

  let path = export_artifact(&output, &cli.out_dir)?;
  if cli.summary {
    let summary = BundleSummary::new(&output, kind, file_count);
    println!("{}", serde_json::to_string_pretty(&summary)?);
  } else {
    println!("wrote {}", path.display());
  }

  Ok(())
}
