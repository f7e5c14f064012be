#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bundle;
pub mod classify;
pub mod export;
pub mod loader;
pub mod models;
pub mod rewrite;

pub use bundle::component::{DEFAULT_COMPONENT_NAME, generate_web_component};
pub use bundle::document::generate_standalone_html;
pub use classify::classify_files;
pub use export::export_artifact;
pub use models::{BundleOutput, BundleSummary, ClassifiedFiles, InputFile, OutputKind};
