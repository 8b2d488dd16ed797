//! Core building blocks for preview generation
//!
//! Extraction, page templating and argument resolution are independent,
//! side-effect-light pieces; the [`crate::pipeline`] module strings them together.

mod error;
pub mod extract;
mod launcher;
pub mod logging;
pub mod page;
pub mod resolve;
mod types;

pub use error::*;
pub use extract::{blocks, extract_blocks, read_document, Blocks};
pub use launcher::{Launcher, SystemBrowser};
#[cfg(test)]
pub(crate) use launcher::RecordingLauncher;
pub use page::{escape_html, render_page, write_page};
pub use resolve::{discover_default_file, list_markdown_files, resolve, Invocation};
pub use types::*;
