//! Fenced `mermaid` block extraction
//!
//! Scans markdown text for code fences tagged `mermaid` (any case) and yields
//! their trimmed contents in document order. Trailing parameters on the
//! opening fence line are allowed, and a block ends at the first closing
//! fence that starts a line, so adjacent blocks are never merged.

use regex::{CaptureMatches, Regex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::core::{DiagramBlock, PreviewError, Result};

static MERMAID_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```mermaid[^\n]*\n(?:(.*?)\n)??```").unwrap());

/// Lazy iterator over the trimmed contents of `mermaid` blocks
pub struct Blocks<'t> {
    captures: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Blocks<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.captures
            .next()
            .map(|caps| caps.get(1).map_or("", |body| body.as_str().trim()))
    }
}

/// Iterate over the `mermaid` blocks of `text` without allocating
///
/// Each call starts a fresh scan; no state is kept between calls.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        captures: MERMAID_FENCE.captures_iter(text),
    }
}

/// Collect every `mermaid` block of `text` with its 1-based ordinal
pub fn extract_blocks(text: &str) -> Vec<DiagramBlock> {
    let extracted: Vec<DiagramBlock> = blocks(text)
        .enumerate()
        .map(|(index, content)| {
            trace!(ordinal = index + 1, len = content.len(), "Extracted block");
            DiagramBlock::new(content, index + 1)
        })
        .collect();

    debug!(
        input_len = text.len(),
        count = extracted.len(),
        "Extracted mermaid blocks"
    );
    extracted
}

/// Read a markdown file, replacing invalid UTF-8 rather than failing
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| PreviewError::read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
