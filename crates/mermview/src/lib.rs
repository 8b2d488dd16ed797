//! mermview - Preview Mermaid.js diagrams embedded in markdown
//!
//! Extracts fenced `mermaid` blocks from markdown documents and wraps each in
//! a standalone HTML page that renders it with Mermaid and offers pan/zoom.
//!
//! # Quick Start
//!
//! ```rust
//! use mermview::{extract_blocks, render_page, RenderOptions};
//!
//! let markdown = "# Flow\n\n```mermaid\ngraph LR; A-->B\n```\n";
//! let blocks = extract_blocks(markdown);
//! assert_eq!(blocks.len(), 1);
//!
//! let html = render_page(&blocks[0].content, "flow.md – diagram 1/1", &RenderOptions::default());
//! assert!(html.contains("graph LR; A--&gt;B"));
//! ```
//!
//! # Resolving Invocations
//!
//! ```rust,no_run
//! use mermview::prelude::*;
//!
//! let roots = SearchRoots::new(".", "/opt/mermview");
//! let invocation = Invocation {
//!     target: Some("2".to_string()),
//!     ..Invocation::default()
//! };
//! let resolution = resolve(&invocation, &roots)?;
//! let report = Previewer::new(RenderOptions::default()).run(&resolution)?;
//! println!("{report}");
//! # Ok::<(), PreviewError>(())
//! ```

pub mod core;
pub mod pipeline;

pub use crate::core::*;
pub use crate::pipeline::Previewer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        extract_blocks, render_page, resolve, write_page, BlockSelection, DiagramBlock,
        Invocation, Launcher, PreviewError, RenderOptions, Report, Resolution, ResolvedTarget,
        SearchRoots, Theme,
    };
    pub use crate::pipeline::Previewer;
}
