//! Integration tests for tracing spans and events
//!
//! Runs the pipeline under a scoped test subscriber to make sure the
//! instrumentation does not interfere with results.

use mermview::prelude::*;
use std::fs;
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn test_pipeline_under_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("traced.md"),
        "```mermaid\ngraph LR; A-->B\n```\n",
    )
    .unwrap();

    let previewer = Previewer::new(RenderOptions {
        open: false,
        ..RenderOptions::default()
    });
    let report = previewer.render_batch(dir.path()).unwrap();

    assert_eq!(report.pages().len(), 1);
    assert!(dir.path().join("traced_1.html").exists());
}

#[test]
fn test_extraction_under_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let found = extract_blocks("```mermaid\na\n```\n```mermaid\nb\n```\n");
    assert_eq!(found.len(), 2);
    assert_eq!(found[1], DiagramBlock::new("b", 2));
}
