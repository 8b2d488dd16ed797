//! Batch and single-file preview generation

pub mod orchestrator;

pub use orchestrator::Previewer;
