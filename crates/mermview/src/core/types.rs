//! Core type definitions for preview generation
//!
//! This module contains the transient data model shared by the extractor,
//! the page generator and the orchestrator: extracted blocks, render options,
//! theme palettes, and the outcome of argument resolution.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Theme names rendered on a dark background
const DARK_THEMES: [&str; 4] = ["dark", "forest", "neutral", "dark2"];

/// A single fenced diagram block extracted from a markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    /// Block content with surrounding whitespace removed
    pub content: String,
    /// 1-based position within the source document
    pub ordinal: usize,
}

impl DiagramBlock {
    pub fn new(content: impl Into<String>, ordinal: usize) -> Self {
        Self {
            content: content.into(),
            ordinal,
        }
    }
}

/// Presentation options applied to every generated page in a run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Mermaid theme name, passed through to the viewer verbatim
    pub theme: String,
    /// Base font size in pixels for diagram text
    pub font_size: u32,
    /// Line height in pixels for diagram text
    pub line_height: u32,
    /// Zoom factor applied before the viewer auto-fits
    pub initial_zoom: f64,
    /// Open each generated page in the default browser
    pub open: bool,
}

impl RenderOptions {
    /// Palette derived from the theme name
    pub fn palette(&self) -> Palette {
        Theme::classify(&self.theme).palette()
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            font_size: 20,
            line_height: 24,
            initial_zoom: 1.2,
            open: true,
        }
    }
}

/// Light or dark page chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Classify a Mermaid theme name
    ///
    /// A fixed set of names (compared case-insensitively) renders dark;
    /// every other string, including the empty one, renders light.
    pub fn classify(name: &str) -> Self {
        if DARK_THEMES.iter().any(|dark| dark.eq_ignore_ascii_case(name)) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// CSS colours for this theme
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: "#0b0b0c",
                foreground: "#f2f2f2",
                border: "rgba(255,255,255,.12)",
                toolbar_background: "rgba(255,255,255,.06)",
            },
            Theme::Light => Palette {
                background: "#ffffff",
                foreground: "#111111",
                border: "rgba(0,0,0,.12)",
                toolbar_background: "rgba(0,0,0,.03)",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// CSS colours used by the viewer page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
    pub toolbar_background: &'static str,
}

/// A concrete markdown file and the diagram to render from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    /// 1-based ordinal, validated against the document only after extraction
    pub ordinal: usize,
}

impl ResolvedTarget {
    pub fn new(path: impl Into<PathBuf>, ordinal: usize) -> Self {
        Self {
            path: path.into(),
            ordinal,
        }
    }
}

/// Outcome of argument resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render every block of every markdown file in the directory
    Batch { directory: PathBuf },
    /// Render one block of one file
    Single(ResolvedTarget),
}

/// Which blocks of a document to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSelection {
    All,
    Ordinal(usize),
}

/// Directories searched when no markdown file is named explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    /// The process working directory
    pub working_dir: PathBuf,
    /// The directory the tool is installed in
    pub install_dir: PathBuf,
}

impl SearchRoots {
    pub fn new(working_dir: impl Into<PathBuf>, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            install_dir: install_dir.into(),
        }
    }

    /// Search order used by default-file discovery
    pub fn ordered(&self) -> [&Path; 2] {
        [self.working_dir.as_path(), self.install_dir.as_path()]
    }
}

/// One generated viewer page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub ordinal: usize,
    pub total: usize,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    Batch {
        directory: PathBuf,
        files_scanned: usize,
        pages: Vec<GeneratedPage>,
    },
    Single {
        page: GeneratedPage,
    },
}

impl Report {
    /// All pages written during the run
    pub fn pages(&self) -> &[GeneratedPage] {
        match self {
            Report::Batch { pages, .. } => pages,
            Report::Single { page } => std::slice::from_ref(page),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Batch {
                directory,
                files_scanned: 0,
                ..
            } => write!(f, "No .md files found in {}", directory.display()),
            Report::Batch {
                directory,
                files_scanned,
                pages,
            } => write!(
                f,
                "Generated {} preview file(s) across {} markdown file(s) in: {}",
                pages.len(),
                files_scanned,
                directory.display()
            ),
            Report::Single { page } => {
                write!(f, "Generated preview: {}", page.output.display())
            }
        }
    }
}
