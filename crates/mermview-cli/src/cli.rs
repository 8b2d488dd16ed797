//! Command-line interface for the mermview utility
//!
//! Turns the positional/flag soup into an [`Invocation`], resolves it against
//! the working and install directories, and runs the preview pipeline.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

use mermview::core::logging::init_logging;
use mermview::prelude::*;
use mermview::SystemBrowser;

/// Environment variable overriding the install directory
pub const HOME_ENV: &str = "MERMVIEW_HOME";

const AFTER_HELP: &str = "\
With no arguments, every diagram of every .md file in the install directory
is generated, saved as <FileName>_<DiagramNumber>.html.

Examples:
  mermview                          # batch mode over the install directory
  mermview <diagram_number>         # open Nth diagram from the default .md
  mermview <markdown_file> [diagram_number]
  mermview -f <markdown_file> <diagram_number>";

/// mermview - Preview Mermaid.js diagrams from markdown files
#[derive(Parser, Debug)]
#[command(name = "mermview")]
#[command(about = "Generate pan/zoom HTML previews for Mermaid diagrams in markdown")]
#[command(after_help = AFTER_HELP)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Markdown file path OR a diagram number (1-based)
    pub target: Option<String>,

    /// Diagram number to open (1-based)
    pub diagram_number: Option<usize>,

    /// Markdown file path (if the first argument is a number)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Mermaid theme: default | dark | forest | neutral | base
    #[arg(long, default_value = "default")]
    pub theme: String,

    /// Base font size in px for diagram text
    #[arg(long, default_value_t = 20)]
    pub font_size: u32,

    /// Line height in px for diagram text
    #[arg(long, default_value_t = 24)]
    pub line_height: u32,

    /// Initial zoom scale
    #[arg(long, default_value_t = 1.2, value_parser = parse_zoom)]
    pub initial_zoom: f64,

    /// Open in browser (on by default)
    #[arg(long, overrides_with = "no_open")]
    pub open: bool,

    /// Do not open in browser
    #[arg(long, overrides_with = "open")]
    pub no_open: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Inputs used to decide what to render
    pub fn invocation(&self) -> Invocation {
        Invocation {
            target: self.target.clone(),
            diagram_number: self.diagram_number,
            file: self.file.clone(),
        }
    }

    /// Presentation options for every page of the run
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            theme: self.theme.clone(),
            font_size: self.font_size,
            line_height: self.line_height,
            initial_zoom: self.initial_zoom,
            open: !self.no_open,
        }
    }
}

/// Zoom factors end up in the viewer script, so only finite numbers pass
fn parse_zoom(value: &str) -> std::result::Result<f64, String> {
    let zoom: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if zoom.is_finite() {
        Ok(zoom)
    } else {
        Err(format!("'{}' is not a finite zoom factor", value))
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Install the global subscriber (environment variables take precedence)
pub fn setup_logging(cli: &Cli) {
    let log_level = std::env::var("MERMVIEW_LOG_LEVEL")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| cli.log_level.as_str().to_string());

    let log_format = std::env::var("MERMVIEW_LOG_FORMAT")
        .ok()
        .unwrap_or_else(|| cli.log_format.as_str().to_string());

    if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}

/// Main CLI application
pub struct PreviewApp {
    roots: SearchRoots,
}

impl PreviewApp {
    /// Create an application searching the given directories
    pub fn new(roots: SearchRoots) -> Self {
        Self { roots }
    }

    /// Create an application for the current process
    ///
    /// The install directory is `MERMVIEW_HOME` when set, otherwise the
    /// directory containing the running executable.
    pub fn from_env() -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("Failed to determine the working directory")?;
        let install_dir = match std::env::var_os(HOME_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let exe = std::env::current_exe()
                    .context("Failed to locate the mermview executable")?;
                exe.parent()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| working_dir.clone())
            }
        };
        Ok(Self::new(SearchRoots::new(working_dir, install_dir)))
    }

    /// Run the application, opening pages in the default browser
    pub fn run(&self, cli: &Cli) -> Result<Report> {
        self.run_with(cli, SystemBrowser)
    }

    /// Run the application with a custom launcher
    pub fn run_with<L: Launcher>(&self, cli: &Cli, launcher: L) -> Result<Report> {
        if cli.verbose {
            eprintln!("mermview v{}", env!("CARGO_PKG_VERSION"));
        }

        debug!(roots = ?self.roots, "Resolving invocation");
        let resolution = resolve(&cli.invocation(), &self.roots)?;
        if cli.verbose {
            match &resolution {
                Resolution::Batch { directory } => {
                    eprintln!("Batch mode over {}", directory.display())
                }
                Resolution::Single(target) => eprintln!(
                    "Rendering diagram {} of {}",
                    target.ordinal,
                    target.path.display()
                ),
            }
        }

        let previewer = Previewer::with_launcher(cli.render_options(), launcher);
        let report = previewer.run(&resolution)?;

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report);
        }
        Ok(report)
    }
}

/// Process exit status for a failed run
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<PreviewError>()
        .map_or(1, PreviewError::exit_code)
}
