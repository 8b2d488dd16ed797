//! Argument resolution and default-file discovery
//!
//! Maps the handful of supported invocation shapes onto a [`Resolution`]:
//!
//! | `--file` | first positional | second positional | result                          |
//! |----------|------------------|-------------------|---------------------------------|
//! | -        | -                | -                 | batch over the install dir      |
//! | -        | -                | `n`               | default file, diagram `n`       |
//! | `f`      | -                | `n` or -          | `f`, diagram `n` (or 1)         |
//! | `f`      | integer `k`      | `n` or -          | `f`, diagram `n` (or `k`)       |
//! | `f`      | path             | any               | error: two files named          |
//! | -        | integer `k`      | any               | default file, diagram `k`       |
//! | -        | path `p`         | `n` or -          | `p`, diagram `n` (or 1)         |
//!
//! Discovery only ever looks at the working directory and the install
//! directory carried by [`SearchRoots`]; it never consults process state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::core::{PreviewError, Resolution, ResolvedTarget, Result, SearchRoots};

/// File name preferred by default-file discovery
pub const PREFERRED_FILE: &str = "frontend.md";

/// Raw command-line inputs relevant to choosing what to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// First positional: a markdown path or a bare diagram number
    pub target: Option<String>,
    /// Second positional: a diagram number
    pub diagram_number: Option<usize>,
    /// Explicit `--file`
    pub file: Option<PathBuf>,
}

/// Interpretation of the first positional argument
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ordinal(usize),
    Path(PathBuf),
}

impl Token {
    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            // Too many digits for usize is still a (hopeless) ordinal request.
            Token::Ordinal(trimmed.parse().unwrap_or(usize::MAX))
        } else {
            Token::Path(PathBuf::from(raw))
        }
    }
}

/// Decide what a run should render
///
/// Only consults the filesystem when a default file has to be discovered.
pub fn resolve(invocation: &Invocation, roots: &SearchRoots) -> Result<Resolution> {
    let token = invocation.target.as_deref().map(Token::parse);
    trace!(?invocation, ?token, "Resolving invocation");

    let resolution = match (&invocation.file, token, invocation.diagram_number) {
        (None, None, None) => Resolution::Batch {
            directory: roots.install_dir.clone(),
        },
        (None, None, Some(n)) => single(discover_default_file(roots)?, n),
        (Some(file), None, n) => single(file.clone(), n.unwrap_or(1)),
        (Some(file), Some(Token::Ordinal(k)), n) => single(file.clone(), n.unwrap_or(k)),
        (Some(_), Some(Token::Path(path)), _) => {
            return Err(PreviewError::UnexpectedArgument {
                argument: path.display().to_string(),
            })
        }
        (None, Some(Token::Ordinal(k)), n) => {
            if let Some(ignored) = n {
                warn!(
                    ordinal = k,
                    ignored, "Diagram number given twice; using the first"
                );
            }
            single(discover_default_file(roots)?, k)
        }
        (None, Some(Token::Path(path)), n) => single(path, n.unwrap_or(1)),
    };

    debug!(?resolution, "Resolved invocation");
    Ok(resolution)
}

fn single(path: PathBuf, ordinal: usize) -> Resolution {
    Resolution::Single(ResolvedTarget::new(path, ordinal))
}

/// Pick the markdown file to use when none was named
///
/// Precedence: `frontend.md` in the working directory, then in the install
/// directory; then the only markdown file of the working directory, then
/// the only one of the install directory.
pub fn discover_default_file(roots: &SearchRoots) -> Result<PathBuf> {
    for dir in roots.ordered() {
        let candidate = dir.join(PREFERRED_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "Using preferred default file");
            return Ok(candidate);
        }
    }

    for dir in roots.ordered() {
        let found = list_markdown_files(dir).unwrap_or_else(|e| {
            debug!(dir = %dir.display(), error = %e, "Search directory unreadable");
            Vec::new()
        });
        trace!(dir = %dir.display(), count = found.len(), "Markdown candidates");

        if let [only] = found.as_slice() {
            debug!(path = %only.display(), "Using only markdown file in directory");
            return Ok(only.clone());
        }
    }

    Err(PreviewError::NoDefaultFile)
}

/// Markdown files directly inside `dir`, sorted by path
pub fn list_markdown_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
