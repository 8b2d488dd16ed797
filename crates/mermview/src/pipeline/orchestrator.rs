//! Preview orchestrator
//!
//! The orchestrator drives the pipeline for a resolved invocation:
//! Resolution → read document → extract blocks → write pages → launch
//!
//! Batch and single mode share [`Previewer::render_file`]; they differ only
//! in which blocks are selected and how an empty document is treated.

use std::path::{Path, PathBuf};
use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{
    extract_blocks, list_markdown_files, read_document, write_page, BlockSelection, DiagramBlock,
    GeneratedPage, Launcher, PreviewError, RenderOptions, Report, Resolution, ResolvedTarget,
    Result, SystemBrowser,
};

/// Generates viewer pages for resolved invocations
pub struct Previewer<L: Launcher = SystemBrowser> {
    options: RenderOptions,
    launcher: L,
}

impl Previewer<SystemBrowser> {
    /// Create a previewer that opens pages in the default browser
    pub fn new(options: RenderOptions) -> Self {
        Self::with_launcher(options, SystemBrowser)
    }
}

impl<L: Launcher> Previewer<L> {
    /// Create a previewer with a custom launcher
    pub fn with_launcher(options: RenderOptions, launcher: L) -> Self {
        Self { options, launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Execute a resolution
    pub fn run(&self, resolution: &Resolution) -> Result<Report> {
        match resolution {
            Resolution::Batch { directory } => self.render_batch(directory),
            Resolution::Single(target) => self.render_single(target),
        }
    }

    /// Render every block of every markdown file in `directory`
    ///
    /// Files without blocks are skipped. A directory without markdown files
    /// yields an empty report rather than an error; a directory that cannot
    /// be listed is an error naming it.
    pub fn render_batch(&self, directory: &Path) -> Result<Report> {
        let batch_span = span!(Level::INFO, "render_batch", dir = %directory.display());
        let _enter = batch_span.enter();

        let files =
            list_markdown_files(directory).map_err(|e| PreviewError::read_dir(directory, e))?;
        debug!(count = files.len(), "Markdown files found");

        let mut pages = Vec::new();
        for file in &files {
            let generated = self.render_file(file, BlockSelection::All)?;
            if generated.is_empty() {
                trace!(file = %file.display(), "No mermaid blocks, skipping");
            }
            pages.extend(generated);
        }

        info!(
            pages = pages.len(),
            files = files.len(),
            "Batch generation completed"
        );
        Ok(Report::Batch {
            directory: directory.to_path_buf(),
            files_scanned: files.len(),
            pages,
        })
    }

    /// Render one block of one file
    pub fn render_single(&self, target: &ResolvedTarget) -> Result<Report> {
        let single_span = span!(
            Level::INFO,
            "render_single",
            file = %target.path.display(),
            ordinal = target.ordinal
        );
        let _enter = single_span.enter();

        if !target.path.exists() {
            return Err(PreviewError::file_not_found(&target.path));
        }

        let mut pages = self.render_file(&target.path, BlockSelection::Ordinal(target.ordinal))?;
        match pages.pop() {
            Some(page) => Ok(Report::Single { page }),
            // render_file never returns an empty list for an ordinal selection
            None => Err(PreviewError::no_blocks(&target.path)),
        }
    }

    /// Generate pages for the selected blocks of one markdown file
    ///
    /// With [`BlockSelection::All`] a document without blocks produces no
    /// pages; with an ordinal it is an error, as is an ordinal outside
    /// `1..=N`.
    pub fn render_file(&self, source: &Path, selection: BlockSelection) -> Result<Vec<GeneratedPage>> {
        let text = read_document(source)?;
        let blocks = extract_blocks(&text);
        let total = blocks.len();

        let selected: Vec<&DiagramBlock> = match selection {
            BlockSelection::All => blocks.iter().collect(),
            BlockSelection::Ordinal(_) if total == 0 => {
                return Err(PreviewError::no_blocks(source));
            }
            BlockSelection::Ordinal(ordinal) => {
                if ordinal == 0 || ordinal > total {
                    return Err(PreviewError::out_of_range(ordinal, total));
                }
                vec![&blocks[ordinal - 1]]
            }
        };

        selected
            .into_iter()
            .map(|block| self.render_block(source, block, total))
            .collect()
    }

    fn render_block(&self, source: &Path, block: &DiagramBlock, total: usize) -> Result<GeneratedPage> {
        let output = output_path(source, block.ordinal);
        let title = page_title(source, block.ordinal, total);

        write_page(&block.content, &title, &output, &self.options)?;
        info!(output = %output.display(), "Generated preview");

        if self.options.open {
            if let Err(e) = self.launcher.launch(&output) {
                warn!(
                    output = %output.display(),
                    error = %e,
                    "Failed to open browser; preview is still available"
                );
            }
        }

        Ok(GeneratedPage {
            source: source.to_path_buf(),
            output,
            ordinal: block.ordinal,
            total,
        })
    }
}

/// `<dir>/<stem>_<ordinal>.html` next to the source document
pub fn output_path(source: &Path, ordinal: usize) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{}_{}.html", stem, ordinal))
}

/// Toolbar and window title for one diagram
pub fn page_title(source: &Path, ordinal: usize, total: usize) -> String {
    let name = source
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    format!("{} – diagram {}/{}", name, ordinal, total)
}
