//! Opening generated pages in a browser

use std::io;
use std::path::Path;

/// Something that can show a generated page to the user
pub trait Launcher {
    /// Open `page`; failures are reported, never fatal to the run
    fn launch(&self, page: &Path) -> io::Result<()>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn launch(&self, page: &Path) -> io::Result<()> {
        (**self).launch(page)
    }
}

/// Opens pages with the platform's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn launch(&self, page: &Path) -> io::Result<()> {
        open::that(page)
    }
}

/// Records launch requests instead of opening anything
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLauncher {
    launched: std::cell::RefCell<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages launched so far, in order
    pub fn launched(&self) -> Vec<std::path::PathBuf> {
        self.launched.borrow().clone()
    }
}

#[cfg(test)]
impl Launcher for RecordingLauncher {
    fn launch(&self, page: &Path) -> io::Result<()> {
        self.launched.borrow_mut().push(page.to_path_buf());
        Ok(())
    }
}
