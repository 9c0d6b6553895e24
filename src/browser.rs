use std::io::{self, ErrorKind};

use crate::error::{ExportError, Result};

/// Opens a URL for the user.
///
/// The export flow only needs the call to start; it never checks whether a
/// browser window actually appeared or whether the user went on to grant
/// access.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<()>;
}

/// Launches the platform's default browser.
///
/// Delegates to the `webbrowser` crate, which picks the right mechanism for
/// Linux, macOS and Windows and does not wait for the spawned process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(launch_error)
    }
}

/// Classifies a failure to start the browser.
pub fn launch_error(e: io::Error) -> ExportError {
    match e.kind() {
        ErrorKind::Unsupported => ExportError::UnsupportedPlatform,
        _ => ExportError::Launch(e),
    }
}
