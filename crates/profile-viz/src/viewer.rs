//! Interactive display of figures

use crate::figure::ProfileFigure;
use crate::output::ImageFormat;
use profile_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Displays a figure to the user
pub trait Viewer {
    /// Show `figure`, returning once the display is dismissed
    fn show(&self, figure: &ProfileFigure) -> Result<()>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Opens the figure with the platform's default image viewer
///
/// The figure is rendered to a temporary file that is kept after the call,
/// since most viewers read it after the opener has returned. The call waits
/// for the opener process; on macOS and Windows that is until the viewer
/// window closes, on other platforms `xdg-open` may return immediately.
#[derive(Debug, Clone)]
pub struct SystemViewer {
    format: ImageFormat,
}

impl Default for SystemViewer {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
        }
    }
}

impl SystemViewer {
    /// Viewer rendering PNG files
    pub fn new() -> Self {
        Self::default()
    }

    /// Render in `format` instead of PNG
    pub fn with_format(format: ImageFormat) -> Self {
        Self { format }
    }

    /// Render the figure to a fresh temporary file that outlives this call
    pub fn render_to_temp(&self, figure: &ProfileFigure) -> Result<PathBuf> {
        let suffix = format!(".{}", self.format.extension());
        let file = tempfile::Builder::new()
            .prefix("profile-histogram-")
            .suffix(&suffix)
            .tempfile()?;
        let path = file.into_temp_path().keep().map_err(|e| Error::Io(e.error))?;
        figure.save_as(&path, self.format)?;
        Ok(path)
    }
}

impl Viewer for SystemViewer {
    fn show(&self, figure: &ProfileFigure) -> Result<()> {
        let path = self.render_to_temp(figure)?;
        info!(path = %path.display(), "opening profile histogram");

        let status = opener(&path).status()?;
        if !status.success() {
            warn!(%status, path = %path.display(), "image viewer exited with failure");
            return Err(Error::Render(format!(
                "image viewer exited with {status} for {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg("-W").arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", "/WAIT"]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Draws nothing and returns immediately, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewer;

impl Viewer for NullViewer {
    fn show(&self, _figure: &ProfileFigure) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
