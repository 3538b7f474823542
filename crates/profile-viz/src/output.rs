//! Output targets and image formats

use crate::figure::ProfileFigure;
use crate::viewer::Viewer;
use profile_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Image encodings a figure can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Svg,
}

impl ImageFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }

    /// Pick the format from the extension of `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }

    /// Canonical file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where a rendered figure goes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    /// Display interactively and block until the viewer closes
    #[default]
    Show,
    /// Write a single image file
    File(PathBuf),
    /// Write the same rendering to every path
    Files(Vec<PathBuf>),
}

impl OutputTarget {
    /// Paths that will be written, empty for [`OutputTarget::Show`]
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            OutputTarget::Show => &[],
            OutputTarget::File(path) => std::slice::from_ref(path),
            OutputTarget::Files(paths) => paths,
        }
    }

    /// True for interactive display
    pub fn is_show(&self) -> bool {
        matches!(self, OutputTarget::Show)
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        OutputTarget::File(path)
    }
}

impl From<&Path> for OutputTarget {
    fn from(path: &Path) -> Self {
        OutputTarget::File(path.to_path_buf())
    }
}

impl From<&str> for OutputTarget {
    fn from(path: &str) -> Self {
        OutputTarget::File(PathBuf::from(path))
    }
}

impl From<String> for OutputTarget {
    fn from(path: String) -> Self {
        OutputTarget::File(PathBuf::from(path))
    }
}

impl From<Vec<PathBuf>> for OutputTarget {
    fn from(paths: Vec<PathBuf>) -> Self {
        OutputTarget::Files(paths)
    }
}

impl From<Vec<String>> for OutputTarget {
    fn from(paths: Vec<String>) -> Self {
        OutputTarget::Files(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl From<Vec<&str>> for OutputTarget {
    fn from(paths: Vec<&str>) -> Self {
        OutputTarget::Files(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OutputTarget {
    fn from(paths: [&str; N]) -> Self {
        OutputTarget::Files(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl<T: Into<OutputTarget>> From<Option<T>> for OutputTarget {
    fn from(target: Option<T>) -> Self {
        target.map(Into::into).unwrap_or_default()
    }
}

/// Send a figure to its target
///
/// `Show` hands the figure to `viewer`. File targets are rendered once per
/// distinct format and the bytes copied to the remaining paths of that
/// format, so every path of one format holds the same image. All
/// extensions are checked before anything is written.
///
/// Returns the paths written, in order.
pub fn write_outputs(
    figure: &ProfileFigure,
    target: &OutputTarget,
    viewer: &dyn Viewer,
) -> Result<Vec<PathBuf>> {
    match target {
        OutputTarget::Show => {
            debug!(viewer = viewer.name(), "showing profile histogram");
            viewer.show(figure)?;
            Ok(Vec::new())
        }
        OutputTarget::File(_) | OutputTarget::Files(_) => write_files(figure, target.paths()),
    }
}

fn write_files(figure: &ProfileFigure, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let formats = paths
        .iter()
        .map(|path| ImageFormat::from_path(path))
        .collect::<Result<Vec<_>>>()?;

    let mut rendered: Vec<(ImageFormat, &Path)> = Vec::new();
    let mut written = Vec::with_capacity(paths.len());
    for (path, format) in paths.iter().zip(formats) {
        match rendered.iter().find(|(done, _)| *done == format) {
            Some((_, source)) if *source == path.as_path() => {}
            Some((_, source)) => {
                fs::copy(source, path)?;
            }
            None => {
                figure.save_as(path, format)?;
                rendered.push((format, path.as_path()));
            }
        }
        info!(
            path = %path.display(),
            "Profile Histogram plot saved at: {}",
            path.display()
        );
        written.push(path.clone());
    }
    Ok(written)
}
