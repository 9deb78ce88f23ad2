//! Image acquisition boundary.
//!
//! An [`ImageHandle`] is an opaque reference to a user-selected image:
//! a filesystem location plus optional MIME type and file name. Handles
//! are immutable once produced and owned by the caller until passed to
//! an identification backend.

use crate::constants::{DEFAULT_MIME_TYPE, DEFAULT_UPLOAD_NAME};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Opaque reference to a selected image.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    path: PathBuf,
    mime: Option<String>,
    file_name: Option<String>,
}

impl ImageHandle {
    /// Create a handle for an image file on disk.
    ///
    /// Verifies the file is readable, derives the upload file name from
    /// the path, and guesses the MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        // Surface unreadable paths here, before any backend is involved.
        std::fs::metadata(path).map_err(|e| Error::ImageRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(guess_mime)
            .map(str::to_string);

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Self {
            path: path.to_path_buf(),
            mime,
            file_name,
        })
    }

    /// Create a handle with an explicit MIME type and file name.
    pub fn new(path: PathBuf, mime: Option<String>, file_name: Option<String>) -> Self {
        Self {
            path,
            mime,
            file_name,
        }
    }

    /// Path to the image file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// MIME type of the image, defaulting to JPEG when unknown.
    pub fn mime(&self) -> &str {
        self.mime.as_deref().unwrap_or(DEFAULT_MIME_TYPE)
    }

    /// File name to use for uploads, with a generic fallback.
    pub fn upload_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_UPLOAD_NAME)
    }

    /// Read the full image payload.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| Error::ImageRead {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Guess a MIME type from a file extension.
fn guess_mime(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}
