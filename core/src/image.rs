// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::{Path, PathBuf};

use role_strapi::UploadFile;

/// Why an image could not be picked.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Access to the file was refused.
    #[error("Permission to read {0} was denied")]
    PermissionDenied(PathBuf),

    /// The file does not exist.
    #[error("Image not found: {0}")]
    NotFound(PathBuf),

    /// The path is not a regular file.
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// The file extension is not a supported image type.
    #[error("Unsupported image type: {0}")]
    Unsupported(PathBuf),

    /// Any other I/O failure.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The picked path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

/// An image file picked from the local file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    path: PathBuf,
    mime: &'static str,
}

impl LocalImage {
    /// Picks an image, checking it exists, is readable and looks like an image.
    pub fn pick(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref().to_path_buf();
        let mime = mime_for(&path).ok_or_else(|| ImageError::Unsupported(path.clone()))?;

        let meta = std::fs::metadata(&path).map_err(|e| classify(e, &path))?;
        if !meta.is_file() {
            return Err(ImageError::NotAFile(path));
        }
        std::fs::File::open(&path).map_err(|e| classify(e, &path))?;

        tracing::debug!(path = %path.display(), mime, "picked image");
        Ok(Self { path, mime })
    }

    /// Path of the picked file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// MIME type derived from the file extension.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// File name sent with the upload.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| "image".to_string(), |a| a.to_string_lossy().into_owned())
    }

    /// Describes the file for the upload endpoint.
    #[must_use]
    pub fn to_upload(&self) -> UploadFile {
        UploadFile {
            path: self.path.clone(),
            file_name: self.file_name(),
            mime: self.mime.to_string(),
        }
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime)
}

fn classify(err: io::Error, path: &Path) -> ImageError {
    let path = path.to_path_buf();
    match err.kind() {
        io::ErrorKind::PermissionDenied => ImageError::PermissionDenied(path),
        io::ErrorKind::NotFound => ImageError::NotFound(path),
        _ => ImageError::Io { path, source: err },
    }
}
