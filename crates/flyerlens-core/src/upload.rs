//! Flyer files selected for upload, and the checks applied before sending one.
//!
//! Accepted uploads are a single JPEG, PNG or PDF of at most 10 MiB. The
//! analysis client does not run these checks itself; callers do.

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// Upper bound on an upload, matching the backend's own limit.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the analysis endpoint accepts.
pub const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];

const FALLBACK_TYPE: &str = "application/octet-stream";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("File type not supported. Please upload JPG, PNG, or PDF.")]
    UnsupportedType { content_type: String },

    #[error("File is too large. Maximum size is 10MB. Please compress your image.")]
    TooLarge { size: u64 },

    #[error("File is empty.")]
    Empty,
}

/// A binary flyer (image or PDF) ready to be sent for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlyerFile {
    pub file_name: String,
    pub content_type: String,
    /// Shared buffer; cloning does not copy the payload.
    pub bytes: Bytes,
}

impl FlyerFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a flyer from disk, inferring its MIME type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = content_type_for(path);
        debug!(file = %path.display(), content_type, bytes = bytes.len(), "read flyer");
        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes: Bytes::from(bytes),
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// MIME type for a path, by extension (case-insensitive).
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => FALLBACK_TYPE,
    }
}

/// Check a flyer against the accepted types and size limit.
pub fn validate(file: &FlyerFile) -> Result<(), UploadError> {
    validate_content_type(&file.content_type)?;
    validate_len(file.len() as u64)
}

pub fn validate_content_type(content_type: &str) -> Result<(), UploadError> {
    if ACCEPTED_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType {
            content_type: content_type.to_string(),
        })
    }
}

/// Size check alone, usable on file metadata before the contents are read.
pub fn validate_len(len: u64) -> Result<(), UploadError> {
    if len == 0 {
        return Err(UploadError::Empty);
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size: len });
    }
    Ok(())
}
