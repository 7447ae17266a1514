//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Queue Types** - staged images and their preview handles
//! - **Notice Types** - user-facing dialog content
//! - **Error Types** - frontend error handling

use std::fmt;

use thiserror::Error;

// =============================================================================
// Queue Types
// =============================================================================

/// Client-local URL used to render a thumbnail without re-reading the file.
///
/// Created when an image is staged and revoked when its entry is retired.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One image staged for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingImage<F> {
    /// Stable render key, unique within its queue
    pub id: u64,
    /// Raw file selected by the user
    pub file: F,
    /// Thumbnail handle
    pub preview: PreviewHandle,
    /// Free-text annotation, required non-blank at submit time
    pub label: String,
}

impl<F> PendingImage<F> {
    /// Whether the label is empty once whitespace is trimmed.
    pub fn has_blank_label(&self) -> bool {
        self.label.trim().is_empty()
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Severity of a user-facing notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Warning => "notice-warning",
            NoticeKind::Error => "notice-error",
        }
    }

    /// Icon shown above the notice title.
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✔",
            NoticeKind::Warning => "!",
            NoticeKind::Error => "✖",
        }
    }
}

/// Content of a modal notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Submit attempted with an empty queue.
    pub fn no_images() -> Self {
        Self::new(
            NoticeKind::Warning,
            "Upload failed!",
            "Please attach at least one image.",
        )
    }

    /// Submit attempted while the label at `position` (1-based) is blank.
    pub fn missing_label(position: usize) -> Self {
        Self::new(
            NoticeKind::Error,
            "Label missing!",
            format!("Label missing for image {}.", position),
        )
    }

    /// The inspection service accepted the batch.
    pub fn upload_succeeded() -> Self {
        Self::new(
            NoticeKind::Success,
            "Upload successful!",
            "All images were uploaded.",
        )
    }

    /// The request failed; the queue is kept for a retry.
    pub fn upload_failed() -> Self {
        Self::new(
            NoticeKind::Error,
            "Upload failed!",
            "Something went wrong while uploading the images. Please try again.",
        )
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Preview URL could not be created for a file.
    #[error("Preview error: {0}")]
    Preview(String),

    /// The multipart request could not be assembled.
    #[error("Request error: {0}")]
    Request(String),

    /// Transport failure (unreachable host, CORS, aborted connection).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
