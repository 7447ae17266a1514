//! Application configuration.
//!
//! Centralized configuration for the inspection upload frontend.
//! Values are compiled in; the backend URL can be overridden at build time
//! with the `INSPECTION_BACKEND_URL` environment variable.

/// Inspection service base URL used when no override is compiled in.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Path of the inspection upload endpoint on the backend.
pub const INSPECTION_PATH: &str = "/api/inspection";

/// Repeated multipart field carrying one image per queue entry.
pub const IMAGES_FIELD: &str = "images[]";

/// Repeated multipart field carrying one label per queue entry.
///
/// Paired with [`IMAGES_FIELD`] by position only.
pub const LABELS_FIELD: &str = "labels[]";

/// `accept` filter handed to the native file picker.
pub const ACCEPTED_TYPES: &str = "image/*";

/// Width (px) of the enlarged image in the preview dialog.
pub const PREVIEW_WIDTH: u32 = 600;

/// Backend base URL, honouring the build-time override.
pub fn backend_url() -> &'static str {
    match option_env!("INSPECTION_BACKEND_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    }
}

/// Full URL of the inspection upload endpoint.
pub fn inspection_endpoint() -> String {
    join_endpoint(backend_url(), INSPECTION_PATH)
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
