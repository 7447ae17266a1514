//! Browser and backend services.
//!
//! # Services
//!
//! - [`inspection`] - Multipart upload to the inspection backend
//! - [`previews`] - Object URL thumbnails for selected files
//! - [`dialogs`] - Modal notices and image previews
//! - [`submit`] - Submission flow tying the above together

pub mod inspection;
pub mod previews;
pub mod dialogs;
pub mod submit;

pub use inspection::*;
pub use previews::*;
pub use dialogs::*;
pub use submit::*;
