//! UI Components for the inspection upload application.
//!
//! # Feature Components
//! - [`UploadForm`] - Image staging, labelling and batch submission
//! - [`ImageRow`] - One staged image with its label input
//!
//! # Overlay Components
//! - [`DialogHost`] - Modal notices and image previews

mod upload;
mod image_row;
mod dialog;

pub use upload::*;
pub use image_row::*;
pub use dialog::*;
