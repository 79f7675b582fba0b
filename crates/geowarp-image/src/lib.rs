#![deny(missing_docs)]
//! Image types used by the geowarp transformations

/// image representation for geometric transformations.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
