//! Pixel interpolation methods for image transformations.
//!
//! Every transformation in this crate maps an output pixel back to a generally
//! non-integer location in the source image and samples a color there.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: truncates the coordinate and copies that pixel
//! - **Bilinear**: linear blend of the four surrounding pixels

mod bilinear;
pub(crate) mod interpolate;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};
