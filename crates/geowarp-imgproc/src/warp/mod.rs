//! Geometric image transformations by inverse mapping.
//!
//! This module provides functions for applying 2D transformations to images:
//!
//! - Integer translation
//! - Rotation and shear about the image center
//! - A combined scale, rotation, translation and shear in one matrix
//! - Resampling through an arbitrary affine matrix
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```
//! use geowarp_image::{Image, ImageSize};
//! use geowarp_imgproc::warp::rotate;
//!
//! let image = Image::<u8, 3>::from_size_val(
//!     ImageSize {
//!         width: 8,
//!         height: 8,
//!     },
//!     255,
//! )
//! .unwrap();
//!
//! let rotated = rotate(&image, 45.0).unwrap();
//! assert_eq!(rotated.size(), image.size());
//! ```

mod affine;
mod mapper;
mod matrix;
mod transform;

pub use affine::{composite, composite_matrix, warp_affine, CompositeParams};
pub use mapper::CoordinateMapper;
pub use matrix::Matrix3;
pub use transform::{rotate, shear, translate};
