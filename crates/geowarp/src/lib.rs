//! Geometric image transformations: scale, translate, rotate, shear and a
//! combined affine transform, all by inverse mapping with nearest or bilinear
//! sampling.
//!
//! ```
//! use geowarp::image::{Image, ImageSize};
//! use geowarp::imgproc::warp::{composite, CompositeParams};
//!
//! let image = Image::<u8, 3>::from_size_val(
//!     ImageSize {
//!         width: 16,
//!         height: 12,
//!     },
//!     90,
//! )
//! .unwrap();
//!
//! let params = CompositeParams::default()
//!     .with_scale(0.5, 0.5)
//!     .with_rotation(15.0);
//! let out = composite(&image, &params).unwrap();
//!
//! assert_eq!(out.size(), ImageSize { width: 8, height: 6 });
//! ```

#[doc(inline)]
pub use geowarp_image as image;

#[doc(inline)]
pub use geowarp_imgproc as imgproc;
