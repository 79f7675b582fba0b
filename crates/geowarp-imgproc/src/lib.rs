#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// output raster iteration and resampling.
pub mod raster;

/// utility functions for scaling images.
pub mod resize;

/// image geometric transformations module.
pub mod warp;

mod params;
