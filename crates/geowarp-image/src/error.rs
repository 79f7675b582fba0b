/// An error type for the image and transformation modules.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the pixel buffer cannot be allocated.
    #[error("Failed to allocate an image buffer of {0} elements")]
    AllocationFailed(usize),

    /// Error when a transformation parameter cannot be used.
    #[error("Invalid transform parameter {0}: {1}")]
    InvalidTransformParameter(&'static str, f64),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data")]
    CastError,
}
