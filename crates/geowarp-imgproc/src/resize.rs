use geowarp_image::{Image, ImageDtype, ImageError};

use crate::interpolation::InterpolationMode;
use crate::params::{ensure_scale_factor, scaled_size};
use crate::raster::render;
use crate::warp::CoordinateMapper;

/// Scale an image by independent horizontal and vertical factors.
///
/// The output has `round(width * sx)` columns and `round(height * sy)` rows. Output
/// pixel `(x, y)` samples the source at `(x / sx, y / sy)`; every such coordinate
/// lies inside the source, so no pixel is filled.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `sx` - The horizontal scale factor.
/// * `sy` - The vertical scale factor.
/// * `interpolation` - [`InterpolationMode::Nearest`] truncates the source
///   coordinate, [`InterpolationMode::Bilinear`] blends the four neighbours.
///
/// # Returns
///
/// The scaled image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTransformParameter`] if a factor is not finite
/// and positive.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::interpolation::InterpolationMode;
/// use geowarp_imgproc::resize::scale;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let scaled = scale(&image, 0.5, 2.0, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(scaled.num_channels(), 3);
/// assert_eq!(scaled.size().width, 2);
/// assert_eq!(scaled.size().height, 10);
/// ```
pub fn scale<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    sx: f64,
    sy: f64,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError> {
    ensure_scale_factor("sx", sx)?;
    ensure_scale_factor("sy", sy)?;

    let dst_size = scaled_size(src.size(), sx, sy);
    log::debug!(
        "scale: sx={sx} sy={sy} {interpolation:?}, {} -> {}",
        src.size(),
        dst_size
    );

    render(src, &CoordinateMapper::scale(sx, sy), dst_size, interpolation)
}
