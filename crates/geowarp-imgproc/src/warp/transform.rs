use geowarp_image::{Image, ImageDtype, ImageError};

use super::mapper::CoordinateMapper;
use crate::interpolation::InterpolationMode;
use crate::params::ensure_finite;
use crate::raster::render;

/// Shift an image by whole pixels.
///
/// Output pixel `(x, y)` copies source pixel `(x - tx, y - ty)`; pixels uncovered by
/// the shift are black. The output keeps the size of the source.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `tx` - Horizontal offset, positive moves content to the right.
/// * `ty` - Vertical offset, positive moves content down.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::warp::translate;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![1, 2, 3],
/// )
/// .unwrap();
///
/// let shifted = translate(&image, 1, 0).unwrap();
/// assert_eq!(shifted.as_slice(), &[0, 1, 2]);
/// ```
pub fn translate<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    tx: i64,
    ty: i64,
) -> Result<Image<T, C>, ImageError> {
    log::debug!("translate: tx={tx} ty={ty}, {}", src.size());

    // integer offsets land on exact pixel centers
    render(
        src,
        &CoordinateMapper::translate(tx, ty),
        src.size(),
        InterpolationMode::Nearest,
    )
}

/// Rotate an image about its center.
///
/// Positive angles rotate the content counter-clockwise as displayed. The output keeps
/// the size of the source; corners that rotate out of frame are lost and uncovered
/// regions are black.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `degrees` - The rotation angle in degrees.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTransformParameter`] if the angle is not finite.
pub fn rotate<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    degrees: f64,
) -> Result<Image<T, C>, ImageError> {
    ensure_finite("degrees", degrees)?;
    log::debug!("rotate: {degrees} degrees, {}", src.size());

    render(
        src,
        &CoordinateMapper::rotate(degrees, src.size()),
        src.size(),
        InterpolationMode::Bilinear,
    )
}

/// Shear an image about its center.
///
/// `bx` slides rows horizontally in proportion to their height above the center,
/// `by` slides columns vertically in proportion to their offset from the center.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `bx` - The horizontal shear factor.
/// * `by` - The vertical shear factor.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTransformParameter`] if a factor is not finite.
pub fn shear<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    bx: f64,
    by: f64,
) -> Result<Image<T, C>, ImageError> {
    ensure_finite("bx", bx)?;
    ensure_finite("by", by)?;
    log::debug!("shear: bx={bx} by={by}, {}", src.size());

    render(
        src,
        &CoordinateMapper::shear(bx, by, src.size()),
        src.size(),
        InterpolationMode::Bilinear,
    )
}
