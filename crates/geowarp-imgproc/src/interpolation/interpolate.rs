use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use geowarp_image::{Image, ImageDtype};

/// Interpolation mode used to sample the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// The caller guarantees `0 <= u < cols` and `0 <= v < rows`; debug builds assert it.
///
/// # Returns
///
/// The interpolated pixel, one `f64` per channel.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::interpolation::{interpolate_pixel, InterpolationMode};
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0, 40, 80, 120],
/// )
/// .unwrap();
///
/// let center = interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bilinear);
/// assert_eq!(center, [60.0]);
/// ```
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
) -> [f64; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
