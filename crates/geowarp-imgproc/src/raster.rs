use geowarp_image::{Image, ImageDtype, ImageError, ImageSize};

use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::warp::CoordinateMapper;

/// Apply a function to each pixel of the image, row by row.
///
/// The closure receives the column, the row and the channels of the pixel.
pub fn iter_rows_mut<T, const C: usize>(
    dst: &mut Image<T, C>,
    mut f: impl FnMut(usize, usize, &mut [T]),
) {
    let cols = dst.cols();
    if cols == 0 || C == 0 {
        return;
    }

    dst.as_slice_mut()
        .chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
        });
}

/// Resample `src` into a new image of size `dst_size` by inverse mapping.
///
/// Each output pixel is mapped back to the source with `mapper`. Coordinates inside
/// `[0, cols) x [0, rows)` are sampled with `interpolation`, the rest stay black
/// (`T::default()`).
///
/// # Arguments
///
/// * `src` - The source image, never modified.
/// * `mapper` - The inverse coordinate mapping.
/// * `dst_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns [`ImageError::AllocationFailed`] if the output cannot be allocated.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::interpolation::InterpolationMode;
/// use geowarp_imgproc::raster::render;
/// use geowarp_imgproc::warp::CoordinateMapper;
///
/// let src = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![7, 9],
/// )
/// .unwrap();
///
/// let dst = render(
///     &src,
///     &CoordinateMapper::translate(1, 0),
///     src.size(),
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(dst.as_slice(), &[0, 7]);
/// ```
pub fn render<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    mapper: &CoordinateMapper,
    dst_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError> {
    let mut dst = Image::from_size_val(dst_size, T::default())?;

    let (src_cols, src_rows) = (src.cols() as f64, src.rows() as f64);
    let mut out_of_frame = 0usize;

    iter_rows_mut(&mut dst, |x, y, dst_pixel| {
        let (u, v) = mapper.map(x, y);

        // NaN fails every comparison and ends up black as well
        if u >= 0.0 && u < src_cols && v >= 0.0 && v < src_rows {
            let pixel = interpolate_pixel(src, u, v, interpolation);
            dst_pixel
                .iter_mut()
                .zip(pixel)
                .for_each(|(out, val)| *out = T::from_f64(val));
        } else {
            out_of_frame += 1;
        }
    });

    log::trace!(
        "rendered {} from {}: {} pixels out of frame",
        dst_size,
        src.size(),
        out_of_frame
    );

    Ok(dst)
}
