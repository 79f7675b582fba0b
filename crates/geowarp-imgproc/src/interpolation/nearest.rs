use geowarp_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// Truncates the coordinates towards zero and copies the pixel at `(floor(v), floor(u))`.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The pixel values at the truncated location.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());
    debug_assert!(
        u >= 0.0 && v >= 0.0,
        "nearest sample ({u}, {v}) has a negative coordinate"
    );

    let iu = (u.floor() as usize).min(cols - 1);
    let iv = (v.floor() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;
    let src = &image.as_slice()[base..base + C];

    let mut pixel = [0.0; C];
    for (dst, &val) in pixel.iter_mut().zip(src) {
        *dst = val.into();
    }

    pixel
}

#[cfg(test)]
mod tests {
    use super::nearest_neighbor_interpolation;
    use geowarp_image::{Image, ImageError, ImageSize};

    #[test]
    fn nearest_truncates() -> Result<(), ImageError> {
        let image = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3, 4, 5, 6, 7],
        )?;

        assert_eq!(nearest_neighbor_interpolation(&image, 0.9, 0.9), [0.0, 1.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 1.0, 0.2), [2.0, 3.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 1.7, 1.99), [6.0, 7.0]);

        Ok(())
    }
}
