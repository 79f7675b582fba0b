use geowarp_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// Blends the four neighbours `(x1, y1)`, `(x2, y1)`, `(x1, y2)`, `(x2, y2)` where
/// `x1 = floor(u)`, `x2 = min(ceil(u), cols - 1)` and likewise for `v`. An axis whose
/// two neighbours coincide copies the single sample instead of dividing by zero.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate, in `[0, cols)`.
/// * `v` - The y coordinate of the pixel to interpolate, in `[0, rows)`.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());
    debug_assert!(
        u >= 0.0 && v >= 0.0 && u < cols as f64 && v < rows as f64,
        "bilinear sample ({u}, {v}) outside a {cols}x{rows} image"
    );

    let x1 = (u.floor() as usize).min(cols - 1);
    let x2 = (u.ceil() as usize).min(cols - 1);
    let y1 = (v.floor() as usize).min(rows - 1);
    let y2 = (v.ceil() as usize).min(rows - 1);

    let du = if x2 == x1 {
        0.0
    } else {
        (u - x1 as f64) / (x2 - x1) as f64
    };
    let dv = if y2 == y1 {
        0.0
    } else {
        (v - y1 as f64) / (y2 - y1) as f64
    };

    let data = image.as_slice();
    let offset = |x: usize, y: usize| (y * cols + x) * C;

    let q11 = &data[offset(x1, y1)..][..C];
    let q12 = &data[offset(x2, y1)..][..C];
    let q21 = &data[offset(x1, y2)..][..C];
    let q22 = &data[offset(x2, y2)..][..C];

    let mut pixel = [0.0; C];
    for k in 0..C {
        let (q11, q12): (f64, f64) = (q11[k].into(), q12[k].into());
        let (q21, q22): (f64, f64) = (q21[k].into(), q22[k].into());

        let r1 = q11 + (q12 - q11) * du;
        let r2 = q21 + (q22 - q21) * du;
        pixel[k] = r1 + (r2 - r1) * dv;
    }

    pixel
}
