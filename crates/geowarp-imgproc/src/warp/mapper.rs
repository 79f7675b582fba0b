use geowarp_image::ImageSize;

use super::matrix::Matrix3;

/// Inverse mapping from an output pixel to a source coordinate.
///
/// One variant per transformation kind. The mapper is resolved once per call,
/// outside the pixel loop, so trigonometry and matrix products are not
/// recomputed per pixel.
///
/// Scale and translate work in top-left pixel space. Rotate and shear work in a
/// frame centred on the image with the y axis pointing up. Affine applies its
/// matrix directly to top-left pixel indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateMapper {
    /// `u = x / sx`, `v = y / sy`.
    Scale {
        /// Horizontal scale factor.
        sx: f64,
        /// Vertical scale factor.
        sy: f64,
    },
    /// `u = x - tx`, `v = y - ty` in whole pixels.
    Translate {
        /// Horizontal offset in pixels.
        tx: i64,
        /// Vertical offset in pixels.
        ty: i64,
    },
    /// Inverse rotation about the image center.
    Rotate {
        /// Sine of the rotation angle.
        sin: f64,
        /// Cosine of the rotation angle.
        cos: f64,
        /// Half the width of the image.
        half_cols: f64,
        /// Half the height of the image.
        half_rows: f64,
    },
    /// Inverse shear about the image center.
    Shear {
        /// Horizontal shear factor.
        bx: f64,
        /// Vertical shear factor.
        by: f64,
        /// Half the width of the image.
        half_cols: f64,
        /// Half the height of the image.
        half_rows: f64,
    },
    /// Output pixel `(x, y, 1)` multiplied by the matrix.
    Affine(Matrix3),
}

impl CoordinateMapper {
    /// Mapper for a scale by `(sx, sy)`.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::Scale { sx, sy }
    }

    /// Mapper for an integer translation by `(tx, ty)`.
    pub fn translate(tx: i64, ty: i64) -> Self {
        Self::Translate { tx, ty }
    }

    /// Mapper for a rotation by `degrees` about the center of an image of `size`.
    pub fn rotate(degrees: f64, size: ImageSize) -> Self {
        let theta = degrees.to_radians();
        Self::Rotate {
            sin: theta.sin(),
            cos: theta.cos(),
            half_cols: size.width as f64 / 2.0,
            half_rows: size.height as f64 / 2.0,
        }
    }

    /// Mapper for a shear by `(bx, by)` about the center of an image of `size`.
    pub fn shear(bx: f64, by: f64, size: ImageSize) -> Self {
        Self::Shear {
            bx,
            by,
            half_cols: size.width as f64 / 2.0,
            half_rows: size.height as f64 / 2.0,
        }
    }

    /// Mapper applying `m` to every output pixel.
    pub fn affine(m: Matrix3) -> Self {
        Self::Affine(m)
    }

    /// Source coordinate `(u, v)` for the output pixel at column `x`, row `y`.
    ///
    /// The result may fall outside the source image; the caller decides.
    #[inline]
    pub fn map(&self, x: usize, y: usize) -> (f64, f64) {
        match *self {
            Self::Scale { sx, sy } => (x as f64 / sx, y as f64 / sy),
            Self::Translate { tx, ty } => (shifted(x, tx), shifted(y, ty)),
            Self::Rotate {
                sin,
                cos,
                half_cols,
                half_rows,
            } => {
                let (x0, y0) = to_centered(x, y, half_cols, half_rows);
                let v0 = -x0 * sin + y0 * cos;
                let u0 = x0 * cos + y0 * sin;
                from_centered(u0, v0, half_cols, half_rows)
            }
            Self::Shear {
                bx,
                by,
                half_cols,
                half_rows,
            } => {
                let (x0, y0) = to_centered(x, y, half_cols, half_rows);
                let v0 = y0 - by * x0;
                let u0 = x0 - bx * y0;
                from_centered(u0, v0, half_cols, half_rows)
            }
            Self::Affine(m) => m.transform_point(x as f64, y as f64),
        }
    }
}

/// `index - offset`, or `-inf` when the difference does not fit an `i64`.
#[inline]
fn shifted(index: usize, offset: i64) -> f64 {
    (index as i64)
        .checked_sub(offset)
        .map_or(f64::NEG_INFINITY, |v| v as f64)
}

/// Pixel indices to the centred, y-up frame.
#[inline]
fn to_centered(x: usize, y: usize, half_cols: f64, half_rows: f64) -> (f64, f64) {
    (x as f64 - half_cols, half_rows - y as f64)
}

#[inline]
fn from_centered(u0: f64, v0: f64, half_cols: f64, half_rows: f64) -> (f64, f64) {
    (u0 + half_cols, half_rows - v0)
}

#[cfg(test)]
mod tests {
    use super::CoordinateMapper;
    use crate::warp::Matrix3;
    use approx::assert_relative_eq;
    use geowarp_image::ImageSize;

    const SIZE: ImageSize = ImageSize {
        width: 4,
        height: 4,
    };

    #[test]
    fn scale_divides() {
        let mapper = CoordinateMapper::scale(2.0, 0.5);
        assert_eq!(mapper.map(3, 1), (1.5, 2.0));
    }

    #[test]
    fn translate_subtracts() {
        let mapper = CoordinateMapper::translate(2, -1);
        assert_eq!(mapper.map(0, 0), (-2.0, 1.0));
        assert_eq!(mapper.map(5, 3), (3.0, 4.0));
    }

    #[test]
    fn translate_extreme_offsets_stay_out_of_frame() {
        let mapper = CoordinateMapper::translate(i64::MIN, i64::MAX);
        let (u, v) = mapper.map(2, 1);
        assert_eq!(u, f64::NEG_INFINITY);
        assert!(v < 0.0);
    }

    #[test]
    fn rotate_zero_is_identity() {
        let mapper = CoordinateMapper::rotate(0.0, SIZE);
        for (x, y) in [(0, 0), (3, 1), (2, 2)] {
            assert_eq!(mapper.map(x, y), (x as f64, y as f64));
        }
    }

    #[test]
    fn rotate_quarter_turn() {
        // output (x, y) samples source (cols - y, x)
        let mapper = CoordinateMapper::rotate(90.0, SIZE);
        let (u, v) = mapper.map(1, 2);
        assert_relative_eq!(u, 2.0, epsilon = 1e-9);
        assert_relative_eq!(v, 1.0, epsilon = 1e-9);

        let (u, v) = mapper.map(3, 0);
        assert_relative_eq!(u, 4.0, epsilon = 1e-9);
        assert_relative_eq!(v, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn shear_horizontal() {
        let mapper = CoordinateMapper::shear(0.5, 0.0, SIZE);
        // the center row is unchanged
        assert_eq!(mapper.map(1, 2), (1.0, 2.0));
        // one row above the center: y0 = 1, u0 = x0 - 0.5
        assert_eq!(mapper.map(1, 1), (0.5, 1.0));
    }

    #[test]
    fn affine_applies_matrix() {
        let mapper = CoordinateMapper::affine(Matrix3::translation(1.0, 2.0));
        assert_eq!(mapper.map(3, 4), (4.0, 6.0));
    }
}
