use geowarp_image::{Image, ImageDtype, ImageError, ImageSize};

use super::mapper::CoordinateMapper;
use super::matrix::Matrix3;
use crate::interpolation::InterpolationMode;
use crate::params::{ensure_finite, ensure_scale_factor, scaled_size};
use crate::raster::render;

/// Parameters of the combined scale, rotate, translate and shear transform.
///
/// The default value is the identity transform.
///
/// # Example
///
/// ```
/// use geowarp_imgproc::warp::CompositeParams;
///
/// let params = CompositeParams::default()
///     .with_scale(2.0, 2.0)
///     .with_rotation(30.0);
///
/// assert_eq!(params.sx, 2.0);
/// assert_eq!(params.tx, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeParams {
    /// Horizontal scale factor.
    pub sx: f64,
    /// Vertical scale factor.
    pub sy: f64,
    /// Horizontal translation in pixels.
    pub tx: i64,
    /// Vertical translation in pixels.
    pub ty: i64,
    /// Rotation angle in degrees.
    pub degrees: f64,
    /// Horizontal shear factor.
    pub bx: f64,
    /// Vertical shear factor.
    pub by: f64,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx: 0,
            ty: 0,
            degrees: 0.0,
            bx: 0.0,
            by: 0.0,
        }
    }
}

impl CompositeParams {
    /// Set the scale factors.
    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.sx = sx;
        self.sy = sy;
        self
    }

    /// Set the translation.
    pub fn with_translation(mut self, tx: i64, ty: i64) -> Self {
        self.tx = tx;
        self.ty = ty;
        self
    }

    /// Set the rotation angle in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.degrees = degrees;
        self
    }

    /// Set the shear factors.
    pub fn with_shear(mut self, bx: f64, by: f64) -> Self {
        self.bx = bx;
        self.by = by;
        self
    }

    /// Check that every parameter can be used.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidTransformParameter`] for non-finite values or
    /// scale factors that are not strictly positive.
    pub fn validate(&self) -> Result<(), ImageError> {
        ensure_scale_factor("sx", self.sx)?;
        ensure_scale_factor("sy", self.sy)?;
        ensure_finite("degrees", self.degrees)?;
        ensure_finite("bx", self.bx)?;
        ensure_finite("by", self.by)?;
        Ok(())
    }
}

/// Build the composite matrix `S * R * T * B` for an output image of `dst_size`.
///
/// The rotation turns about the center of the output image. The matrix maps output
/// pixel indices to source pixel indices and is used as is, without inversion.
pub fn composite_matrix(params: &CompositeParams, dst_size: ImageSize) -> Matrix3 {
    let center = (dst_size.width as f64 * 0.5, dst_size.height as f64 * 0.5);

    Matrix3::scale(params.sx, params.sy)
        * Matrix3::rotation_about(center, params.degrees)
        * Matrix3::translation(params.tx as f64, params.ty as f64)
        * Matrix3::shear(params.bx, params.by)
}

/// Apply scale, rotation, translation and shear in a single pass.
///
/// The output has `round(width * sx)` columns and `round(height * sy)` rows. Every
/// output pixel is multiplied by [`composite_matrix`]; coordinates that land in the
/// source are sampled bilinearly, the rest are black.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTransformParameter`] if `params` fails
/// [`CompositeParams::validate`].
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::warp::{composite, CompositeParams};
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     128,
/// )
/// .unwrap();
///
/// let out = composite(&image, &CompositeParams::default()).unwrap();
/// assert_eq!(out, image);
/// ```
pub fn composite<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    params: &CompositeParams,
) -> Result<Image<T, C>, ImageError> {
    params.validate()?;

    let dst_size = scaled_size(src.size(), params.sx, params.sy);
    let m = composite_matrix(params, dst_size);
    log::debug!("composite: {params:?}, {} -> {}", src.size(), dst_size);

    render(
        src,
        &CoordinateMapper::affine(m),
        dst_size,
        InterpolationMode::Bilinear,
    )
}

/// Resample an image through an arbitrary affine matrix.
///
/// `m` maps output pixel `(x, y, 1)` to the source coordinate it samples.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `m` - The output-to-source matrix.
/// * `new_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::interpolation::InterpolationMode;
/// use geowarp_imgproc::warp::{warp_affine, Matrix3};
///
/// let src = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![1.0, 3.0],
/// )
/// .unwrap();
///
/// let m = Matrix3::translation(0.5, 0.0);
/// let dst = warp_affine(&src, &m, src.size(), InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.as_slice(), &[2.0, 3.0]);
/// ```
pub fn warp_affine<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    m: &Matrix3,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError> {
    log::debug!("warp_affine: {m:?}, {} -> {}", src.size(), new_size);

    render(src, &CoordinateMapper::affine(*m), new_size, interpolation)
}
