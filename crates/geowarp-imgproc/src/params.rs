use geowarp_image::{ImageError, ImageSize};

/// Rejects NaN and infinite parameters.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ImageError> {
    if !value.is_finite() {
        return Err(ImageError::InvalidTransformParameter(name, value));
    }
    Ok(())
}

/// Scale factors must be finite and strictly positive.
pub(crate) fn ensure_scale_factor(name: &'static str, value: f64) -> Result<(), ImageError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ImageError::InvalidTransformParameter(name, value));
    }
    Ok(())
}

/// `(round(width * sx), round(height * sy))`
pub(crate) fn scaled_size(size: ImageSize, sx: f64, sy: f64) -> ImageSize {
    ImageSize {
        width: (size.width as f64 * sx).round() as usize,
        height: (size.height as f64 * sy).round() as usize,
    }
}
