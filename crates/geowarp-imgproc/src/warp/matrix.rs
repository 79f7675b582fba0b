use std::ops::Mul;

/// A 3x3 homogeneous transformation matrix stored row-major.
///
/// Points are column vectors `(x, y, 1)` multiplied on the right, so `a * b`
/// applies `b` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(pub [[f64; 3]; 3]);

impl Matrix3 {
    /// The identity transform.
    pub const IDENTITY: Matrix3 = Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Returns the identity transform.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Scaling matrix `diag(sx, sy, 1)`.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Matrix3([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Translation matrix with translation column `(tx, ty)`.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Matrix3([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Returns a rotation matrix about a center point.
    ///
    /// The rotation matrix is defined as:
    ///
    /// | alpha  beta  tx |
    /// | -beta  alpha ty |
    /// | 0      0     1  |
    ///
    /// where:
    ///
    /// alpha = cos(angle)
    /// beta = sin(angle)
    /// tx = (1 - alpha) * center.x - beta * center.y
    /// ty = beta * center.x + (1 - alpha) * center.y
    ///
    /// # Arguments
    ///
    /// * `center` - The center point of the rotation.
    /// * `angle` - The angle of rotation in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use geowarp_imgproc::warp::Matrix3;
    ///
    /// let m = Matrix3::rotation_about((2.0, 2.0), 90.0);
    /// let (u, v) = m.transform_point(2.0, 2.0);
    /// assert!((u - 2.0).abs() < 1e-12 && (v - 2.0).abs() < 1e-12);
    /// ```
    pub fn rotation_about(center: (f64, f64), angle: f64) -> Self {
        let theta = angle.to_radians();
        let alpha = theta.cos();
        let beta = theta.sin();

        let tx = (1.0 - alpha) * center.0 - beta * center.1;
        let ty = beta * center.0 + (1.0 - alpha) * center.1;

        Matrix3([[alpha, beta, tx], [-beta, alpha, ty], [0.0, 0.0, 1.0]])
    }

    /// Shear matrix `[[1 + bx*by, bx, 0], [by, 1, 0], [0, 0, 1]]`.
    pub fn shear(bx: f64, by: f64) -> Self {
        Matrix3([[1.0 + bx * by, bx, 0.0], [by, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Determinant of the matrix.
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Applies the matrix to the homogeneous point `(x, y, 1)`.
    ///
    /// Returns the full homogeneous result `(u, v, w)`.
    pub fn transform_homogeneous(&self, x: f64, y: f64) -> (f64, f64, f64) {
        let m = &self.0;
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
            m[2][0] * x + m[2][1] * y + m[2][2],
        )
    }

    /// Applies the matrix to `(x, y)` and drops the homogeneous component.
    ///
    /// Affine matrices keep `w == 1`, so no perspective division is done.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (u, v, _w) = self.transform_homogeneous(x, y);
        (u, v)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let (a, b) = (&self.0, &rhs.0);
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        Matrix3(out)
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix3;
    use approx::assert_relative_eq;

    #[test]
    fn identity_is_neutral() {
        let m = Matrix3::scale(2.0, 3.0) * Matrix3::translation(4.0, -1.0);
        assert_eq!(Matrix3::identity() * m, m);
        assert_eq!(m * Matrix3::identity(), m);
        assert_eq!(Matrix3::default(), Matrix3::IDENTITY);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let m = Matrix3::scale(2.0, 2.0) * Matrix3::translation(1.0, 0.0);
        // translate then scale
        assert_eq!(m.transform_point(0.0, 0.0), (2.0, 0.0));

        let m = Matrix3::translation(1.0, 0.0) * Matrix3::scale(2.0, 2.0);
        assert_eq!(m.transform_point(0.0, 0.0), (1.0, 0.0));
    }

    #[test]
    fn rotation_keeps_center_fixed() {
        let m = Matrix3::rotation_about((3.0, 5.0), 37.0);
        let (u, v) = m.transform_point(3.0, 5.0);
        assert_relative_eq!(u, 3.0, epsilon = 1e-12);
        assert_relative_eq!(v, 5.0, epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_quarter_turn() {
        let m = Matrix3::rotation_about((0.0, 0.0), 90.0);
        let (u, v, w) = m.transform_homogeneous(1.0, 0.0);
        assert_relative_eq!(u, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v, -1.0, epsilon = 1e-12);
        assert_eq!(w, 1.0);
    }

    #[test]
    fn shear_matrix_layout() {
        let m = Matrix3::shear(0.5, 0.25);
        assert_eq!(
            m.0,
            [[1.125, 0.5, 0.0], [0.25, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }
}
