//! Matrices.

use crate::{
    angle::Angle,
    backend::{DefaultBackend, TransformBackend},
    scalar::{self, EPSILON_FLOAT},
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4x4 matrix representing an affine or projective transform.
///
/// The matrix is stored as four rows and transforms row vectors, so a point
/// `p` is mapped to `p * M` and the translation of an affine transform lives
/// in the [`w`](Self::w) row. The product `a * b` is the transform that
/// applies `a` first and then `b`.
///
/// The matrix is aligned to 16 bytes so that each row can be loaded directly
/// into a 128-bit SIMD register.
///
/// Comparison with `==` is approximate: two matrices are equal when every
/// pair of corresponding rows compares equal as [`Vector4`]s.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Zeroable, Pod)]
pub struct Matrix4x4 {
    pub x: Vector4,
    pub y: Vector4,
    pub z: Vector4,
    pub w: Vector4,
}

impl Matrix4x4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows(
        Vector4::new(1.0, 0.0, 0.0, 0.0),
        Vector4::new(0.0, 1.0, 0.0, 0.0),
        Vector4::new(0.0, 0.0, 1.0, 0.0),
        Vector4::new(0.0, 0.0, 0.0, 1.0),
    );

    /// The matrix with all zeros.
    pub const ZERO: Self = Self::from_rows(
        Vector4::ZERO,
        Vector4::ZERO,
        Vector4::ZERO,
        Vector4::ZERO,
    );

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(x: Vector4, y: Vector4, z: Vector4, w: Vector4) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a matrix from the given elements in row-major order.
    #[inline]
    pub const fn from_row_major_array(elements: [f32; 16]) -> Self {
        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            elements;
        Self::from_rows(
            Vector4::new(m00, m01, m02, m03),
            Vector4::new(m10, m11, m12, m13),
            Vector4::new(m20, m21, m22, m23),
            Vector4::new(m30, m31, m32, m33),
        )
    }

    /// Returns the elements of the matrix in row-major order.
    #[inline]
    pub fn to_row_major_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    /// Returns the element in the given row and column.
    ///
    /// # Panics
    /// If the row or column index is larger than 3.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        self[row][column]
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::from_rows(
            self.x.mapped(&mut f),
            self.y.mapped(&mut f),
            self.z.mapped(&mut f),
            self.w.mapped(&mut f),
        )
    }

    /// Whether no element is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_row_major_array().iter().all(|element| element.is_finite())
    }

    /// Whether each row of this matrix equals the corresponding row of
    /// another within [`VEC_PRECISION`](crate::VEC_PRECISION). This is the
    /// relation used by `==`.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x)
            && self.y.approx_eq(&other.y)
            && self.z.approx_eq(&other.z)
            && self.w.approx_eq(&other.w)
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        DefaultBackend::transpose(self)
    }

    /// Computes the inverse of the matrix. If the matrix is singular, the
    /// result will be non-finite.
    #[inline]
    pub fn inverted(&self) -> Self {
        DefaultBackend::inverse(self)
    }

    /// Computes the inverse of the matrix if it is invertible. Otherwise,
    /// returns [`None`].
    ///
    /// The matrix counts as singular when the magnitude of its determinant
    /// is at most [`EPSILON_FLOAT`] times the product of its row norms, so
    /// the test is independent of the overall scale of the matrix. An inverse
    /// that overflows is also rejected.
    pub fn try_inverted(&self) -> Option<Self> {
        let determinant = self.determinant();
        let row_norm_product = self.x.norm() * self.y.norm() * self.z.norm() * self.w.norm();

        if scalar::abs(determinant) <= EPSILON_FLOAT * row_norm_product {
            log::debug!(
                "Refusing to invert singular matrix (determinant {determinant}, row norm product {row_norm_product})"
            );
            return None;
        }

        let inverse = self.inverted();
        if !inverse.is_finite() {
            log::debug!("Refusing to return non-finite inverse (determinant {determinant})");
            return None;
        }
        Some(inverse)
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        DefaultBackend::determinant(self)
    }

    /// Creates a matrix translating by the given offset.
    #[inline]
    pub fn translation(translation: &Vector3) -> Self {
        DefaultBackend::translation(translation)
    }

    /// Creates a matrix rotating by the given angle about the x-axis, turning
    /// the y-axis towards the z-axis.
    #[inline]
    pub fn rotation_x<A: Angle>(angle: A) -> Self {
        DefaultBackend::rotation_x(angle.radians())
    }

    /// Creates a matrix rotating by the given angle about the y-axis, turning
    /// the z-axis towards the x-axis.
    #[inline]
    pub fn rotation_y<A: Angle>(angle: A) -> Self {
        DefaultBackend::rotation_y(angle.radians())
    }

    /// Creates a matrix rotating by the given angle about the z-axis, turning
    /// the x-axis towards the y-axis.
    #[inline]
    pub fn rotation_z<A: Angle>(angle: A) -> Self {
        DefaultBackend::rotation_z(angle.radians())
    }

    /// Same as [`Self::rotation_x`].
    #[inline]
    pub fn rotation_pitch<A: Angle>(pitch: A) -> Self {
        Self::rotation_x(pitch)
    }

    /// Same as [`Self::rotation_y`].
    #[inline]
    pub fn rotation_yaw<A: Angle>(yaw: A) -> Self {
        Self::rotation_y(yaw)
    }

    /// Same as [`Self::rotation_z`].
    #[inline]
    pub fn rotation_roll<A: Angle>(roll: A) -> Self {
        Self::rotation_z(roll)
    }

    /// Creates a matrix that rotates by `roll` about the z-axis, then by
    /// `pitch` about the x-axis and finally by `yaw` about the y-axis.
    #[inline]
    pub fn rotation_roll_pitch_yaw<A: Angle>(roll: A, pitch: A, yaw: A) -> Self {
        DefaultBackend::rotation_roll_pitch_yaw(roll.radians(), pitch.radians(), yaw.radians())
    }

    /// Creates a matrix scaling uniformly by the given factor.
    #[inline]
    pub fn scale(factor: f32) -> Self {
        Self::scale_nonuniform(&Vector3::same(factor))
    }

    /// Creates a matrix scaling each axis by the corresponding component of
    /// the given vector.
    #[inline]
    pub fn scale_nonuniform(factors: &Vector3) -> Self {
        DefaultBackend::scaling(factors)
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking
    /// towards `target`, with `up` giving the approximate upward direction.
    /// In view space the camera looks along [`Vector3::FORWARD`].
    ///
    /// The result is non-finite if `eye` equals `target` or the view
    /// direction is parallel to `up`.
    #[inline]
    pub fn look_at_rh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        DefaultBackend::look_at_rh(eye, target, up)
    }

    /// Creates a right-handed perspective projection matrix with the given
    /// vertical field of view and width-to-height aspect ratio. View-space
    /// depths from `near_z` to `far_z` are mapped to normalized depths from 0
    /// to 1.
    #[inline]
    pub fn perspective_fov_rh<A: Angle>(
        vertical_field_of_view: A,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        DefaultBackend::perspective_fov_rh(
            vertical_field_of_view.radians(),
            aspect_ratio,
            near_z,
            far_z,
        )
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Matrix4x4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    #[inline]
    fn from([x, y, z, w]: [[f32; 4]; 4]) -> Self {
        Self::from_rows(x.into(), y.into(), z.into(), w.into())
    }
}

impl From<Matrix4x4> for [[f32; 4]; 4] {
    #[inline]
    fn from(matrix: Matrix4x4) -> Self {
        [
            matrix.x.into(),
            matrix.y.into(),
            matrix.z.into(),
            matrix.w.into(),
        ]
    }
}

impl_binop!(Mul, mul, Matrix4x4, Matrix4x4, Matrix4x4, |a, b| {
    DefaultBackend::multiply(a, b)
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4x4, Matrix4x4, |a, b| {
    *a = DefaultBackend::multiply(a, b);
});

impl Index<usize> for Matrix4x4 {
    type Output = Vector4;

    /// Returns the row with the given index.
    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Matrix4x4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in [&self.x, &self.y, &self.z, &self.w].into_iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:>10.4} {:>10.4} {:>10.4} {:>10.4}]",
                row.x, row.y, row.z, row.w
            )?;
        }
        Ok(())
    }
}

impl_abs_diff_eq!(Matrix4x4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Matrix4x4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{
        angle::{Degrees, Radians},
        scalar::VEC_PRECISION,
    };
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn sample_matrix() -> Matrix4x4 {
        Matrix4x4::from_row_major_array([
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ])
    }

    prop_compose! {
        fn vector3_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    prop_compose! {
        fn matrix_strategy()(elements in prop::array::uniform16(-10.0_f32..10.0)) -> Matrix4x4 {
            Matrix4x4::from_row_major_array(elements)
        }
    }

    #[test]
    fn multiplying_with_identity_gives_same_matrix() {
        let m = sample_matrix();
        assert_eq!(&Matrix4x4::IDENTITY * &m, m);
        assert_eq!(m * Matrix4x4::IDENTITY, m);
    }

    #[test]
    fn multiplying_composes_rows() {
        let a = Matrix4x4::scale(2.0);
        let b = sample_matrix();
        assert_abs_diff_eq!(a * b, Matrix4x4::from_rows(b.x * 2.0, b.y * 2.0, b.z * 2.0, b.w));

        let mut c = a;
        c *= b;
        assert_abs_diff_eq!(c, a * b);
    }

    #[test]
    fn transposing_twice_gives_same_matrix() {
        let m = sample_matrix();
        assert_abs_diff_eq!(m.transposed().transposed(), m);
        assert_eq!(m.transposed().element(0, 3), 13.0);
    }

    #[test]
    fn zero_translation_is_identity() {
        assert_eq!(Matrix4x4::translation(&Vector3::ZERO), Matrix4x4::IDENTITY);
    }

    #[test]
    fn translating_point_adds_offset() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let t = Vector3::new(-4.0, 0.5, 10.0);
        assert_abs_diff_eq!(
            p.transform_coord(&Matrix4x4::translation(&t)),
            p + t,
            epsilon = EPSILON
        );
    }

    #[test]
    fn zero_rotations_are_identity() {
        assert_eq!(Matrix4x4::rotation_x(0.0_f32), Matrix4x4::IDENTITY);
        assert_eq!(Matrix4x4::rotation_y(Degrees(0.0)), Matrix4x4::IDENTITY);
        assert_eq!(Matrix4x4::rotation_z(Radians(0.0)), Matrix4x4::IDENTITY);
        assert_eq!(
            Matrix4x4::rotation_roll_pitch_yaw(0.0_f32, 0.0, 0.0),
            Matrix4x4::IDENTITY
        );
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let rotated = Vector3::new(1.0, 0.0, 0.0).transform_coord(&Matrix4x4::rotation_z(FRAC_PI_2));
        assert_abs_diff_eq!(rotated, Vector3::new(0.0, 1.0, 0.0), epsilon = VEC_PRECISION);
    }

    #[test]
    fn rotation_accepts_degrees_and_radians() {
        assert_abs_diff_eq!(
            Matrix4x4::rotation_y(Degrees(90.0)),
            Matrix4x4::rotation_y(FRAC_PI_2),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix4x4::rotation_x(Radians(PI)),
            Matrix4x4::rotation_x(PI),
            epsilon = EPSILON
        );
    }

    #[test]
    fn named_rotations_alias_axis_rotations() {
        let angle = 0.7_f32;
        assert_eq!(Matrix4x4::rotation_pitch(angle), Matrix4x4::rotation_x(angle));
        assert_eq!(Matrix4x4::rotation_yaw(angle), Matrix4x4::rotation_y(angle));
        assert_eq!(Matrix4x4::rotation_roll(angle), Matrix4x4::rotation_z(angle));
    }

    #[test]
    fn roll_pitch_yaw_applies_roll_then_pitch_then_yaw() {
        let (roll, pitch, yaw) = (0.3_f32, -0.8, 1.9);
        let combined = Matrix4x4::rotation_roll_pitch_yaw(roll, pitch, yaw);
        let sequential = Matrix4x4::rotation_roll(roll)
            * Matrix4x4::rotation_pitch(pitch)
            * Matrix4x4::rotation_yaw(yaw);
        assert_abs_diff_eq!(combined, sequential, epsilon = EPSILON);

        // A quarter roll turns x to y, which a quarter pitch then turns to z
        let rotated = Vector3::unit_x().transform_coord(&Matrix4x4::rotation_roll_pitch_yaw(
            FRAC_PI_2, FRAC_PI_2, 0.0,
        ));
        assert_abs_diff_eq!(rotated, Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn scaling_multiplies_components() {
        let p = Vector3::new(1.0, -2.0, 3.0);
        assert_abs_diff_eq!(p.transform_coord(&Matrix4x4::scale(2.0)), p * 2.0);
        assert_abs_diff_eq!(
            p.transform_coord(&Matrix4x4::scale_nonuniform(&Vector3::new(1.0, 0.5, -1.0))),
            Vector3::new(1.0, -1.0, -3.0)
        );
    }

    #[test]
    fn inverting_transform_gives_inverse() {
        let m = Matrix4x4::rotation_roll_pitch_yaw(0.1_f32, 0.2, 0.3)
            * Matrix4x4::translation(&Vector3::new(1.0, -2.0, 3.0))
            * Matrix4x4::scale(2.0);
        assert_abs_diff_eq!(m * m.inverted(), Matrix4x4::IDENTITY, epsilon = EPSILON);
        assert_abs_diff_eq!(m.inverted() * m, Matrix4x4::IDENTITY, epsilon = EPSILON);
        assert_abs_diff_eq!(m.determinant(), 8.0, epsilon = 1e-4);
    }

    #[test]
    fn try_inverting_singular_matrix_gives_none() {
        assert!(Matrix4x4::ZERO.try_inverted().is_none());
        assert!(sample_matrix().try_inverted().is_none());
        assert!(Matrix4x4::scale(0.0).try_inverted().is_none());
    }

    #[test]
    fn try_inverting_small_scale_transform_works() {
        let m = Matrix4x4::scale(0.004);
        let inverse = m.try_inverted().unwrap();
        assert_abs_diff_eq!(inverse, Matrix4x4::scale(250.0), epsilon = 1e-2);
        assert_abs_diff_eq!(m * inverse, Matrix4x4::IDENTITY, epsilon = EPSILON);
    }

    #[test]
    fn try_inverting_large_scale_singular_matrix_gives_none() {
        let mut m = Matrix4x4::scale(1e4);
        m.z = m.x;
        assert!(m.try_inverted().is_none());
    }

    #[test]
    fn try_inverting_invertible_matrix_works() {
        let m = Matrix4x4::translation(&Vector3::new(1.0, 2.0, 3.0));
        let inverse = m.try_inverted().unwrap();
        assert_abs_diff_eq!(
            inverse,
            Matrix4x4::translation(&Vector3::new(-1.0, -2.0, -3.0)),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverting_singular_matrix_gives_non_finite_result() {
        assert!(!Matrix4x4::ZERO.inverted().is_finite());
    }

    #[test]
    fn look_at_maps_eye_to_origin_and_target_onto_negative_z() {
        let eye = Vector3::new(3.0, 4.0, 5.0);
        let target = Vector3::new(-1.0, 0.0, 2.0);
        let view = Matrix4x4::look_at_rh(&eye, &target, &Vector3::UP);

        assert_abs_diff_eq!(eye.transform_coord(&view), Vector3::ZERO, epsilon = EPSILON);

        let target_in_view = target.transform_coord(&view);
        assert_abs_diff_eq!(target_in_view.xy(), crate::Vector2::ZERO, epsilon = EPSILON);
        assert_abs_diff_eq!(target_in_view.z, -eye.distance(&target), epsilon = EPSILON);
    }

    #[test]
    fn look_at_keeps_up_direction_upward() {
        let view = Matrix4x4::look_at_rh(&Vector3::ZERO, &Vector3::RIGHT, &Vector3::UP);
        assert_abs_diff_eq!(
            Vector3::UP.transform_normal(&view),
            Vector3::UP,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Vector3::RIGHT.transform_normal(&view),
            Vector3::FORWARD,
            epsilon = EPSILON
        );
    }

    #[test]
    fn perspective_maps_near_and_far_planes_to_zero_and_one_depth() {
        let projection = Matrix4x4::perspective_fov_rh(Degrees(60.0), 16.0 / 9.0, 0.1, 50.0);

        let near = Vector3::new(0.0, 0.0, -0.1).transform_coord(&projection);
        assert_abs_diff_eq!(near.z, 0.0, epsilon = EPSILON);

        let far = Vector3::new(0.0, 0.0, -50.0).transform_coord(&projection);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = EPSILON);

        let halfway = Vector3::new(0.0, 0.0, -25.0).transform_coord(&projection);
        assert!(halfway.z > 0.0 && halfway.z < 1.0);
    }

    #[test]
    fn matrix_equality_is_approximate() {
        let mut m = Matrix4x4::IDENTITY;
        m.x.x += 0.001;
        assert_eq!(m, Matrix4x4::IDENTITY);
        m.y.y += 0.01;
        assert_ne!(m, Matrix4x4::IDENTITY);
    }

    #[test]
    fn indexing_gives_rows() {
        let m = sample_matrix();
        assert_eq!(m[2], Vector4::new(9.0, 10.0, 11.0, 12.0));
        assert_eq!(m.element(3, 1), 14.0);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let _ = sample_matrix()[4];
    }

    #[test]
    fn row_major_array_round_trips() {
        let elements = sample_matrix().to_row_major_array();
        assert_eq!(elements[4], 5.0);
        assert_eq!(Matrix4x4::from_row_major_array(elements), sample_matrix());
    }

    proptest! {
        #[test]
        fn identity_is_neutral_for_multiplication(m in matrix_strategy()) {
            prop_assert!(approx::abs_diff_eq!(Matrix4x4::IDENTITY * m, m));
            prop_assert!(approx::abs_diff_eq!(m * Matrix4x4::IDENTITY, m));
        }

        #[test]
        fn transposing_twice_is_identity_operation(m in matrix_strategy()) {
            prop_assert!(approx::abs_diff_eq!(m.transposed().transposed(), m));
        }

        #[test]
        fn translation_moves_point_by_offset(
            p in vector3_strategy(100.0),
            t in vector3_strategy(100.0),
        ) {
            let moved = p.transform_coord(&Matrix4x4::translation(&t));
            prop_assert!(approx::abs_diff_eq!(moved, p + t, epsilon = 1e-4));
        }

        #[test]
        fn rotation_preserves_length(
            p in vector3_strategy(100.0),
            roll in -PI..PI,
            pitch in -PI..PI,
            yaw in -PI..PI,
        ) {
            let rotated = p.transform_coord(&Matrix4x4::rotation_roll_pitch_yaw(roll, pitch, yaw));
            prop_assert!(approx::relative_eq!(rotated.norm(), p.norm(), epsilon = 1e-4, max_relative = 1e-4));
        }
    }
}
