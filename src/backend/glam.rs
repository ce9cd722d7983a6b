//! Backend using the SIMD types of [`glam`].
//!
//! glam is column-major and transforms column vectors, while this crate is
//! row-major and transforms row vectors. A matrix and its glam counterpart
//! are transposes of each other, which means they share the same sixteen
//! floats in memory: row `i` here is axis `i` of the [`glam::Mat4`].

use super::TransformBackend;
use crate::{
    matrix::Matrix4x4,
    vector::{Vector3, Vector4},
};

/// Backend delegating to [`glam`]'s SIMD implementation. This is the
/// [`DefaultBackend`](super::DefaultBackend).
#[derive(Clone, Copy, Debug, Default)]
pub struct GlamBackend;

impl TransformBackend for GlamBackend {
    #[inline]
    fn multiply(lhs: &Matrix4x4, rhs: &Matrix4x4) -> Matrix4x4 {
        matrix_from_glam(&(matrix_to_glam(rhs) * matrix_to_glam(lhs)))
    }

    #[inline]
    fn transpose(matrix: &Matrix4x4) -> Matrix4x4 {
        matrix_from_glam(&matrix_to_glam(matrix).transpose())
    }

    #[inline]
    fn inverse(matrix: &Matrix4x4) -> Matrix4x4 {
        matrix_from_glam(&matrix_to_glam(matrix).inverse())
    }

    #[inline]
    fn determinant(matrix: &Matrix4x4) -> f32 {
        matrix_to_glam(matrix).determinant()
    }

    #[inline]
    fn translation(translation: &Vector3) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::from_translation(vector3_to_glam(translation).into()))
    }

    #[inline]
    fn rotation_x(angle: f32) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::from_rotation_x(angle))
    }

    #[inline]
    fn rotation_y(angle: f32) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::from_rotation_y(angle))
    }

    #[inline]
    fn rotation_z(angle: f32) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::from_rotation_z(angle))
    }

    #[inline]
    fn rotation_roll_pitch_yaw(roll: f32, pitch: f32, yaw: f32) -> Matrix4x4 {
        // Column vectors are transformed right to left
        matrix_from_glam(
            &(glam::Mat4::from_rotation_y(yaw)
                * glam::Mat4::from_rotation_x(pitch)
                * glam::Mat4::from_rotation_z(roll)),
        )
    }

    #[inline]
    fn scaling(scaling: &Vector3) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::from_scale(vector3_to_glam(scaling).into()))
    }

    #[inline]
    fn look_at_rh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::look_at_rh(
            vector3_to_glam(eye).into(),
            vector3_to_glam(target).into(),
            vector3_to_glam(up).into(),
        ))
    }

    #[inline]
    fn perspective_fov_rh(
        vertical_field_of_view: f32,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Matrix4x4 {
        matrix_from_glam(&glam::Mat4::perspective_rh(
            vertical_field_of_view,
            aspect_ratio,
            near_z,
            far_z,
        ))
    }

    #[inline]
    fn transform_coord(point: &Vector3, matrix: &Matrix4x4) -> Vector3 {
        vector3_from_glam(matrix_to_glam(matrix).project_point3a(vector3_to_glam(point)))
    }

    #[inline]
    fn transform_normal(direction: &Vector3, matrix: &Matrix4x4) -> Vector3 {
        vector3_from_glam(matrix_to_glam(matrix).transform_vector3a(vector3_to_glam(direction)))
    }
}

/// Loads the vector into a SIMD register. The fourth lane is zero.
#[inline]
pub(crate) fn vector3_to_glam(vector: &Vector3) -> glam::Vec3A {
    glam::Vec3A::new(vector.x, vector.y, vector.z)
}

/// Stores the first three lanes of the SIMD register. The fourth lane is
/// dropped.
#[inline]
pub(crate) fn vector3_from_glam(vector: glam::Vec3A) -> Vector3 {
    Vector3::new(vector.x, vector.y, vector.z)
}

#[inline]
pub(crate) fn vector4_to_glam(vector: &Vector4) -> glam::Vec4 {
    glam::Vec4::new(vector.x, vector.y, vector.z, vector.w)
}

#[inline]
pub(crate) fn vector4_from_glam(vector: glam::Vec4) -> Vector4 {
    Vector4::new(vector.x, vector.y, vector.z, vector.w)
}

/// Loads the rows of the matrix as the axes of a [`glam::Mat4`].
#[inline]
pub(crate) fn matrix_to_glam(matrix: &Matrix4x4) -> glam::Mat4 {
    glam::Mat4::from_cols(
        vector4_to_glam(&matrix.x),
        vector4_to_glam(&matrix.y),
        vector4_to_glam(&matrix.z),
        vector4_to_glam(&matrix.w),
    )
}

/// Stores the axes of a [`glam::Mat4`] as the rows of the matrix.
#[inline]
pub(crate) fn matrix_from_glam(matrix: &glam::Mat4) -> Matrix4x4 {
    Matrix4x4::from_rows(
        vector4_from_glam(matrix.x_axis),
        vector4_from_glam(matrix.y_axis),
        vector4_from_glam(matrix.z_axis),
        vector4_from_glam(matrix.w_axis),
    )
}
