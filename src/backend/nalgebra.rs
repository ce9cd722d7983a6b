//! Backend using the matrix types of [`nalgebra`].
//!
//! nalgebra transforms column vectors, so a matrix here corresponds to the
//! transpose of its nalgebra counterpart. Since nalgebra stores matrices in
//! column-major order, both still share the same sixteen floats in memory.

use super::TransformBackend;
use crate::{matrix::Matrix4x4, scalar, vector::Vector3};
use nalgebra::{Matrix4, Point3, Vector3 as NVector3, Vector4 as NVector4};

/// Backend delegating to [`nalgebra`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NalgebraBackend;

impl TransformBackend for NalgebraBackend {
    fn multiply(lhs: &Matrix4x4, rhs: &Matrix4x4) -> Matrix4x4 {
        matrix_from_nalgebra(&(matrix_to_nalgebra(rhs) * matrix_to_nalgebra(lhs)))
    }

    fn transpose(matrix: &Matrix4x4) -> Matrix4x4 {
        matrix_from_nalgebra(&matrix_to_nalgebra(matrix).transpose())
    }

    fn inverse(matrix: &Matrix4x4) -> Matrix4x4 {
        match matrix_to_nalgebra(matrix).try_inverse() {
            Some(inverse) => matrix_from_nalgebra(&inverse),
            None => Matrix4x4::from_row_major_array([f32::NAN; 16]),
        }
    }

    fn determinant(matrix: &Matrix4x4) -> f32 {
        matrix_to_nalgebra(matrix).determinant()
    }

    fn translation(translation: &Vector3) -> Matrix4x4 {
        matrix_from_nalgebra(&Matrix4::new_translation(&vector3_to_nalgebra(
            translation,
        )))
    }

    fn rotation_x(angle: f32) -> Matrix4x4 {
        matrix_from_nalgebra(&Matrix4::from_axis_angle(&NVector3::x_axis(), angle))
    }

    fn rotation_y(angle: f32) -> Matrix4x4 {
        matrix_from_nalgebra(&Matrix4::from_axis_angle(&NVector3::y_axis(), angle))
    }

    fn rotation_z(angle: f32) -> Matrix4x4 {
        matrix_from_nalgebra(&Matrix4::from_axis_angle(&NVector3::z_axis(), angle))
    }

    fn scaling(scaling: &Vector3) -> Matrix4x4 {
        matrix_from_nalgebra(&Matrix4::new_nonuniform_scaling(&vector3_to_nalgebra(
            scaling,
        )))
    }

    fn look_at_rh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Matrix4x4 {
        matrix_from_nalgebra(&Matrix4::look_at_rh(
            &Point3::from(vector3_to_nalgebra(eye)),
            &Point3::from(vector3_to_nalgebra(target)),
            &vector3_to_nalgebra(up),
        ))
    }

    fn perspective_fov_rh(
        vertical_field_of_view: f32,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Matrix4x4 {
        // `nalgebra::Perspective3` maps depth onto [-1, 1], so the matrix is
        // assembled directly for the [0, 1] depth range
        let half_angle = 0.5 * vertical_field_of_view;
        let y_scale = scalar::cos(half_angle) / scalar::sin(half_angle);
        let x_scale = y_scale / aspect_ratio;
        let depth_scale = far_z / (near_z - far_z);

        #[rustfmt::skip]
        let projection = Matrix4::new(
            x_scale, 0.0,     0.0,         0.0,
            0.0,     y_scale, 0.0,         0.0,
            0.0,     0.0,     depth_scale, depth_scale * near_z,
            0.0,     0.0,     -1.0,        0.0,
        );
        matrix_from_nalgebra(&projection)
    }

    fn transform_coord(point: &Vector3, matrix: &Matrix4x4) -> Vector3 {
        let transformed =
            matrix_to_nalgebra(matrix) * NVector4::new(point.x, point.y, point.z, 1.0);
        Vector3::new(
            transformed.x / transformed.w,
            transformed.y / transformed.w,
            transformed.z / transformed.w,
        )
    }

    fn transform_normal(direction: &Vector3, matrix: &Matrix4x4) -> Vector3 {
        let transformed = matrix_to_nalgebra(matrix)
            * NVector4::new(direction.x, direction.y, direction.z, 0.0);
        Vector3::new(transformed.x, transformed.y, transformed.z)
    }
}

fn vector3_to_nalgebra(vector: &Vector3) -> NVector3<f32> {
    NVector3::new(vector.x, vector.y, vector.z)
}

/// Each row of the matrix becomes a column of the nalgebra matrix.
fn matrix_to_nalgebra(matrix: &Matrix4x4) -> Matrix4<f32> {
    Matrix4::from_column_slice(&matrix.to_row_major_array())
}

fn matrix_from_nalgebra(matrix: &Matrix4<f32>) -> Matrix4x4 {
    let mut elements = [0.0; 16];
    elements.copy_from_slice(matrix.as_slice());
    Matrix4x4::from_row_major_array(elements)
}
