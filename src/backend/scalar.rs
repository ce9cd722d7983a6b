//! Backend computing everything with plain scalar arithmetic.

use super::TransformBackend;
use crate::{
    matrix::Matrix4x4,
    scalar,
    vector::{Vector3, Vector4},
};

/// Backend evaluating each transform formula element by element, without
/// SIMD. Serves as a portable reference for the other backends.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl TransformBackend for ScalarBackend {
    fn multiply(lhs: &Matrix4x4, rhs: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4::from_rows(
            row_times_matrix(&lhs.x, rhs),
            row_times_matrix(&lhs.y, rhs),
            row_times_matrix(&lhs.z, rhs),
            row_times_matrix(&lhs.w, rhs),
        )
    }

    fn transpose(matrix: &Matrix4x4) -> Matrix4x4 {
        let m = matrix.to_row_major_array();
        Matrix4x4::from_row_major_array(std::array::from_fn(|idx| m[(idx % 4) * 4 + idx / 4]))
    }

    fn inverse(matrix: &Matrix4x4) -> Matrix4x4 {
        let [a00, a01, a02, a03] = <[f32; 4]>::from(matrix.x);
        let [a10, a11, a12, a13] = <[f32; 4]>::from(matrix.y);
        let [a20, a21, a22, a23] = <[f32; 4]>::from(matrix.z);
        let [a30, a31, a32, a33] = <[f32; 4]>::from(matrix.w);

        // 2x2 minors of the upper and lower row pairs
        let s0 = a00 * a11 - a10 * a01;
        let s1 = a00 * a12 - a10 * a02;
        let s2 = a00 * a13 - a10 * a03;
        let s3 = a01 * a12 - a11 * a02;
        let s4 = a01 * a13 - a11 * a03;
        let s5 = a02 * a13 - a12 * a03;

        let c5 = a22 * a33 - a32 * a23;
        let c4 = a21 * a33 - a31 * a23;
        let c3 = a21 * a32 - a31 * a22;
        let c2 = a20 * a33 - a30 * a23;
        let c1 = a20 * a32 - a30 * a22;
        let c0 = a20 * a31 - a30 * a21;

        let determinant = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        let inverse_determinant = 1.0 / determinant;

        let adjugate = Matrix4x4::from_rows(
            Vector4::new(
                a11 * c5 - a12 * c4 + a13 * c3,
                -a01 * c5 + a02 * c4 - a03 * c3,
                a31 * s5 - a32 * s4 + a33 * s3,
                -a21 * s5 + a22 * s4 - a23 * s3,
            ),
            Vector4::new(
                -a10 * c5 + a12 * c2 - a13 * c1,
                a00 * c5 - a02 * c2 + a03 * c1,
                -a30 * s5 + a32 * s2 - a33 * s1,
                a20 * s5 - a22 * s2 + a23 * s1,
            ),
            Vector4::new(
                a10 * c4 - a11 * c2 + a13 * c0,
                -a00 * c4 + a01 * c2 - a03 * c0,
                a30 * s4 - a31 * s2 + a33 * s0,
                -a20 * s4 + a21 * s2 - a23 * s0,
            ),
            Vector4::new(
                -a10 * c3 + a11 * c1 - a12 * c0,
                a00 * c3 - a01 * c1 + a02 * c0,
                -a30 * s3 + a31 * s1 - a32 * s0,
                a20 * s3 - a21 * s1 + a22 * s0,
            ),
        );

        adjugate.mapped(|element| element * inverse_determinant)
    }

    fn determinant(matrix: &Matrix4x4) -> f32 {
        let [a00, a01, a02, a03] = <[f32; 4]>::from(matrix.x);
        let [a10, a11, a12, a13] = <[f32; 4]>::from(matrix.y);
        let [a20, a21, a22, a23] = <[f32; 4]>::from(matrix.z);
        let [a30, a31, a32, a33] = <[f32; 4]>::from(matrix.w);

        (a00 * a11 - a10 * a01) * (a22 * a33 - a32 * a23)
            - (a00 * a12 - a10 * a02) * (a21 * a33 - a31 * a23)
            + (a00 * a13 - a10 * a03) * (a21 * a32 - a31 * a22)
            + (a01 * a12 - a11 * a02) * (a20 * a33 - a30 * a23)
            - (a01 * a13 - a11 * a03) * (a20 * a32 - a30 * a22)
            + (a02 * a13 - a12 * a03) * (a20 * a31 - a30 * a21)
    }

    fn translation(translation: &Vector3) -> Matrix4x4 {
        let mut matrix = Matrix4x4::IDENTITY;
        matrix.w = translation.extended(1.0);
        matrix
    }

    fn rotation_x(angle: f32) -> Matrix4x4 {
        let (sin, cos) = (scalar::sin(angle), scalar::cos(angle));
        Matrix4x4::from_rows(
            Vector4::unit_x(),
            Vector4::new(0.0, cos, sin, 0.0),
            Vector4::new(0.0, -sin, cos, 0.0),
            Vector4::unit_w(),
        )
    }

    fn rotation_y(angle: f32) -> Matrix4x4 {
        let (sin, cos) = (scalar::sin(angle), scalar::cos(angle));
        Matrix4x4::from_rows(
            Vector4::new(cos, 0.0, -sin, 0.0),
            Vector4::unit_y(),
            Vector4::new(sin, 0.0, cos, 0.0),
            Vector4::unit_w(),
        )
    }

    fn rotation_z(angle: f32) -> Matrix4x4 {
        let (sin, cos) = (scalar::sin(angle), scalar::cos(angle));
        Matrix4x4::from_rows(
            Vector4::new(cos, sin, 0.0, 0.0),
            Vector4::new(-sin, cos, 0.0, 0.0),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    fn scaling(scaling: &Vector3) -> Matrix4x4 {
        Matrix4x4::from_rows(
            Vector4::unit_x() * scaling.x,
            Vector4::unit_y() * scaling.y,
            Vector4::unit_z() * scaling.z,
            Vector4::unit_w(),
        )
    }

    fn look_at_rh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Matrix4x4 {
        // The camera axes, with the camera looking along -z
        let backward = (eye - target).normalized();
        let right = up.cross(&backward).normalized();
        let camera_up = backward.cross(&right);

        Matrix4x4::from_rows(
            Vector4::new(right.x, camera_up.x, backward.x, 0.0),
            Vector4::new(right.y, camera_up.y, backward.y, 0.0),
            Vector4::new(right.z, camera_up.z, backward.z, 0.0),
            Vector4::new(
                -right.dot(eye),
                -camera_up.dot(eye),
                -backward.dot(eye),
                1.0,
            ),
        )
    }

    fn perspective_fov_rh(
        vertical_field_of_view: f32,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Matrix4x4 {
        let half_angle = 0.5 * vertical_field_of_view;
        let y_scale = scalar::cos(half_angle) / scalar::sin(half_angle);
        let x_scale = y_scale / aspect_ratio;
        let depth_scale = far_z / (near_z - far_z);

        Matrix4x4::from_rows(
            Vector4::new(x_scale, 0.0, 0.0, 0.0),
            Vector4::new(0.0, y_scale, 0.0, 0.0),
            Vector4::new(0.0, 0.0, depth_scale, -1.0),
            Vector4::new(0.0, 0.0, depth_scale * near_z, 0.0),
        )
    }

    fn transform_coord(point: &Vector3, matrix: &Matrix4x4) -> Vector3 {
        let transformed = row_times_matrix(&point.extended(1.0), matrix);
        transformed.xyz() / transformed.w
    }

    fn transform_normal(direction: &Vector3, matrix: &Matrix4x4) -> Vector3 {
        row_times_matrix(&direction.extended(0.0), matrix).xyz()
    }
}

fn row_times_matrix(row: &Vector4, matrix: &Matrix4x4) -> Vector4 {
    matrix.x * row.x + matrix.y * row.y + matrix.z * row.z + matrix.w * row.w
}
