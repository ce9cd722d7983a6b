//! Backends performing matrix computations.
//!
//! A [`TransformBackend`] supplies the transform primitives that the
//! [`Matrix4x4`] and [`Vector3`] operations are built on. Every backend works
//! in this crate's row-vector convention: a point `p` is transformed as
//! `p * M`, and the translation of an affine transform lives in the last row.

mod glam;
#[cfg(feature = "nalgebra")]
mod nalgebra;
mod scalar;

pub use self::glam::GlamBackend;
#[cfg(feature = "nalgebra")]
pub use self::nalgebra::NalgebraBackend;
pub use self::scalar::ScalarBackend;

use crate::{matrix::Matrix4x4, vector::Vector3};

/// The backend used by the methods on [`Matrix4x4`] and [`Vector3`].
pub type DefaultBackend = GlamBackend;

/// Transform primitives over row-major 4x4 matrices.
///
/// Angles are in radians. All functions are pure.
pub trait TransformBackend {
    /// Composes two transforms so that `lhs` is applied first.
    fn multiply(lhs: &Matrix4x4, rhs: &Matrix4x4) -> Matrix4x4;

    fn transpose(matrix: &Matrix4x4) -> Matrix4x4;

    /// Computes the general inverse of the matrix. If the matrix is not
    /// invertible, the result will be non-finite.
    fn inverse(matrix: &Matrix4x4) -> Matrix4x4;

    fn determinant(matrix: &Matrix4x4) -> f32;

    fn translation(translation: &Vector3) -> Matrix4x4;

    /// Rotation about the x-axis, turning y towards z.
    fn rotation_x(angle: f32) -> Matrix4x4;

    /// Rotation about the y-axis, turning z towards x.
    fn rotation_y(angle: f32) -> Matrix4x4;

    /// Rotation about the z-axis, turning x towards y.
    fn rotation_z(angle: f32) -> Matrix4x4;

    /// Rotation applying the roll about z first, then the pitch about x,
    /// then the yaw about y.
    fn rotation_roll_pitch_yaw(roll: f32, pitch: f32, yaw: f32) -> Matrix4x4 {
        Self::multiply(
            &Self::multiply(&Self::rotation_z(roll), &Self::rotation_x(pitch)),
            &Self::rotation_y(yaw),
        )
    }

    /// Scaling by the given factor along each axis.
    fn scaling(scaling: &Vector3) -> Matrix4x4;

    /// Right-handed view transform for a camera at `eye` looking at `target`.
    /// The camera looks along its negative z-axis.
    fn look_at_rh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Matrix4x4;

    /// Right-handed perspective projection mapping view depths from `near_z`
    /// to `far_z` onto the range from 0 to 1.
    fn perspective_fov_rh(
        vertical_field_of_view: f32,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Matrix4x4;

    /// Transforms a point with `w = 1` and divides the result by its
    /// w-component.
    fn transform_coord(point: &Vector3, matrix: &Matrix4x4) -> Vector3;

    /// Transforms a direction with `w = 0`.
    fn transform_normal(direction: &Vector3, matrix: &Matrix4x4) -> Vector3;
}

/// Identifies one of the available backends, for selecting a backend at
/// runtime.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// [`GlamBackend`]
    #[default]
    Glam,
    /// [`ScalarBackend`]
    Scalar,
    /// [`NalgebraBackend`]
    #[cfg(feature = "nalgebra")]
    Nalgebra,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glam => "glam",
            Self::Scalar => "scalar",
            #[cfg(feature = "nalgebra")]
            Self::Nalgebra => "nalgebra",
        }
    }
}
