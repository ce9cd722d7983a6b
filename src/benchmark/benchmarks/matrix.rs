use crate::{
    backend::{GlamBackend, ScalarBackend, TransformBackend},
    benchmark::Benchmarker,
    matrix::Matrix4x4,
    vector::Vector3,
};
use std::f32::consts::FRAC_PI_3;

pub fn mul_matrix4x4_glam(benchmarker: impl Benchmarker) {
    mul_matrix4x4::<GlamBackend>(benchmarker);
}

pub fn mul_matrix4x4_scalar(benchmarker: impl Benchmarker) {
    mul_matrix4x4::<ScalarBackend>(benchmarker);
}

pub fn transpose_matrix4x4_glam(benchmarker: impl Benchmarker) {
    transpose_matrix4x4::<GlamBackend>(benchmarker);
}

pub fn transpose_matrix4x4_scalar(benchmarker: impl Benchmarker) {
    transpose_matrix4x4::<ScalarBackend>(benchmarker);
}

pub fn invert_matrix4x4_glam(benchmarker: impl Benchmarker) {
    invert_matrix4x4::<GlamBackend>(benchmarker);
}

pub fn invert_matrix4x4_scalar(benchmarker: impl Benchmarker) {
    invert_matrix4x4::<ScalarBackend>(benchmarker);
}

pub fn rotation_roll_pitch_yaw_glam(benchmarker: impl Benchmarker) {
    rotation_roll_pitch_yaw::<GlamBackend>(benchmarker);
}

pub fn rotation_roll_pitch_yaw_scalar(benchmarker: impl Benchmarker) {
    rotation_roll_pitch_yaw::<ScalarBackend>(benchmarker);
}

pub fn look_at_rh_glam(benchmarker: impl Benchmarker) {
    look_at_rh::<GlamBackend>(benchmarker);
}

pub fn look_at_rh_scalar(benchmarker: impl Benchmarker) {
    look_at_rh::<ScalarBackend>(benchmarker);
}

pub fn perspective_fov_rh_glam(benchmarker: impl Benchmarker) {
    perspective_fov_rh::<GlamBackend>(benchmarker);
}

pub fn perspective_fov_rh_scalar(benchmarker: impl Benchmarker) {
    perspective_fov_rh::<ScalarBackend>(benchmarker);
}

fn mul_matrix4x4<B: TransformBackend>(benchmarker: impl Benchmarker) {
    let a = create_matrix4x4();
    let b = create_other_matrix4x4();
    benchmarker.benchmark(&mut || B::multiply(&a, &b));
}

fn transpose_matrix4x4<B: TransformBackend>(benchmarker: impl Benchmarker) {
    let a = create_matrix4x4();
    benchmarker.benchmark(&mut || B::transpose(&a));
}

fn invert_matrix4x4<B: TransformBackend>(benchmarker: impl Benchmarker) {
    let a = create_matrix4x4();
    benchmarker.benchmark(&mut || B::inverse(&a));
}

fn rotation_roll_pitch_yaw<B: TransformBackend>(benchmarker: impl Benchmarker) {
    let (roll, pitch, yaw) = (0.1, 0.2, 0.3);
    benchmarker.benchmark(&mut || B::rotation_roll_pitch_yaw(roll, pitch, yaw));
}

fn look_at_rh<B: TransformBackend>(benchmarker: impl Benchmarker) {
    let eye = Vector3::new(0.0, 2.0, 5.0);
    let target = Vector3::ZERO;
    benchmarker.benchmark(&mut || B::look_at_rh(&eye, &target, &Vector3::UP));
}

fn perspective_fov_rh<B: TransformBackend>(benchmarker: impl Benchmarker) {
    benchmarker.benchmark(&mut || B::perspective_fov_rh(FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0));
}

fn create_matrix4x4() -> Matrix4x4 {
    Matrix4x4::rotation_roll_pitch_yaw(0.1_f32, 0.2, 0.3)
        * Matrix4x4::translation(&Vector3::new(1.0, 2.0, 3.0))
}

fn create_other_matrix4x4() -> Matrix4x4 {
    Matrix4x4::scale_nonuniform(&Vector3::new(2.0, 1.0, 0.5))
        * Matrix4x4::look_at_rh(&Vector3::new(0.0, 2.0, 5.0), &Vector3::ZERO, &Vector3::UP)
}
