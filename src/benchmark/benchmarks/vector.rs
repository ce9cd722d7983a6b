use crate::{
    backend::{GlamBackend, ScalarBackend, TransformBackend},
    benchmark::Benchmarker,
    matrix::Matrix4x4,
    vector::Vector3,
};

pub fn dot_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_other_vector3();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn cross_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_other_vector3();
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn normalize_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn transform_coord_vector3_glam(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let m = create_matrix4x4();
    benchmarker.benchmark(&mut || GlamBackend::transform_coord(&a, &m));
}

pub fn transform_coord_vector3_scalar(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let m = create_matrix4x4();
    benchmarker.benchmark(&mut || ScalarBackend::transform_coord(&a, &m));
}

pub fn transform_normal_vector3_glam(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let m = create_matrix4x4();
    benchmarker.benchmark(&mut || GlamBackend::transform_normal(&a, &m));
}

pub fn transform_normal_vector3_scalar(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let m = create_matrix4x4();
    benchmarker.benchmark(&mut || ScalarBackend::transform_normal(&a, &m));
}

fn create_vector3() -> Vector3 {
    Vector3::new(1.0, 2.0, 3.0)
}

fn create_other_vector3() -> Vector3 {
    Vector3::new(-4.0, 0.5, 2.0)
}

fn create_matrix4x4() -> Matrix4x4 {
    Matrix4x4::rotation_roll_pitch_yaw(0.1_f32, 0.2, 0.3)
        * Matrix4x4::translation(&Vector3::new(1.0, 2.0, 3.0))
}
