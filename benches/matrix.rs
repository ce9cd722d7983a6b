use engine_math::{
    benchmark::{benchmarks::matrix, criterion},
    define_criterion_target,
};

define_criterion_target!(matrix, mul_matrix4x4_glam);
define_criterion_target!(matrix, mul_matrix4x4_scalar);
define_criterion_target!(matrix, transpose_matrix4x4_glam);
define_criterion_target!(matrix, transpose_matrix4x4_scalar);
define_criterion_target!(matrix, invert_matrix4x4_glam);
define_criterion_target!(matrix, invert_matrix4x4_scalar);
define_criterion_target!(matrix, rotation_roll_pitch_yaw_glam);
define_criterion_target!(matrix, rotation_roll_pitch_yaw_scalar);
define_criterion_target!(matrix, look_at_rh_glam);
define_criterion_target!(matrix, look_at_rh_scalar);
define_criterion_target!(matrix, perspective_fov_rh_glam);
define_criterion_target!(matrix, perspective_fov_rh_scalar);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        mul_matrix4x4_glam,
        mul_matrix4x4_scalar,
        transpose_matrix4x4_glam,
        transpose_matrix4x4_scalar,
        invert_matrix4x4_glam,
        invert_matrix4x4_scalar,
        rotation_roll_pitch_yaw_glam,
        rotation_roll_pitch_yaw_scalar,
        look_at_rh_glam,
        look_at_rh_scalar,
        perspective_fov_rh_glam,
        perspective_fov_rh_scalar,
);
criterion::criterion_main!(benches);
