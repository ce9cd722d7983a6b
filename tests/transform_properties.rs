//! Transform pipeline tests.

use approx::assert_abs_diff_eq;
use engine_math::{
    Matrix4x4, Vector3, Vector4,
    angle::Degrees,
    backend::{ScalarBackend, TransformBackend},
};
use proptest::prelude::*;
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-4;

struct Camera {
    view: Matrix4x4,
    projection: Matrix4x4,
}

impl Camera {
    fn new(eye: Vector3, target: Vector3) -> Self {
        Self {
            view: Matrix4x4::look_at_rh(&eye, &target, &Vector3::UP),
            projection: Matrix4x4::perspective_fov_rh(Degrees(90.0), 1.0, 1.0, 101.0),
        }
    }

    fn view_projection(&self) -> Matrix4x4 {
        self.view * self.projection
    }
}

prop_compose! {
    fn point_in_front_of_origin_camera()(
        depth in 1.5_f32..100.0,
        horizontal in -0.95_f32..0.95,
        vertical in -0.95_f32..0.95,
    ) -> Vector3 {
        // A 90 degree field of view spans [-depth, depth] at the given depth
        Vector3::new(horizontal * depth, vertical * depth, -depth)
    }
}

#[test]
fn object_to_clip_pipeline_composes_in_application_order() {
    let model = Matrix4x4::scale(2.0)
        * Matrix4x4::rotation_y(Degrees(90.0))
        * Matrix4x4::translation(&Vector3::new(0.0, 0.0, -10.0));
    let camera = Camera::new(Vector3::ZERO, Vector3::FORWARD);

    // Scaled to (2, 0, 0), turned onto -z and moved ten units further back
    let world = Vector3::unit_x().transform_coord(&model);
    assert_abs_diff_eq!(world, Vector3::new(0.0, 0.0, -12.0), epsilon = EPSILON);

    let model_view_projection = model * camera.view_projection();
    let step_by_step = world
        .transform_coord(&camera.view)
        .transform_coord(&camera.projection);
    assert_abs_diff_eq!(
        Vector3::unit_x().transform_coord(&model_view_projection),
        step_by_step,
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(step_by_step.x, 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(step_by_step.y, 0.0, epsilon = EPSILON);
}

#[test]
fn camera_looking_sideways_sees_point_ahead_at_screen_center() {
    let camera = Camera::new(Vector3::new(5.0, 1.0, 0.0), Vector3::new(5.0, 1.0, 0.0) + Vector3::RIGHT);
    let ahead = Vector3::new(25.0, 1.0, 0.0).transform_coord(&camera.view_projection());
    assert_abs_diff_eq!(ahead.x, 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(ahead.y, 0.0, epsilon = EPSILON);
    assert!(ahead.z > 0.0 && ahead.z < 1.0);
}

#[test]
fn view_inverse_restores_camera_position() {
    let eye = Vector3::new(-3.0, 7.0, 2.0);
    let camera = Camera::new(eye, Vector3::ZERO);
    let camera_to_world = camera.view.inverted();

    assert_abs_diff_eq!(Vector3::ZERO.transform_coord(&camera_to_world), eye, epsilon = EPSILON);
    assert_abs_diff_eq!(
        Vector3::FORWARD.transform_normal(&camera_to_world),
        (-eye).normalized(),
        epsilon = EPSILON
    );
}

#[test]
fn library_matches_scalar_backend() {
    let eye = Vector3::new(1.0, 2.0, 3.0);
    let target = Vector3::new(-2.0, 0.0, -4.0);

    assert_abs_diff_eq!(
        Matrix4x4::look_at_rh(&eye, &target, &Vector3::UP),
        ScalarBackend::look_at_rh(&eye, &target, &Vector3::UP),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Matrix4x4::perspective_fov_rh(FRAC_PI_2, 1.5, 0.5, 20.0),
        ScalarBackend::perspective_fov_rh(FRAC_PI_2, 1.5, 0.5, 20.0),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        Matrix4x4::rotation_roll_pitch_yaw(0.4_f32, -0.2, 1.1),
        ScalarBackend::rotation_roll_pitch_yaw(0.4, -0.2, 1.1),
        epsilon = EPSILON
    );
}

#[test]
fn transposed_projection_moves_depth_term_into_last_column() {
    let projection = Matrix4x4::perspective_fov_rh(FRAC_PI_2, 1.0, 1.0, 101.0);
    let transposed = projection.transposed();
    assert_eq!(transposed.element(2, 3), projection.element(3, 2));
    assert_eq!(transposed.w, Vector4::new(0.0, 0.0, -1.0, 0.0));
}

proptest! {
    #[test]
    fn points_inside_frustum_project_into_unit_cube(point in point_in_front_of_origin_camera()) {
        let camera = Camera::new(Vector3::ZERO, Vector3::FORWARD);
        let projected = point.transform_coord(&camera.view_projection());

        prop_assert!(projected.x.abs() <= 1.0 + EPSILON);
        prop_assert!(projected.y.abs() <= 1.0 + EPSILON);
        prop_assert!(projected.z >= -EPSILON && projected.z <= 1.0 + EPSILON);
    }

    #[test]
    fn deeper_points_get_larger_depth(
        near_depth in 1.5_f32..50.0,
        extra_depth in 1.0_f32..50.0,
    ) {
        let camera = Camera::new(Vector3::ZERO, Vector3::FORWARD);
        let near = Vector3::new(0.0, 0.0, -near_depth).transform_coord(&camera.projection);
        let far = Vector3::new(0.0, 0.0, -(near_depth + extra_depth)).transform_coord(&camera.projection);
        prop_assert!(far.z > near.z);
    }
}
