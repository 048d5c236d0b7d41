use glam::{Mat4, Vec3};
use gpu_particles::renderer::camera::{Camera, FOV_Y_DEGREES, INITIAL_POSITION, Z_FAR, Z_NEAR};

mod common;

const EPSILON: f32 = 1e-4;

#[test]
fn initial_camera_looks_at_origin() {
    let camera = Camera::new(16.0 / 9.0);

    assert_eq!(camera.position, Vec3::new(0.0, 300.0, -1500.0));
    assert_eq!(camera.yaw, 0.0);
    assert_eq!(camera.pitch, 0.0);

    let expected = Mat4::look_at_rh(INITIAL_POSITION, Vec3::ZERO, Vec3::Y);
    assert!(camera.view_matrix().abs_diff_eq(expected, EPSILON));

    // The origin sits straight ahead, down the view-space -Z axis.
    let origin_in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
    common::assert_vec3_near(origin_in_view, Vec3::new(0.0, 0.0, -INITIAL_POSITION.length()), 1e-2);
}

#[test]
fn yaw_and_pitch_rotate_the_scene_after_the_look_at() {
    let mut camera = Camera::new(1.0);
    camera.yaw = 30.0;
    camera.pitch = -20.0;
    camera.update();

    let expected = Mat4::look_at_rh(INITIAL_POSITION, Vec3::ZERO, Vec3::Y)
        * Mat4::from_rotation_x((-20.0f32).to_radians())
        * Mat4::from_rotation_y(30.0f32.to_radians());
    assert!(camera.view_matrix().abs_diff_eq(expected, EPSILON));
}

#[test]
fn view_is_only_recomputed_on_update() {
    let mut camera = Camera::new(1.0);
    let before = camera.view_matrix();

    camera.position.z += 100.0;
    assert_eq!(camera.view_matrix(), before);

    camera.update();
    assert_ne!(camera.view_matrix(), before);
}

#[test]
fn projection_follows_the_aspect_ratio() {
    let mut camera = Camera::new(4.0 / 3.0);
    let expected = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), 4.0 / 3.0, Z_NEAR, Z_FAR);
    assert!(camera.projection_matrix().abs_diff_eq(expected, EPSILON));

    camera.set_aspect(16.0 / 9.0);
    let expected = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), 16.0 / 9.0, Z_NEAR, Z_FAR);
    assert!(camera.projection_matrix().abs_diff_eq(expected, EPSILON));

    // Setting the aspect does not touch the view.
    let view = Mat4::look_at_rh(INITIAL_POSITION, Vec3::ZERO, Vec3::Y);
    assert!(camera.view_matrix().abs_diff_eq(view, EPSILON));
}

#[test]
fn view_projection_maps_the_origin_to_the_screen_center() {
    let camera = Camera::new(16.0 / 9.0);
    assert_eq!(camera.view_projection(), camera.projection_matrix() * camera.view_matrix());

    let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < EPSILON);
    assert!(ndc.y.abs() < EPSILON);
    // wgpu depth range is [0, 1].
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
