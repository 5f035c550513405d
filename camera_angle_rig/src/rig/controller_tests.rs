/// Tests for CameraAngleController
///
/// Covers per-camera property storage, parameter handlers, notices for
/// invalid input or missing selection, and the panel state.

use super::*;
use crate::rig::notice::NoticeSeverity;
use crate::camera::ViewSlot;
use crate::scene::{ObjectKind, Transform};
use glam::{Quat, Vec3};

const EPSILON: f32 = 1e-4;

fn controller() -> CameraAngleController {
    CameraAngleController::new(RigConfig::default()).unwrap()
}

/// Scene with an active camera at (0, -5, 0) looking along +Y
fn scene_with_active_camera() -> (Scene, ObjectKey) {
    let mut scene = Scene::new();
    let rotation = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    let camera = scene.create_camera(
        "Camera",
        Transform::from_translation_rotation(Vec3::new(0.0, -5.0, 0.0), rotation),
    );
    scene.set_active(Some(camera)).unwrap();
    (scene, camera)
}

fn camera_offset_from_anchor(scene: &Scene, camera: ObjectKey) -> Vec3 {
    let anchor = RigCoordinator::find_anchor(scene, camera).unwrap().unwrap();
    scene.world_translation(camera).unwrap() - scene.world_translation(anchor).unwrap()
}

// ============================================================================
// Construction / properties
// ============================================================================

#[test]
fn test_new_rejects_invalid_config() {
    let config = RigConfig { min_distance: 0.0, ..Default::default() };
    assert!(CameraAngleController::new(config).is_err());
}

#[test]
fn test_properties_default_from_config() {
    let (_, camera) = scene_with_active_camera();
    let ctrl = controller();

    let props = ctrl.properties(camera);
    assert_eq!(props.projection(), ProjectionType::Isometric);
    assert_eq!(props.slot(), ViewSlot::DEFAULT);
    assert_eq!(props.distance(), 1.0);
}

#[test]
fn test_set_properties_and_forget_camera() {
    let (_, camera) = scene_with_active_camera();
    let mut ctrl = controller();
    let props = CameraAngleProperties::new(
        ProjectionType::Dimetric,
        ViewSlot::new(5, 3).unwrap(),
        2.5,
    )
    .unwrap();

    ctrl.set_properties(camera, props);
    assert_eq!(ctrl.properties(camera), props);

    assert!(ctrl.forget_camera(camera));
    assert!(!ctrl.forget_camera(camera));
    assert_eq!(ctrl.properties(camera).projection(), ProjectionType::Isometric);
}

// ============================================================================
// create_target
// ============================================================================

#[test]
fn test_create_target_without_selection_is_error_notice() {
    let mut scene = Scene::new();
    let mut ctrl = controller();

    let notice = ctrl.create_target(&mut scene);
    assert_eq!(notice.severity, NoticeSeverity::Error);
    assert_eq!(notice.message, "Select a camera first");
    assert_eq!(scene.object_count(), 0);
}

#[test]
fn test_create_target_with_non_camera_selected_is_error_notice() {
    let mut scene = Scene::new();
    let mesh = scene.create_object("Cube", ObjectKind::Mesh, Transform::IDENTITY);
    scene.set_active(Some(mesh)).unwrap();

    let notice = controller().create_target(&mut scene);
    assert!(notice.is_error());
    assert_eq!(scene.object_count(), 1);
}

#[test]
fn test_create_target_anchors_and_places_camera() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();

    let notice = ctrl.create_target(&mut scene);
    assert_eq!(notice, Notice::info("Camera target created"));

    let anchor = RigCoordinator::find_anchor(&scene, camera).unwrap().unwrap();
    assert_eq!(scene.get(anchor).unwrap().name(), "Camera_Target");

    // Default isometric (2, 2) at distance 1
    let expected = Vec3::splat(1.0 / 3.0_f32.sqrt());
    assert!(camera_offset_from_anchor(&scene, camera).abs_diff_eq(expected, EPSILON));
}

#[test]
fn test_create_target_twice_reuses_anchor() {
    let (mut scene, _) = scene_with_active_camera();
    let mut ctrl = controller();

    ctrl.create_target(&mut scene);
    let count = scene.object_count();
    let notice = ctrl.create_target(&mut scene);

    assert_eq!(notice.severity, NoticeSeverity::Info);
    assert_eq!(scene.object_count(), count);
}

// ============================================================================
// Parameter handlers
// ============================================================================

fn unit_offset(azimuth_degrees: f32, elevation_degrees: f32) -> Vec3 {
    let (sin_h, cos_h) = azimuth_degrees.to_radians().sin_cos();
    let (sin_v, cos_v) = elevation_degrees.to_radians().sin_cos();
    Vec3::new(cos_v * cos_h, cos_v * sin_h, sin_v)
}

#[test]
fn test_set_horizontal_slot_moves_camera() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();
    ctrl.create_target(&mut scene);

    // Isometric slot 1 sits on the +X axis, 35.264 degrees up
    assert_eq!(ctrl.set_horizontal_slot(&mut scene, 1), None);
    assert_eq!(ctrl.properties(camera).slot().horizontal(), 1);

    let offset = camera_offset_from_anchor(&scene, camera);
    assert!(offset.abs_diff_eq(unit_offset(0.0, 35.264), EPSILON), "got {:?}", offset);

    // Slot 3 is a quarter turn further
    assert_eq!(ctrl.set_horizontal_slot(&mut scene, 3), None);
    let offset = camera_offset_from_anchor(&scene, camera);
    assert!(offset.abs_diff_eq(unit_offset(90.0, 35.264), EPSILON), "got {:?}", offset);
}

#[test]
fn test_trimetric_horizontal_slots_alternate_offsets() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();
    assert_eq!(ctrl.set_projection_type(&mut scene, ProjectionType::Trimetric), None);

    // Even steps add 15 degrees, odd steps add 30
    for (horizontal, azimuth) in [(1, 15.0), (2, 75.0), (3, 105.0), (8, 345.0)] {
        assert_eq!(ctrl.set_horizontal_slot(&mut scene, horizontal), None);
        let offset = camera_offset_from_anchor(&scene, camera);
        assert!(
            offset.abs_diff_eq(unit_offset(azimuth, 45.0), EPSILON),
            "slot {} got {:?}",
            horizontal,
            offset
        );
    }

    // Switching back keeps the slot and drops the offset
    assert_eq!(ctrl.set_projection_type(&mut scene, ProjectionType::Isometric), None);
    let offset = camera_offset_from_anchor(&scene, camera);
    assert!(offset.abs_diff_eq(unit_offset(315.0, 35.264), EPSILON), "got {:?}", offset);
}

#[test]
fn test_set_vertical_slot_middle_row_is_horizon() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();

    assert_eq!(ctrl.set_vertical_slot(&mut scene, 3), None);
    let offset = camera_offset_from_anchor(&scene, camera);
    assert!(offset.z.abs() < EPSILON);
    assert!((offset.length() - 1.0).abs() < EPSILON);
}

#[test]
fn test_set_distance_scales_offset() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();
    ctrl.create_target(&mut scene);

    assert_eq!(ctrl.set_distance(&mut scene, 3.0), None);
    let offset = camera_offset_from_anchor(&scene, camera);
    assert!((offset.length() - 3.0).abs() < EPSILON);
}

#[test]
fn test_set_distance_clamps_to_range() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();

    assert_eq!(ctrl.set_distance(&mut scene, 50.0), None);
    assert_eq!(ctrl.properties(camera).distance(), 5.0);

    assert_eq!(ctrl.set_distance(&mut scene, 0.01), None);
    assert_eq!(ctrl.properties(camera).distance(), 0.1);
}

#[test]
fn test_invalid_values_give_error_notice_and_keep_properties() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();
    ctrl.create_target(&mut scene);
    let before = ctrl.properties(camera);
    let position = scene.world_translation(camera).unwrap();

    for notice in [
        ctrl.set_horizontal_slot(&mut scene, 9),
        ctrl.set_vertical_slot(&mut scene, 0),
        ctrl.set_distance(&mut scene, -1.0),
        ctrl.set_distance(&mut scene, f32::NAN),
    ] {
        let notice = notice.unwrap();
        assert_eq!(notice.severity, NoticeSeverity::Error);
    }

    assert_eq!(ctrl.properties(camera), before);
    assert!(scene.world_translation(camera).unwrap().abs_diff_eq(position, EPSILON));
}

#[test]
fn test_parameter_change_without_selection_is_warning() {
    let mut scene = Scene::new();
    let mut ctrl = controller();

    let notice = ctrl.set_projection_type(&mut scene, ProjectionType::Dimetric).unwrap();
    assert_eq!(notice.severity, NoticeSeverity::Warning);
    assert_eq!(notice.message, "Select a camera first");
}

#[test]
fn test_handle_dispatches_changes() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();

    assert_eq!(ctrl.handle(&mut scene, ParameterChange::Projection(ProjectionType::Trimetric)), None);
    assert_eq!(ctrl.handle(&mut scene, ParameterChange::HorizontalSlot(4)), None);
    assert_eq!(ctrl.handle(&mut scene, ParameterChange::VerticalSlot(5)), None);
    assert_eq!(ctrl.handle(&mut scene, ParameterChange::Distance(2.0)), None);

    let props = ctrl.properties(camera);
    assert_eq!(props.projection(), ProjectionType::Trimetric);
    assert_eq!(props.slot(), ViewSlot::new(4, 5).unwrap());
    assert_eq!(props.distance(), 2.0);

    // Bottom row sits just above the nadir
    let offset = camera_offset_from_anchor(&scene, camera);
    assert!(offset.z < -1.99);
}

#[test]
fn test_properties_are_per_camera() {
    let (mut scene, first) = scene_with_active_camera();
    let second = scene.create_camera("Camera.001", Transform::from_translation(Vec3::new(3.0, 0.0, 0.0)));
    let mut ctrl = controller();

    ctrl.set_horizontal_slot(&mut scene, 6);
    scene.set_active(Some(second)).unwrap();
    ctrl.set_horizontal_slot(&mut scene, 3);

    assert_eq!(ctrl.properties(first).slot().horizontal(), 6);
    assert_eq!(ctrl.properties(second).slot().horizontal(), 3);
}

// ============================================================================
// Panel state
// ============================================================================

#[test]
fn test_panel_state_follows_selection_and_anchor() {
    let (mut scene, camera) = scene_with_active_camera();
    let mut ctrl = controller();

    assert_eq!(ctrl.panel_state(&scene), Some(PanelState::NoTarget));

    ctrl.create_target(&mut scene);
    assert_eq!(
        ctrl.panel_state(&scene),
        Some(PanelState::Controls(ctrl.properties(camera)))
    );

    scene.set_active(None).unwrap();
    assert_eq!(ctrl.panel_state(&scene), None);
}
