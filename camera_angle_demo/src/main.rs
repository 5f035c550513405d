//! Camera angle rig demo
//!
//! Builds a small scene, anchors a camera and walks it through every
//! projection and view slot, printing the resulting transforms.

use camera_angle_rig::camera_angle::{RigConfig, Result};
use camera_angle_rig::camera_angle::camera::{ProjectionType, quat_to_euler_xyz, HORIZONTAL_SLOTS};
use camera_angle_rig::camera_angle::rig::{CameraAngleController, ParameterChange, RigCoordinator};
use camera_angle_rig::camera_angle::scene::{ObjectKey, Scene, Transform};
use glam::{Quat, Vec3};

fn main() {
    if let Err(err) = run() {
        eprintln!("camera_angle_demo failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut scene = Scene::new();
    let collection = scene.create_collection("Shots");
    let camera = scene.create_camera(
        "Camera",
        Transform::from_translation_rotation(
            Vec3::new(0.0, -5.0, 1.0),
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        ),
    );
    scene.link_to_collection(collection, camera)?;
    scene.set_active(Some(camera))?;

    let mut controller = CameraAngleController::new(RigConfig::default())?;

    let notice = controller.create_target(&mut scene);
    println!("create target: {}", notice);
    print_camera(&scene, camera, "initial")?;

    for projection in ProjectionType::ALL {
        apply(&mut controller, &mut scene, ParameterChange::Projection(projection));
        for horizontal in HORIZONTAL_SLOTS {
            apply(&mut controller, &mut scene, ParameterChange::HorizontalSlot(horizontal));
            let label = format!("{} h={}", projection.identifier(), horizontal);
            print_camera(&scene, camera, &label)?;
        }
    }

    apply(&mut controller, &mut scene, ParameterChange::VerticalSlot(1));
    apply(&mut controller, &mut scene, ParameterChange::Distance(3.0));
    print_camera(&scene, camera, "zenith, distance 3")?;

    // Out of range slot: rejected with a notice, camera untouched
    apply(&mut controller, &mut scene, ParameterChange::HorizontalSlot(9));

    Ok(())
}

fn apply(controller: &mut CameraAngleController, scene: &mut Scene, change: ParameterChange) {
    if let Some(notice) = controller.handle(scene, change) {
        println!("{:?}: {}", notice.severity, notice);
    }
}

fn print_camera(scene: &Scene, camera: ObjectKey, label: &str) -> Result<()> {
    let world = scene.world_matrix(camera)?;
    let (_, rotation, position) = world.to_scale_rotation_translation();
    let euler = quat_to_euler_xyz(rotation);
    let anchor = match RigCoordinator::find_anchor(scene, camera)? {
        Some(anchor) => scene.world_translation(anchor)?,
        None => Vec3::ZERO,
    };
    println!(
        "{:<16} position ({:7.3}, {:7.3}, {:7.3})  rotation ({:7.2}, {:7.2}, {:7.2})  anchor ({:.2}, {:.2}, {:.2})",
        label,
        position.x, position.y, position.z,
        euler.x.to_degrees(), euler.y.to_degrees(), euler.z.to_degrees(),
        anchor.x, anchor.y, anchor.z,
    );
    Ok(())
}
