//! Camera systems

use bevy::prelude::*;
use tracing::debug;

use super::components::{ControlRotation, LocalPlayer, PlayerController, WorldPosition};
use crate::resources::ViewCamera;
use crate::settings::Settings;

/// Places the view camera on a boom behind the possessed pawn, turned with the
/// controller's yaw and tilted by the configured pitch.
pub fn camera_follow_system(
    settings: Res<Settings>,
    controllers: Query<(&PlayerController, &ControlRotation)>,
    pawns: Query<&WorldPosition, With<LocalPlayer>>,
    mut camera: ResMut<ViewCamera>,
) {
    let Ok((controller, rotation)) = controllers.single() else {
        return;
    };
    let Some(target) = controller.pawn.and_then(|pawn| pawns.get(pawn).ok()) else {
        return;
    };

    let pitch = settings.camera.pitch_degrees.to_radians();
    let orientation = Quat::from_euler(EulerRot::YXZ, rotation.yaw, pitch, 0.0);
    let position = target.0 + orientation * Vec3::new(0.0, 0.0, settings.camera.arm_length);
    let fov_y = settings.camera.fov_degrees.to_radians();

    let updated = ViewCamera {
        position,
        yaw: rotation.yaw,
        pitch,
        fov_y,
        viewport: camera.viewport,
    };
    if *camera != updated {
        debug!(
            cam_x = position.x,
            cam_y = position.y,
            cam_z = position.z,
            "Camera follow updated"
        );
        *camera = updated;
    }
}
