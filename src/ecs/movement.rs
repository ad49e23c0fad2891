//! Camera-relative movement.
//!
//! The move action's 2D value is rotated by the controller's yaw only, so
//! looking up or down never tilts movement into the ground or the sky.

use bevy::prelude::*;
use game_input::{InputAction, TriggerEvent};
use tracing::trace;

use super::components::{ControlRotation, MovementInput, PawnMovement, PlayerController, WorldPosition};
use crate::events::ActionTriggered;

/// Unit forward and right axes of the yaw-only part of `rotation`.
pub fn yaw_axes(rotation: &ControlRotation) -> (Vec3, Vec3) {
    let yaw = Quat::from_rotation_y(rotation.yaw);
    (yaw * Vec3::NEG_Z, yaw * Vec3::X)
}

/// Handler bound to `Move` / `Triggered`.
pub fn move_action_system(
    mut actions: MessageReader<ActionTriggered>,
    controllers: Query<(&PlayerController, &ControlRotation)>,
    mut pawns: Query<&mut MovementInput>,
) {
    for event in actions.read() {
        if event.action != InputAction::Move || event.trigger != TriggerEvent::Triggered {
            continue;
        }
        let axis = event.value.axis2d();

        for (controller, rotation) in controllers.iter() {
            let Some(pawn) = controller.pawn else {
                continue;
            };
            let Ok(mut input) = pawns.get_mut(pawn) else {
                continue;
            };

            let (forward, right) = yaw_axes(rotation);
            input.add(forward, axis.y);
            input.add(right, axis.x);
            trace!(?pawn, x = axis.x, y = axis.y, "Move input");
        }
    }
}

/// Consumes pending movement input: clamped to unit length, scaled by speed and delta time.
pub fn pawn_movement_system(
    time: Res<Time>,
    mut pawns: Query<(&mut MovementInput, &PawnMovement, &mut WorldPosition)>,
) {
    let dt = time.delta_secs();
    for (mut input, movement, mut position) in pawns.iter_mut() {
        let pending = input.consume();
        if pending == Vec3::ZERO {
            continue;
        }
        position.0 += pending.clamp_length_max(1.0) * movement.max_speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn zero_yaw_is_world_forward() {
        let (forward, right) = yaw_axes(&ControlRotation::default());
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(right.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn quarter_turn_left_rotates_axes() {
        let (forward, right) = yaw_axes(&ControlRotation {
            yaw: FRAC_PI_2,
            pitch: 0.0,
        });
        assert!(forward.abs_diff_eq(Vec3::NEG_X, 1e-6));
        assert!(right.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn pitch_is_ignored() {
        let level = yaw_axes(&ControlRotation {
            yaw: 0.7,
            pitch: 0.0,
        });
        let tilted = yaw_axes(&ControlRotation {
            yaw: 0.7,
            pitch: -1.2,
        });
        assert_eq!(level, tilted);
        assert!(tilted.0.y.abs() < 1e-6);
    }
}
