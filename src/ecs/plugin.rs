//! Game ECS Plugin
//!
//! Registers the per-frame controller systems with ordering from [`ControllerSet`].

use bevy::prelude::*;

use super::{camera, movement};
use crate::app_state::{self, AppState};

/// Per-frame controller phases, in execution order:
/// 1. **Input** - Read devices, fire bound input actions
/// 2. **Movement** - Action handlers turn input into pawn movement requests
/// 3. **Physics** - Apply pending movement to positions
/// 4. **Camera** - Follow the possessed pawn
/// 5. **Interaction** - Trace the cursor and update hover highlights
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Input,
    Movement,
    Physics,
    Camera,
    Interaction,
}

pub fn configure_controller_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ControllerSet::Input,
            ControllerSet::Movement,
            ControllerSet::Physics,
            ControllerSet::Camera,
            ControllerSet::Interaction,
        )
            .chain()
            .distributive_run_if(in_state(AppState::InGame)),
    );
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        configure_controller_sets(app);

        app.add_systems(
            Update,
            app_state::enter_game_when_ready.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            movement::move_action_system.in_set(ControllerSet::Movement),
        )
        .add_systems(
            Update,
            movement::pawn_movement_system.in_set(ControllerSet::Physics),
        )
        .add_systems(
            Update,
            camera::camera_follow_system.in_set(ControllerSet::Camera),
        );
    }
}
