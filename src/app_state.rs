use bevy::prelude::*;
use tracing::info;

use crate::ecs::components::PlayerController;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Starts play once a player controller has been spawned.
pub fn enter_game_when_ready(
    controllers: Query<(), With<PlayerController>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !controllers.is_empty() {
        info!("Player controller ready, entering game");
        next_state.set(AppState::InGame);
    }
}
