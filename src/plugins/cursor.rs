use bevy::prelude::*;

use crate::app_state::AppState;
use crate::plugins::input::DefaultMappingContext;
use crate::resources::{CursorPosition, CursorState, InputMode};
use crate::settings::Settings;

pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPosition>()
            .init_resource::<CursorState>()
            .init_resource::<LastCursorInside>()
            .add_systems(
                OnEnter(AppState::InGame),
                show_game_cursor.run_if(resource_exists::<DefaultMappingContext>),
            )
            .add_systems(Update, log_cursor_presence_system);
    }
}

/// Begin play: visible cursor, game-and-UI input, never captured by the viewport.
pub fn show_game_cursor(settings: Res<Settings>, mut cursor: ResMut<CursorState>) {
    let cfg = &settings.cursor;
    *cursor = CursorState {
        visible: cfg.show_cursor,
        icon: cfg.icon,
        lock_mode: cfg.lock_mode,
        hide_during_capture: cfg.hide_during_capture,
        input_mode: InputMode::GameAndUi,
    };

    tracing::info!(
        visible = cursor.visible,
        icon = ?cursor.icon,
        lock = ?cursor.lock_mode,
        "Cursor configured"
    );
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct LastCursorInside(Option<bool>);

fn log_cursor_presence_system(cursor: Res<CursorPosition>, mut last: ResMut<LastCursorInside>) {
    if !cursor.is_changed() {
        return;
    }

    let inside = cursor.0.is_some();
    if last.0 != Some(inside) {
        last.0 = Some(inside);
        match cursor.0 {
            Some(pos) => tracing::debug!(x = pos.x, y = pos.y, "cursor entered viewport"),
            None => tracing::debug!("cursor left viewport"),
        }
    }
}
