use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub mod app_state;
pub mod ecs;
pub mod events;
pub mod plugins;
pub mod resources;
pub mod settings;
pub mod settings_types;

pub fn storage_dir() -> std::path::PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("Aura");
    if let Err(e) = std::fs::create_dir_all(&path) {
        tracing::warn!("Could not create storage dir {:?}: {}", path, e);
    }
    path
}

pub use resources::{CursorPosition, CursorState, ViewCamera};

pub struct CoreEventsPlugin;

impl Plugin for CoreEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<events::ActionTriggered>()
            .add_message::<events::HighlightEvent>();
    }
}

/// The player controller without any file I/O. Uses the [`settings::Settings`]
/// resource if one is present, defaults otherwise.
pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }

        app.init_resource::<settings::Settings>()
            .init_resource::<Time>()
            .init_state::<app_state::AppState>()
            .add_plugins((
                CoreEventsPlugin,
                ecs::plugin::GamePlugin,
                plugins::input::InputPlugin,
                plugins::cursor::CursorPlugin,
                plugins::mouse_interaction::MouseInteractionPlugin,
            ));
    }
}

/// Controller plus settings persisted under [`storage_dir`].
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((settings::SettingsPlugin, ControllerPlugin));
    }
}
