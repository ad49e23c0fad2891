use bevy::prelude::Resource;
pub use game_types::{
    CameraSettings, ControlSettings, CursorIcon, CursorLockMode, CursorSettings,
    InteractionSettings, KeyBinding, KeyBindings,
};

#[derive(Resource, serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub key_bindings: KeyBindings,
    pub controls: ControlSettings,
    pub camera: CameraSettings,
    pub cursor: CursorSettings,
    pub interaction: InteractionSettings,
}
