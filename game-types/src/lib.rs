mod settings;

pub use settings::{
    CameraSettings, ControlSettings, CursorIcon, CursorLockMode, CursorSettings,
    InteractionSettings, KeyBinding, KeyBindings,
};
