use bevy::prelude::*;
use game_types::{CursorIcon, CursorLockMode};

/// Cursor location in viewport pixels, origin top-left. `None` while the cursor
/// is outside the window. Fed by the windowing layer.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition(pub Option<Vec2>);

/// The view the cursor is traced from.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 10.0),
            yaw: 0.0,
            pitch: -std::f32::consts::FRAC_PI_4,
            fov_y: 60f32.to_radians(),
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

impl ViewCamera {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Who receives input. Under `UiOnly` the controller ignores devices and the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    GameOnly,
    #[default]
    GameAndUi,
    UiOnly,
}

impl InputMode {
    pub fn accepts_game_input(self) -> bool {
        matches!(self, InputMode::GameOnly | InputMode::GameAndUi)
    }
}

/// Cursor presentation requested by the controller. The windowing layer applies it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub visible: bool,
    pub icon: CursorIcon,
    pub lock_mode: CursorLockMode,
    pub hide_during_capture: bool,
    pub input_mode: InputMode,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            visible: false,
            icon: CursorIcon::Default,
            lock_mode: CursorLockMode::LockOnCapture,
            hide_during_capture: true,
            input_mode: InputMode::GameOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_only_mode_shuts_out_game_input() {
        assert!(InputMode::GameOnly.accepts_game_input());
        assert!(InputMode::GameAndUi.accepts_game_input());
        assert!(!InputMode::UiOnly.accepts_game_input());
    }
}
