use bevy::input::gamepad::{GamepadAxis, GamepadButton};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadInputType {
    Button(GamepadButton),
    LeftStickUp,
    LeftStickDown,
    LeftStickLeft,
    LeftStickRight,
}

impl GamepadInputType {
    /// Analog strength in `0.0..=1.0`. Buttons read 0 or 1; stick halves read
    /// their deflection rescaled past the dead zone.
    pub fn value(&self, gamepad: &Gamepad, dead_zone: f32) -> f32 {
        match self {
            GamepadInputType::Button(btn) => {
                if gamepad.pressed(*btn) {
                    1.0
                } else {
                    0.0
                }
            }
            GamepadInputType::LeftStickUp => {
                stick_half(gamepad.get(GamepadAxis::LeftStickY), 1.0, dead_zone)
            }
            GamepadInputType::LeftStickDown => {
                stick_half(gamepad.get(GamepadAxis::LeftStickY), -1.0, dead_zone)
            }
            GamepadInputType::LeftStickLeft => {
                stick_half(gamepad.get(GamepadAxis::LeftStickX), -1.0, dead_zone)
            }
            GamepadInputType::LeftStickRight => {
                stick_half(gamepad.get(GamepadAxis::LeftStickX), 1.0, dead_zone)
            }
        }
    }

    /// Parses the `Gamepad:<Name>` form used in the settings file.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.strip_prefix("Gamepad:")?;

        match s {
            "LeftStickUp" => return Some(GamepadInputType::LeftStickUp),
            "LeftStickDown" => return Some(GamepadInputType::LeftStickDown),
            "LeftStickLeft" => return Some(GamepadInputType::LeftStickLeft),
            "LeftStickRight" => return Some(GamepadInputType::LeftStickRight),
            _ => {}
        }

        GamepadButton::all()
            .into_iter()
            .find(|button| button_name(*button) == s)
            .map(GamepadInputType::Button)
    }
}

/// Deflection along `sign`, with the dead zone removed and the rest rescaled to `0..=1`.
pub fn stick_half(axis: Option<f32>, sign: f32, dead_zone: f32) -> f32 {
    let along = axis.unwrap_or(0.0) * sign;
    let dead_zone = dead_zone.clamp(0.0, 0.99);
    if along <= dead_zone {
        return 0.0;
    }
    ((along - dead_zone) / (1.0 - dead_zone)).min(1.0)
}

fn button_name(button: GamepadButton) -> &'static str {
    match button {
        GamepadButton::South => "South",
        GamepadButton::East => "East",
        GamepadButton::North => "North",
        GamepadButton::West => "West",
        GamepadButton::LeftTrigger => "LeftTrigger",
        GamepadButton::RightTrigger => "RightTrigger",
        GamepadButton::LeftTrigger2 => "LeftTrigger2",
        GamepadButton::RightTrigger2 => "RightTrigger2",
        GamepadButton::Select => "Select",
        GamepadButton::Start => "Start",
        GamepadButton::DPadUp => "DPadUp",
        GamepadButton::DPadDown => "DPadDown",
        GamepadButton::DPadLeft => "DPadLeft",
        GamepadButton::DPadRight => "DPadRight",
        _ => "Unknown",
    }
}

#[derive(Resource)]
pub struct GamepadConfig {
    pub primary_gamepad: Option<Entity>,
    pub dead_zone: f32,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            primary_gamepad: None,
            dead_zone: 0.2,
        }
    }
}

/// Adopts the first connected gamepad as primary and forgets it once it disappears.
pub fn gamepad_connection_system(
    mut config: ResMut<GamepadConfig>,
    gamepads: Query<(Entity, Option<&Name>), With<Gamepad>>,
) {
    match config.primary_gamepad {
        None => {
            if let Some((entity, name)) = gamepads.iter().next() {
                config.primary_gamepad = Some(entity);
                tracing::info!(
                    gamepad = name.map(|n| n.as_str()).unwrap_or("unnamed"),
                    "Primary gamepad connected"
                );
            }
        }
        Some(primary) => {
            if gamepads.get(primary).is_err() {
                config.primary_gamepad = None;
                tracing::info!("Primary gamepad disconnected");
            }
        }
    }
}
