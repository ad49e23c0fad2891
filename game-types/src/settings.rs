use serde::{Deserialize, Serialize};

/// A primary and a secondary binding for one action. Empty strings mean unbound.
///
/// Serialized as a plain string when only the primary slot is used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyBinding(pub [String; 2]);

impl KeyBinding {
    pub fn single(code: &str) -> Self {
        Self([code.to_string(), String::new()])
    }

    pub fn pair(primary: &str, secondary: &str) -> Self {
        Self([primary.to_string(), secondary.to_string()])
    }

    /// Non-empty slots, primary first.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str).filter(|s| !s.is_empty())
    }
}

impl Serialize for KeyBinding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.0[1].is_empty() {
            serializer.serialize_str(&self.0[0])
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for KeyBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Either {
            Single(String),
            Multiple(Vec<String>),
        }

        match Either::deserialize(deserializer)? {
            Either::Single(s) => Ok(KeyBinding([s, String::new()])),
            Either::Multiple(v) => {
                let mut slots = [String::new(), String::new()];
                for (slot, code) in slots.iter_mut().zip(v) {
                    *slot = code;
                }
                Ok(KeyBinding(slots))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_forward: KeyBinding,
    pub move_backward: KeyBinding,
    pub move_left: KeyBinding,
    pub move_right: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_forward: KeyBinding::pair("KeyW", "ArrowUp"),
            move_backward: KeyBinding::pair("KeyS", "ArrowDown"),
            move_left: KeyBinding::pair("KeyA", "ArrowLeft"),
            move_right: KeyBinding::pair("KeyD", "ArrowRight"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Pawn top speed in world units per second.
    pub move_speed: f32,
    /// Stick deflection below this reads as zero.
    pub gamepad_dead_zone: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            gamepad_dead_zone: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub arm_length: f32,
    pub pitch_degrees: f32,
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            arm_length: 14.0,
            pitch_degrees: -45.0,
            fov_degrees: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Crosshair,
    Hand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CursorLockMode {
    #[default]
    DoNotLock,
    LockOnCapture,
    LockAlways,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    pub show_cursor: bool,
    pub icon: CursorIcon,
    pub lock_mode: CursorLockMode,
    pub hide_during_capture: bool,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            show_cursor: true,
            icon: CursorIcon::Default,
            lock_mode: CursorLockMode::DoNotLock,
            hide_during_capture: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Cursor hits farther than this from the camera are ignored.
    pub trace_distance: f32,
    /// Custom-depth stencil written for highlighted actors.
    pub highlight_stencil: u8,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            trace_distance: 1000.0,
            highlight_stencil: 250,
        }
    }
}
