use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;

/// Modifier keys a binding requires. Modifiers not listed are ignored, so
/// holding Shift does not interrupt a plain `KeyW` binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn held(&self, input: &ButtonInput<KeyCode>) -> bool {
        let ctrl_ok =
            !self.ctrl || input.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        let shift_ok = !self.shift || input.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        let alt_ok = !self.alt || input.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]);

        ctrl_ok && shift_ok && alt_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn is_pressed(&self, input: &ButtonInput<KeyCode>) -> bool {
        input.pressed(self.key) && self.modifiers.held(input)
    }

    /// Parses `"KeyW"` or `"Ctrl+Shift+KeyW"`. Unknown modifiers or keys yield `None`.
    pub fn from_dom_code(code: &str) -> Option<Self> {
        let mut parts = code.split('+').collect::<Vec<_>>();
        let key = parts.pop().and_then(dom_code_to_keycode)?;

        let mut modifiers = Modifiers::none();
        for modifier in parts {
            match modifier {
                "Ctrl" => modifiers.ctrl = true,
                "Shift" => modifiers.shift = true,
                "Alt" => modifiers.alt = true,
                _ => return None,
            }
        }

        Some(KeyBinding { key, modifiers })
    }

    pub fn to_dom_code(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        parts.push(keycode_to_dom_code(self.key));
        parts.join("+")
    }
}

const DOM_CODES: &[(&str, KeyCode)] = &[
    ("ArrowUp", KeyCode::ArrowUp),
    ("ArrowDown", KeyCode::ArrowDown),
    ("ArrowLeft", KeyCode::ArrowLeft),
    ("ArrowRight", KeyCode::ArrowRight),
    ("KeyA", KeyCode::KeyA),
    ("KeyB", KeyCode::KeyB),
    ("KeyC", KeyCode::KeyC),
    ("KeyD", KeyCode::KeyD),
    ("KeyE", KeyCode::KeyE),
    ("KeyF", KeyCode::KeyF),
    ("KeyG", KeyCode::KeyG),
    ("KeyH", KeyCode::KeyH),
    ("KeyI", KeyCode::KeyI),
    ("KeyJ", KeyCode::KeyJ),
    ("KeyK", KeyCode::KeyK),
    ("KeyL", KeyCode::KeyL),
    ("KeyM", KeyCode::KeyM),
    ("KeyN", KeyCode::KeyN),
    ("KeyO", KeyCode::KeyO),
    ("KeyP", KeyCode::KeyP),
    ("KeyQ", KeyCode::KeyQ),
    ("KeyR", KeyCode::KeyR),
    ("KeyS", KeyCode::KeyS),
    ("KeyT", KeyCode::KeyT),
    ("KeyU", KeyCode::KeyU),
    ("KeyV", KeyCode::KeyV),
    ("KeyW", KeyCode::KeyW),
    ("KeyX", KeyCode::KeyX),
    ("KeyY", KeyCode::KeyY),
    ("KeyZ", KeyCode::KeyZ),
    ("Numpad2", KeyCode::Numpad2),
    ("Numpad4", KeyCode::Numpad4),
    ("Numpad6", KeyCode::Numpad6),
    ("Numpad8", KeyCode::Numpad8),
    ("Space", KeyCode::Space),
    ("Tab", KeyCode::Tab),
    ("Escape", KeyCode::Escape),
];

fn dom_code_to_keycode(code: &str) -> Option<KeyCode> {
    DOM_CODES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, key)| *key)
}

fn keycode_to_dom_code(key: KeyCode) -> &'static str {
    DOM_CODES
        .iter()
        .find(|(_, k)| *k == key)
        .map(|(name, _)| *name)
        .unwrap_or("Unknown")
}
