use super::{GameAction, GamepadInputType, KeyBinding};
use bevy::input::ButtonInput;
use bevy::input::gamepad::GamepadButton;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use game_types::KeyBindings;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Keyboard(KeyBinding),
    Gamepad(GamepadInputType),
}

impl InputSource {
    pub fn from_string(s: &str) -> Option<Self> {
        GamepadInputType::from_string(s)
            .map(InputSource::Gamepad)
            .or_else(|| KeyBinding::from_dom_code(s).map(InputSource::Keyboard))
    }

    /// Strength in `0.0..=1.0`. Gamepad sources read zero without a gamepad.
    pub fn value(
        &self,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
        dead_zone: f32,
    ) -> f32 {
        match self {
            InputSource::Keyboard(kb) => {
                if kb.is_pressed(keyboard) {
                    1.0
                } else {
                    0.0
                }
            }
            InputSource::Gamepad(gi) => gamepad.map_or(0.0, |pad| gi.value(pad, dead_zone)),
        }
    }
}

/// A named table from bindable actions to the inputs that drive them.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMappingContext {
    name: String,
    bindings: HashMap<GameAction, Vec<InputSource>>,
}

impl InputMappingContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: HashMap::new(),
        }
    }

    /// D-pad and left stick for movement.
    pub fn with_gamepad_defaults(name: impl Into<String>) -> Self {
        let mut context = Self::new(name);
        let defaults = [
            (
                GameAction::MoveForward,
                GamepadButton::DPadUp,
                GamepadInputType::LeftStickUp,
            ),
            (
                GameAction::MoveBackward,
                GamepadButton::DPadDown,
                GamepadInputType::LeftStickDown,
            ),
            (
                GameAction::MoveLeft,
                GamepadButton::DPadLeft,
                GamepadInputType::LeftStickLeft,
            ),
            (
                GameAction::MoveRight,
                GamepadButton::DPadRight,
                GamepadInputType::LeftStickRight,
            ),
        ];

        for (action, button, stick) in defaults {
            context.add_binding(action, InputSource::Gamepad(GamepadInputType::Button(button)));
            context.add_binding(action, InputSource::Gamepad(stick));
        }
        context
    }

    /// Gamepad defaults plus whatever the settings file binds. Entries that fail to
    /// parse are logged and skipped.
    pub fn from_settings(name: impl Into<String>, settings: &KeyBindings) -> Self {
        let mut context = Self::with_gamepad_defaults(name);

        for &action in GameAction::all() {
            let binding = match action {
                GameAction::MoveForward => &settings.move_forward,
                GameAction::MoveBackward => &settings.move_backward,
                GameAction::MoveLeft => &settings.move_left,
                GameAction::MoveRight => &settings.move_right,
            };

            for code in binding.codes() {
                match InputSource::from_string(code) {
                    Some(source) => context.add_binding(action, source),
                    None => tracing::warn!(?action, code, "Ignoring unrecognized key binding"),
                }
            }
        }

        context
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, action: GameAction) -> Option<&[InputSource]> {
        self.bindings.get(&action).map(|v| v.as_slice())
    }

    pub fn add_binding(&mut self, action: GameAction, source: InputSource) {
        let sources = self.bindings.entry(action).or_default();
        if !sources.contains(&source) {
            sources.push(source);
        }
    }

    /// Strongest source bound to `action`, or `None` when the action is unmapped here.
    pub fn value(
        &self,
        action: GameAction,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
        dead_zone: f32,
    ) -> Option<f32> {
        let sources = self.bindings.get(&action)?;
        Some(
            sources
                .iter()
                .map(|s| s.value(keyboard, gamepad, dead_zone))
                .fold(0.0, f32::max),
        )
    }
}

struct ContextEntry {
    priority: i32,
    context: InputMappingContext,
}

/// Active mapping contexts. Higher priority contexts shadow lower ones per action.
#[derive(Resource, Default)]
pub struct MappingContexts {
    entries: Vec<ContextEntry>,
}

impl MappingContexts {
    /// Adds `context` at `priority`, replacing an active context with the same name.
    pub fn add(&mut self, context: InputMappingContext, priority: i32) {
        self.remove(context.name());
        tracing::debug!(context = context.name(), priority, "Adding mapping context");
        self.entries.push(ContextEntry { priority, context });
        // stable: equal priorities keep insertion order
        self.entries.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    pub fn remove(&mut self, name: &str) -> Option<InputMappingContext> {
        let idx = self.entries.iter().position(|e| e.context.name() == name)?;
        Some(self.entries.remove(idx).context)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.context.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn priority_of(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.context.name() == name)
            .map(|e| e.priority)
    }

    /// Value of `action` from the highest priority context that maps it.
    pub fn value(
        &self,
        action: GameAction,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
        dead_zone: f32,
    ) -> f32 {
        self.entries
            .iter()
            .find_map(|e| e.context.value(action, keyboard, gamepad, dead_zone))
            .unwrap_or(0.0)
    }
}
