use super::{GameAction, InputAction, MappingContexts, TriggerEvent};
use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionValue {
    Axis2D(Vec2),
}

impl ActionValue {
    pub fn zero(action: InputAction) -> Self {
        match action {
            InputAction::Move => ActionValue::Axis2D(Vec2::ZERO),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            ActionValue::Axis2D(v) => v.length_squared() > f32::EPSILON,
        }
    }

    pub fn axis2d(&self) -> Vec2 {
        match self {
            ActionValue::Axis2D(v) => *v,
        }
    }

    /// Evaluates `action` against the active contexts.
    ///
    /// `Move` composes the four directional inputs into `(right - left, forward - backward)`
    /// and clamps the result to unit length so diagonals are not faster.
    pub fn read(
        action: InputAction,
        contexts: &MappingContexts,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
        dead_zone: f32,
    ) -> Self {
        let value = |a| contexts.value(a, keyboard, gamepad, dead_zone);

        match action {
            InputAction::Move => {
                let axis = Vec2::new(
                    value(GameAction::MoveRight) - value(GameAction::MoveLeft),
                    value(GameAction::MoveForward) - value(GameAction::MoveBackward),
                );
                ActionValue::Axis2D(axis.clamp_length_max(1.0))
            }
        }
    }
}

/// Remembers whether each action was active last frame so that edges can be reported.
#[derive(Resource, Default, Debug)]
pub struct ActionStateTracker {
    active: HashMap<InputAction, bool>,
}

impl ActionStateTracker {
    /// Records this frame's value and returns the trigger events it produces, in
    /// `Started`, `Triggered`, `Completed` order.
    pub fn advance(&mut self, action: InputAction, value: ActionValue) -> Vec<TriggerEvent> {
        let now = value.is_active();
        let was = self.active.insert(action, now).unwrap_or(false);

        let mut fired = Vec::new();
        if now && !was {
            fired.push(TriggerEvent::Started);
        }
        if now {
            fired.push(TriggerEvent::Triggered);
        }
        if was && !now {
            fired.push(TriggerEvent::Completed);
        }
        fired
    }

    pub fn is_active(&self, action: InputAction) -> bool {
        self.active.get(&action).copied().unwrap_or(false)
    }
}
