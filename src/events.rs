use bevy::prelude::{Entity, Message};
use game_input::{ActionValue, InputAction, TriggerEvent};

// === Input Events ===

/// A bound input action fired this frame.
#[derive(Debug, Clone, Copy, PartialEq, Message)]
pub struct ActionTriggered {
    pub action: InputAction,
    pub trigger: TriggerEvent,
    pub value: ActionValue,
}

// === Interaction Events ===

/// Emitted when an actor gains or loses the cursor highlight. For a swap the
/// `Unhighlighted` message is written first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Message)]
pub enum HighlightEvent {
    Highlighted(Entity),
    Unhighlighted(Entity),
}
