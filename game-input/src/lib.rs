mod actions;
mod bindings;
pub mod gamepad;
mod mapping;
mod value;

pub use actions::{GameAction, InputAction, TriggerEvent};
pub use bindings::{KeyBinding, Modifiers};
pub use gamepad::{GamepadConfig, GamepadInputType, gamepad_connection_system};
pub use mapping::{InputMappingContext, InputSource, MappingContexts};
pub use value::{ActionStateTracker, ActionValue};
