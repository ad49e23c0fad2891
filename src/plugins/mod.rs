pub mod cursor;
pub mod input;
pub mod mouse_interaction;
