pub mod camera;
pub mod components;
pub mod interaction;
pub mod movement;
pub mod picking;
pub mod plugin;
