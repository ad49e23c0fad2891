/// Bindable digital inputs. Each one is fed by one or more [`crate::InputSource`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
}

impl GameAction {
    pub fn all() -> &'static [GameAction] {
        &[
            GameAction::MoveForward,
            GameAction::MoveBackward,
            GameAction::MoveLeft,
            GameAction::MoveRight,
        ]
    }
}

/// Logical actions the controller binds handlers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// 2D axis: `x` strafes right, `y` moves forward.
    Move,
}

impl InputAction {
    pub fn all() -> &'static [InputAction] {
        &[InputAction::Move]
    }
}

/// When a bound handler fires relative to the action's value over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Value went from zero to non-zero this frame.
    Started,
    /// Value is non-zero this frame. Fires every frame while held.
    Triggered,
    /// Value went from non-zero back to zero this frame.
    Completed,
}
