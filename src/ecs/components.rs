use bevy::prelude::*;

/// World-space location. +Y is up.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition(pub Vec3);

/// The local player's controller. Owns the view rotation and possesses at most one pawn.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub pawn: Option<Entity>,
}

/// View rotation of a controller, in radians. Movement only ever uses the yaw.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRotation {
    pub yaw: f32,
    pub pitch: f32,
}

/// Marks the pawn the local controller drives. The camera only follows these.
#[derive(Component)]
pub struct LocalPlayer;

/// Movement requested this frame and not yet applied.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pending: Vec3,
}

impl MovementInput {
    pub fn add(&mut self, direction: Vec3, scale: f32) {
        self.pending += direction * scale;
    }

    pub fn consume(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct PawnMovement {
    pub max_speed: f32,
}

/// Axis-aligned box around the entity's [`WorldPosition`] that blocks cursor traces.
#[derive(Component, Debug, Clone, Copy)]
pub struct HitShape {
    pub half_extents: Vec3,
}

/// Excluded from cursor traces entirely, e.g. the player's own pawn.
#[derive(Component)]
pub struct IgnoreCursorTrace;

/// Something the cursor can highlight, such as an enemy.
#[derive(Component, Debug, Clone, Copy)]
pub struct Highlightable {
    pub stencil: u8,
}

impl Default for Highlightable {
    fn default() -> Self {
        Self { stencil: 250 }
    }
}

/// Present while an actor is highlighted. Renderers draw the outline from `stencil`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlighted {
    pub stencil: u8,
}

#[derive(Bundle)]
pub struct ControllerBundle {
    pub controller: PlayerController,
    pub rotation: ControlRotation,
    pub hover: super::interaction::HoverTracker,
}

impl ControllerBundle {
    pub fn possessing(pawn: Entity) -> Self {
        Self {
            controller: PlayerController { pawn: Some(pawn) },
            rotation: ControlRotation::default(),
            hover: default(),
        }
    }
}

#[derive(Bundle)]
pub struct PawnBundle {
    pub local: LocalPlayer,
    pub position: WorldPosition,
    pub input: MovementInput,
    pub movement: PawnMovement,
    pub shape: HitShape,
    pub ignore: IgnoreCursorTrace,
}

impl PawnBundle {
    pub fn new(position: Vec3, max_speed: f32) -> Self {
        Self {
            local: LocalPlayer,
            position: WorldPosition(position),
            input: MovementInput::default(),
            movement: PawnMovement { max_speed },
            shape: HitShape {
                half_extents: Vec3::new(0.4, 0.9, 0.4),
            },
            ignore: IgnoreCursorTrace,
        }
    }
}

#[derive(Bundle)]
pub struct EnemyBundle {
    pub name: Name,
    pub position: WorldPosition,
    pub shape: HitShape,
    pub highlightable: Highlightable,
}

impl EnemyBundle {
    pub fn new(name: impl Into<String>, position: Vec3, stencil: u8) -> Self {
        Self {
            name: Name::new(name.into()),
            position: WorldPosition(position),
            shape: HitShape {
                half_extents: Vec3::new(0.5, 1.0, 0.5),
            },
            highlightable: Highlightable { stencil },
        }
    }
}
