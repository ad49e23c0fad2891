#![allow(dead_code)]

use aura_lib::ecs::components::{
    ControlRotation, ControllerBundle, EnemyBundle, HitShape, PawnBundle, PlayerController,
    WorldPosition,
};
use aura_lib::events::{ActionTriggered, HighlightEvent};
use aura_lib::settings::Settings;
use aura_lib::{ControllerPlugin, CursorPosition, ViewCamera};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub const FRAME: Duration = Duration::from_millis(100);
pub const PAWN_SPEED: f32 = 5.0;

#[derive(Resource, Default)]
struct Recorded {
    highlights: Vec<HighlightEvent>,
    actions: Vec<ActionTriggered>,
}

fn record_messages(
    mut highlights: MessageReader<HighlightEvent>,
    mut actions: MessageReader<ActionTriggered>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.highlights.extend(highlights.read().copied());
    recorded.actions.extend(actions.read().copied());
}

/// Headless app running the controller with one possessed pawn at the origin.
pub struct TestScene {
    app: App,
    pub controller: Entity,
    pub pawn: Entity,
}

impl TestScene {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut app = App::new();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.add_plugins(MinimalPlugins);
        app.insert_resource(settings);
        app.add_plugins(ControllerPlugin);
        app.init_resource::<Recorded>()
            .add_systems(Last, record_messages);

        let pawn = app
            .world_mut()
            .spawn(PawnBundle::new(Vec3::ZERO, PAWN_SPEED))
            .id();
        let controller = app
            .world_mut()
            .spawn(ControllerBundle::possessing(pawn))
            .id();

        // first frame notices the controller, second enters play
        app.update();
        app.update();

        let mut scene = Self {
            app,
            controller,
            pawn,
        };
        scene.take_highlights();
        scene.take_actions();
        scene
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn frame(&mut self) {
        self.app.update();
    }

    pub fn spawn_enemy(&mut self, name: &str, position: Vec3) -> Entity {
        self.world_mut()
            .spawn(EnemyBundle::new(name, position, 250))
            .id()
    }

    /// Large non-highlightable slab whose top face is at `y = 0`.
    pub fn spawn_floor(&mut self) -> Entity {
        self.spawn_blocker(Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0))
    }

    pub fn spawn_blocker(&mut self, position: Vec3, half_extents: Vec3) -> Entity {
        self.world_mut()
            .spawn((WorldPosition(position), HitShape { half_extents }))
            .id()
    }

    /// Puts the cursor over `point` as seen from the current view camera.
    pub fn point_cursor_at(&mut self, point: Vec3) {
        let camera = *self.world().resource::<ViewCamera>();
        let cursor = project(&camera, point);
        self.world_mut().resource_mut::<CursorPosition>().0 = Some(cursor);
    }

    pub fn clear_cursor(&mut self) {
        self.world_mut().resource_mut::<CursorPosition>().0 = None;
    }

    pub fn press(&mut self, key: KeyCode) {
        self.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    pub fn set_control_rotation(&mut self, yaw: f32, pitch: f32) {
        let controller = self.controller;
        *self
            .world_mut()
            .get_mut::<ControlRotation>(controller)
            .unwrap() = ControlRotation { yaw, pitch };
    }

    pub fn unpossess(&mut self) {
        let controller = self.controller;
        self.world_mut()
            .get_mut::<PlayerController>(controller)
            .unwrap()
            .pawn = None;
    }

    pub fn pawn_position(&self) -> Vec3 {
        self.world().get::<WorldPosition>(self.pawn).unwrap().0
    }

    pub fn take_highlights(&mut self) -> Vec<HighlightEvent> {
        std::mem::take(&mut self.world_mut().resource_mut::<Recorded>().highlights)
    }

    pub fn take_actions(&mut self) -> Vec<ActionTriggered> {
        std::mem::take(&mut self.world_mut().resource_mut::<Recorded>().actions)
    }
}

/// Inverse of the cursor ray: viewport pixel that looks at `point`.
pub fn project(camera: &ViewCamera, point: Vec3) -> Vec2 {
    let local = camera.rotation().inverse() * (point - camera.position);
    let depth = -local.z;
    assert!(depth > 0.0, "point is behind the camera");

    let half_fov_tan = (camera.fov_y * 0.5).tan();
    let aspect = camera.viewport.x / camera.viewport.y;
    let ndc_x = local.x / depth / (half_fov_tan * aspect);
    let ndc_y = local.y / depth / half_fov_tan;

    Vec2::new(
        (ndc_x + 1.0) * 0.5 * camera.viewport.x,
        (1.0 - ndc_y) * 0.5 * camera.viewport.y,
    )
}

#[derive(Clone, Default)]
struct WarningCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Runs `f` and returns how many warnings it logged on this thread.
pub fn count_warnings(f: impl FnOnce()) -> usize {
    let counter = WarningCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    counter.0.load(Ordering::Relaxed)
}
