use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use tracing_subscriber::EnvFilter;

use aura_lib::ecs::components::{ControllerBundle, EnemyBundle, HitShape, PawnBundle, WorldPosition};
use aura_lib::events::HighlightEvent;
use aura_lib::settings::Settings;
use aura_lib::{CursorPosition, ViewCamera};

fn main() {
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .ok();
    tracing::info!("Tracing initialized");

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(bevy::input::InputPlugin)
        .add_plugins(aura_lib::CorePlugin)
        .add_systems(Startup, spawn_demo_scene)
        .add_systems(Update, (sweep_cursor, log_highlights))
        .run();
}

fn spawn_demo_scene(mut commands: Commands, settings: Res<Settings>) {
    commands.spawn((
        Name::new("Floor"),
        WorldPosition(Vec3::new(0.0, -0.5, 0.0)),
        HitShape {
            half_extents: Vec3::new(50.0, 0.5, 50.0),
        },
    ));

    let pawn = commands
        .spawn(PawnBundle::new(Vec3::ZERO, settings.controls.move_speed))
        .id();
    commands.spawn(ControllerBundle::possessing(pawn));

    let stencil = settings.interaction.highlight_stencil;
    for (i, x) in [-4.0, 0.0, 4.0].into_iter().enumerate() {
        commands.spawn(EnemyBundle::new(
            format!("Goblin {}", i + 1),
            Vec3::new(x, 1.0, -6.0),
            stencil,
        ));
    }
}

/// Stands in for a window: drags the cursor left to right across the upper band.
fn sweep_cursor(time: Res<Time>, camera: Res<ViewCamera>, mut cursor: ResMut<CursorPosition>) {
    let t = (time.elapsed_secs() * 0.25).fract();
    let size = camera.viewport;
    cursor.0 = Some(Vec2::new(t * size.x, size.y * 0.25));
}

fn log_highlights(mut events: MessageReader<HighlightEvent>, names: Query<&Name>) {
    for event in events.read() {
        let (entity, verb) = match event {
            HighlightEvent::Highlighted(e) => (*e, "highlight"),
            HighlightEvent::Unhighlighted(e) => (*e, "unhighlight"),
        };
        let name = names.get(entity).map(|n| n.as_str()).unwrap_or("<despawned>");
        tracing::info!(target_name = name, "{}", verb);
    }
}
