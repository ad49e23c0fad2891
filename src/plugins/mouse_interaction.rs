use bevy::prelude::*;

use crate::ecs::components::{
    HitShape, Highlightable, Highlighted, IgnoreCursorTrace, PlayerController, WorldPosition,
};
use crate::ecs::interaction::{HighlightEvent, HoverTracker, HoveredEntity};
use crate::ecs::picking::{self, CursorHit};
use crate::ecs::plugin::ControllerSet;
use crate::resources::{CursorPosition, CursorState, ViewCamera};
use crate::settings::Settings;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseInteractionSet;

pub struct MouseInteractionPlugin;

impl Plugin for MouseInteractionPlugin {
    fn build(&self, app: &mut App) {
        // HighlightEvent is registered in CoreEventsPlugin
        app.init_resource::<HoveredEntity>()
            .init_resource::<CursorPosition>()
            .init_resource::<ViewCamera>()
            .add_systems(
                Update,
                cursor_trace_system
                    .in_set(MouseInteractionSet)
                    .in_set(ControllerSet::Interaction),
            );
    }
}

/// Blocking hit under the cursor, if any.
pub fn trace_under_cursor<'a>(
    cursor: &CursorPosition,
    camera: &ViewCamera,
    max_distance: f32,
    shapes: impl IntoIterator<Item = (Entity, &'a WorldPosition, &'a HitShape)>,
) -> Option<CursorHit> {
    let ray = picking::cursor_ray(camera, cursor.0?)?;
    picking::pick(
        &ray,
        shapes
            .into_iter()
            .map(|(entity, pos, shape)| (entity, pos.0, shape.half_extents)),
        max_distance,
    )
}

fn cursor_trace_system(
    cursor: Res<CursorPosition>,
    cursor_state: Res<CursorState>,
    camera: Res<ViewCamera>,
    settings: Res<Settings>,
    shapes: Query<(Entity, &WorldPosition, &HitShape), Without<IgnoreCursorTrace>>,
    highlightables: Query<&Highlightable>,
    mut trackers: Query<&mut HoverTracker, With<PlayerController>>,
    mut hovered_entity: ResMut<HoveredEntity>,
    mut highlight_events: MessageWriter<HighlightEvent>,
    mut commands: Commands,
) {
    if !cursor_state.input_mode.accepts_game_input() {
        return;
    }
    let Ok(mut tracker) = trackers.single_mut() else {
        return;
    };

    // no blocking hit keeps the current hover as is
    let Some(hit) = trace_under_cursor(
        &cursor,
        &camera,
        settings.interaction.trace_distance,
        shapes.iter(),
    ) else {
        return;
    };
    // only highlightable actors count as hovered; other blockers just occlude
    let hovered = Some(hit.entity).filter(|entity| highlightables.contains(*entity));

    let transition = tracker.advance(hovered);
    if hovered_entity.0 != hovered {
        hovered_entity.0 = hovered;
    }

    if let Some(last) = transition.unhighlighted() {
        match commands.get_entity(last) {
            Ok(mut entity) => {
                entity.try_remove::<Highlighted>();
                highlight_events.write(HighlightEvent::Unhighlighted(last));
                tracing::debug!(?last, "Unhighlighted");
            }
            Err(_) => tracing::warn!(?last, "last hovered entity is no longer valid"),
        }
    }

    if let Some(this) = transition.highlighted() {
        if let Ok(highlightable) = highlightables.get(this) {
            commands.entity(this).try_insert(Highlighted {
                stencil: highlightable.stencil,
            });
            highlight_events.write(HighlightEvent::Highlighted(this));
            tracing::debug!(?this, "Highlighted");
        }
    }
}
