mod common;

use aura_lib::ecs::components::{Highlightable, Highlighted};
use aura_lib::ecs::interaction::HoveredEntity;
use aura_lib::events::HighlightEvent;
use bevy::prelude::*;
use common::{TestScene, count_warnings};

const LEFT: Vec3 = Vec3::new(-3.0, 1.0, -2.0);
const RIGHT: Vec3 = Vec3::new(3.0, 1.0, -2.0);
const FLOOR_SPOT: Vec3 = Vec3::new(0.0, 0.0, 5.0);

fn hovered(scene: &TestScene) -> Option<Entity> {
    scene.world().resource::<HoveredEntity>().0
}

fn is_highlighted(scene: &TestScene, entity: Entity) -> bool {
    scene.world().get::<Highlighted>(entity).is_some()
}

#[test]
fn nothing_under_cursor_stays_quiet() {
    let mut scene = TestScene::new();
    scene.spawn_enemy("Goblin", LEFT);

    scene.clear_cursor();
    scene.frame();
    scene.frame();

    assert!(scene.take_highlights().is_empty());
    assert_eq!(hovered(&scene), None);
}

#[test]
fn hovering_an_enemy_highlights_it_once() {
    let mut scene = TestScene::new();
    let goblin = scene.spawn_enemy("Goblin", LEFT);

    scene.point_cursor_at(LEFT);
    scene.frame();
    assert_eq!(
        scene.take_highlights(),
        vec![HighlightEvent::Highlighted(goblin)]
    );
    assert!(is_highlighted(&scene, goblin));
    assert_eq!(hovered(&scene), Some(goblin));

    scene.frame();
    scene.frame();
    assert!(scene.take_highlights().is_empty());
    assert!(is_highlighted(&scene, goblin));
}

#[test]
fn moving_between_enemies_swaps_highlight() {
    let mut scene = TestScene::new();
    let left = scene.spawn_enemy("Left", LEFT);
    let right = scene.spawn_enemy("Right", RIGHT);

    scene.point_cursor_at(LEFT);
    scene.frame();
    scene.take_highlights();

    scene.point_cursor_at(RIGHT);
    scene.frame();
    assert_eq!(
        scene.take_highlights(),
        vec![
            HighlightEvent::Unhighlighted(left),
            HighlightEvent::Highlighted(right),
        ]
    );
    assert!(!is_highlighted(&scene, left));
    assert!(is_highlighted(&scene, right));
    assert_eq!(hovered(&scene), Some(right));
}

#[test]
fn moving_onto_the_floor_unhighlights_enemy() {
    let mut scene = TestScene::new();
    let goblin = scene.spawn_enemy("Goblin", LEFT);
    scene.spawn_floor();

    scene.point_cursor_at(LEFT);
    scene.frame();
    scene.take_highlights();

    scene.point_cursor_at(FLOOR_SPOT);
    scene.frame();
    assert_eq!(
        scene.take_highlights(),
        vec![HighlightEvent::Unhighlighted(goblin)]
    );
    assert!(!is_highlighted(&scene, goblin));
    assert_eq!(hovered(&scene), None);

    scene.frame();
    assert!(scene.take_highlights().is_empty());
}

#[test]
fn cursor_over_nothing_keeps_current_highlight() {
    let mut scene = TestScene::new();
    let goblin = scene.spawn_enemy("Goblin", LEFT);

    scene.point_cursor_at(LEFT);
    scene.frame();
    scene.take_highlights();

    // outside the window, then over empty space
    scene.clear_cursor();
    scene.frame();
    scene.point_cursor_at(FLOOR_SPOT);
    scene.frame();

    assert!(scene.take_highlights().is_empty());
    assert!(is_highlighted(&scene, goblin));
    assert_eq!(hovered(&scene), Some(goblin));
}

#[test]
fn enemy_that_lost_highlightable_is_still_cleared() {
    let mut scene = TestScene::new();
    let left = scene.spawn_enemy("Left", LEFT);
    let right = scene.spawn_enemy("Right", RIGHT);

    scene.point_cursor_at(LEFT);
    scene.frame();
    scene.take_highlights();

    // e.g. a corpse left behind
    scene.world_mut().entity_mut(left).remove::<Highlightable>();
    scene.point_cursor_at(RIGHT);
    let warnings = count_warnings(|| scene.frame());

    assert_eq!(warnings, 0);
    assert_eq!(
        scene.take_highlights(),
        vec![
            HighlightEvent::Unhighlighted(left),
            HighlightEvent::Highlighted(right),
        ]
    );
    assert!(!is_highlighted(&scene, left));
    assert!(is_highlighted(&scene, right));
}

#[test]
fn despawned_enemy_under_floor_hover_only_warns() {
    let mut scene = TestScene::new();
    let goblin = scene.spawn_enemy("Goblin", LEFT);
    scene.spawn_floor();

    scene.point_cursor_at(LEFT);
    scene.frame();
    scene.take_highlights();

    scene.world_mut().despawn(goblin);
    scene.point_cursor_at(FLOOR_SPOT);
    let warnings = count_warnings(|| scene.frame());

    assert_eq!(warnings, 1);
    assert!(scene.take_highlights().is_empty());
    assert_eq!(hovered(&scene), None);
}

#[test]
fn despawned_enemy_is_skipped_but_new_one_highlights() {
    let mut scene = TestScene::new();
    let left = scene.spawn_enemy("Left", LEFT);
    let right = scene.spawn_enemy("Right", RIGHT);

    scene.point_cursor_at(LEFT);
    scene.frame();
    scene.take_highlights();

    scene.world_mut().despawn(left);
    scene.point_cursor_at(RIGHT);
    let warnings = count_warnings(|| scene.frame());
    assert_eq!(warnings, 1);

    assert_eq!(
        scene.take_highlights(),
        vec![HighlightEvent::Highlighted(right)]
    );
    assert!(is_highlighted(&scene, right));
}

#[test]
fn blocking_geometry_hides_enemy_behind_it() {
    let mut scene = TestScene::new();
    let goblin = scene.spawn_enemy("Goblin", LEFT);
    scene.spawn_blocker(Vec3::new(-3.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.2));

    scene.point_cursor_at(LEFT);
    scene.frame();

    assert!(scene.take_highlights().is_empty());
    assert!(!is_highlighted(&scene, goblin));
    assert_eq!(hovered(&scene), None);
}

#[test]
fn own_pawn_does_not_block_the_trace() {
    let mut scene = TestScene::new();
    // directly behind the pawn as seen from the camera
    let behind = Vec3::new(0.0, -0.5, -1.0);
    let goblin = scene.spawn_enemy("Goblin", behind);

    scene.point_cursor_at(behind);
    scene.frame();

    assert_eq!(
        scene.take_highlights(),
        vec![HighlightEvent::Highlighted(goblin)]
    );
}
