//! End-to-end flow through the plugin: spawn requests in, hits in, frames ticking.
//!
//! `draw_projectiles` is not exercised here: it needs `Gizmos`, which only exist with the render
//! plugins. Drawing while frozen is covered on `ProjectileLifecycle::draw` in the unit tests
//! (`frozen_update_changes_nothing_but_draw_still_runs`).

mod common;

use bevy::prelude::*;
use projectile_lifecycle::common::state::GameState;
use projectile_lifecycle::plugins::projectiles::{
    ProjectileHit, ProjectileKind, SpawnProjectileRequest,
};

fn request(app: &mut App, kind: ProjectileKind, origin: Vec2) {
    app.world_mut().write_message(SpawnProjectileRequest { kind, origin });
}

#[test]
fn one_player_shot_many_enemy_shots() {
    let mut app = common::app_headless();
    app.update();

    request(&mut app, ProjectileKind::Player, Vec2::ZERO);
    request(&mut app, ProjectileKind::Player, Vec2::new(5.0, 5.0));
    for _ in 0..3 {
        request(&mut app, ProjectileKind::Enemy, Vec2::ZERO);
    }
    app.update();

    let lc = common::lifecycle(&app);
    assert_eq!(lc.count(ProjectileKind::Player), 1);
    assert_eq!(lc.count(ProjectileKind::Enemy), 3);

    let player = lc.iter().find(|p| p.kind() == ProjectileKind::Player).unwrap();
    assert_eq!(player.position.x, 0.0);
    assert!(player.position.y > 0.0, "player shot should have moved up");
}

#[test]
fn hit_frees_the_player_slot() {
    let mut app = common::app_headless();
    app.update();

    request(&mut app, ProjectileKind::Player, Vec2::ZERO);
    app.update();
    let handle = common::lifecycle(&app)
        .iter()
        .next()
        .map(|p| p.handle())
        .expect("player shot spawned");

    app.world_mut().write_message(ProjectileHit { projectile: handle });
    app.update();
    assert_eq!(common::lifecycle(&app).count(ProjectileKind::Player), 0);

    request(&mut app, ProjectileKind::Player, Vec2::ZERO);
    app.update();
    let lc = common::lifecycle(&app);
    assert_eq!(lc.count(ProjectileKind::Player), 1);
    assert!(lc.get(handle).is_none());
}

#[test]
fn player_shot_leaves_the_playfield_on_its_own() {
    let mut app = common::app_headless();
    app.update();

    let top = common::lifecycle(&app).bounds().max.y;
    request(&mut app, ProjectileKind::Player, Vec2::new(0.0, top - 1.0));
    // 720 units/s for one frame is ~12 units: out on the first update.
    app.update();
    assert_eq!(common::lifecycle(&app).count(ProjectileKind::Player), 0);
}

#[test]
fn frozen_frames_hold_positions() {
    let mut app = common::app_headless();
    app.update();

    request(&mut app, ProjectileKind::Enemy, Vec2::ZERO);
    request(&mut app, ProjectileKind::Player, Vec2::ZERO);
    app.update();

    common::set_state(&mut app, GameState::Frozen);
    let before: Vec<Vec2> = common::lifecycle(&app).iter().map(|p| p.position).collect();

    for _ in 0..5 {
        app.update();
    }

    let lc = common::lifecycle(&app);
    let after: Vec<Vec2> = lc.iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(lc.count(ProjectileKind::Enemy), 1);
    assert_eq!(lc.count(ProjectileKind::Player), 1);
}
