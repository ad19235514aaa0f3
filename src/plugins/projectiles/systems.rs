//! Per-frame update and draw systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::state::GameState;

use super::lifecycle::ProjectileLifecycle;
use super::messages::ProjectileHit;

/// Schedule reported hits, then run the frame update (which commits all removals).
///
/// Hits read while frozen stay queued and are committed by the first unfrozen frame.
pub fn advance_projectiles(
    time: Res<Time>,
    state: Res<State<GameState>>,
    mut hits: MessageReader<ProjectileHit>,
    mut lifecycle: ResMut<ProjectileLifecycle>,
) {
    for hit in hits.read() {
        lifecycle.schedule_removal(hit.projectile);
    }
    lifecycle.update(time.delta_secs(), state.get().is_frozen());
}

/// Render-only: draw every live projectile with gizmos. Runs while frozen too.
pub fn draw_projectiles(lifecycle: Res<ProjectileLifecycle>, mut gizmos: Gizmos) {
    lifecycle.draw(&mut gizmos);
}
