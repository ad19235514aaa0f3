//! Spawn consumer: turn spawn requests into live projectiles.
//!
//! # Fail-fast
//! Asking for a kind with no prototypes means the catalog and the producers disagree. That is a
//! configuration bug, so we panic with the catalog error instead of dropping the request.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::lifecycle::ProjectileLifecycle;
use super::messages::SpawnProjectileRequest;

pub fn apply_spawn_requests(
    mut lifecycle: ResMut<ProjectileLifecycle>,
    mut reader: MessageReader<SpawnProjectileRequest>,
) {
    for req in reader.read() {
        if let Err(e) = lifecycle.spawn_projectile(req.kind, req.origin) {
            panic!("projectile catalog misconfigured: {e}");
        }
    }
}
