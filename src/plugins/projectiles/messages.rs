//! Buffered intents from collaborators.
//!
//! Producers (player input, enemy formations, collision detection) never borrow the lifecycle
//! manager. They write messages; the projectile systems are the single writer of the pool.

use bevy::prelude::*;

use super::instance::ProjectileHandle;
use super::kind::ProjectileKind;

/// Ask for a projectile of `kind` at `origin`. Player requests obey the one-shot rule.
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    pub kind: ProjectileKind,
    pub origin: Vec2,
}

/// A collision detector decided this projectile is spent.
#[derive(Message, Clone, Copy, Debug)]
pub struct ProjectileHit {
    pub projectile: ProjectileHandle,
}
