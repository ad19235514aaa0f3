//! Live projectile instances.

use std::sync::Arc;

use bevy::prelude::*;

use super::kind::ProjectileKind;
use super::prototype::ProjectilePrototype;

/// Identity of a spawned projectile. Never reused within one lifecycle manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

/// Names one live projectile: its partition plus its identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProjectileHandle {
    pub kind: ProjectileKind,
    pub id: ProjectileId,
}

/// Result of one instance's per-frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Keep,
    /// Left the playfield; the instance asks to be removed.
    OutOfBounds,
}

#[derive(Debug, Clone)]
pub struct ProjectileInstance {
    id: ProjectileId,
    prototype: Arc<ProjectilePrototype>,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Seconds of animation played so far.
    pub clock: f32,
}

impl ProjectileInstance {
    pub fn new(id: ProjectileId, prototype: Arc<ProjectilePrototype>, position: Vec2) -> Self {
        let velocity = prototype.velocity();
        Self {
            id,
            prototype,
            position,
            velocity,
            clock: 0.0,
        }
    }

    #[inline]
    pub fn id(&self) -> ProjectileId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ProjectileKind {
        self.prototype.kind
    }

    #[inline]
    pub fn handle(&self) -> ProjectileHandle {
        ProjectileHandle {
            kind: self.kind(),
            id: self.id,
        }
    }

    #[inline]
    pub fn prototype(&self) -> &ProjectilePrototype {
        &self.prototype
    }

    /// Sprite for the current animation frame.
    #[inline]
    pub fn sprite(&self) -> &str {
        self.prototype.sprite_at(self.clock)
    }

    /// Straight-line motion plus animation clock, then a bounds check.
    pub fn step(&mut self, dt: f32, bounds: Rect) -> Step {
        self.position += self.velocity * dt;
        self.clock += dt;

        if bounds.contains(self.position) {
            Step::Keep
        } else {
            Step::OutOfBounds
        }
    }
}
