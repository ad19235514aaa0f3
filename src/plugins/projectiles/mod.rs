//! Projectiles plugin: transient projectile lifecycle (spawn → update → draw → destroy).
//!
//! # Philosophy: invariants first
//! The lifecycle core (catalog, pool, destroy queue, manager) is plain Rust. The ECS only hosts
//! it: one resource, two messages, three systems. Correctness rules live in the core where they
//! can be tested without an `App`:
//! - at most one live `Player` projectile (pre-insert check in the manager),
//! - nothing is removed from the pool while it is being traversed (deferred destroy queue),
//! - every spawn picks a prototype uniformly at random from its kind (seeded RNG).
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producers (elsewhere): write SpawnProjectileRequest { kind, origin }  │
//!│                                                                            │
//!│  (B) Consumer: apply_spawn_requests                                        │
//!│      - reads: SpawnProjectileRequest messages                              │
//!│      - mutates: ProjectileLifecycle (catalog pick -> pool insert)          │
//!│                                                                            │
//!│  (C) Collision detector (elsewhere): write ProjectileHit { projectile }    │
//!│                                                                            │
//!│  (D) advance_projectiles                                                   │
//!│      - reads: ProjectileHit messages, Time, State<GameState>               │
//!│      - visit: step every instance, schedule out-of-bounds + hit removals   │
//!│      - commit: drain destroy queue into the pool                           │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate (render builds only)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (E) draw_projectiles: read-only, one gizmo per live projectile            │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Where do we still branch?
//! - Player spawn while a player shot is live → ignored (game rule).
//! - Frozen state → update skipped entirely, draw still runs.
//! - Removal for a kind with no partition → ignored.
//! Everything else (unknown kind at spawn, malformed data at load) is a configuration error.

pub mod kind;
pub mod error;
pub mod prototype;
pub mod catalog;
pub mod instance;
pub mod pool;
pub mod commit;
pub mod lifecycle;
pub mod render;

pub mod messages;
pub mod allocator;
pub mod systems;

use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub use catalog::PrototypeCatalog;
pub use error::CatalogError;
pub use instance::{ProjectileHandle, ProjectileId, ProjectileInstance};
pub use kind::ProjectileKind;
pub use lifecycle::ProjectileLifecycle;
pub use messages::{ProjectileHit, SpawnProjectileRequest};

/// Gameplay half of the projectile pipeline. Works headless.
///
/// Reads [`Tunables`] at build time, so the core plugin must be added first.
pub struct ProjectilesPlugin {
    catalog: PrototypeCatalog,
}

impl ProjectilesPlugin {
    pub fn new(catalog: PrototypeCatalog) -> Self {
        Self { catalog }
    }
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let tunables = app.world().resource::<Tunables>().clone();

        app.insert_resource(ProjectileLifecycle::with_seed(
            self.catalog.clone(),
            tunables.rng_seed,
            tunables.projectile_bounds(),
        ));

        app.add_message::<SpawnProjectileRequest>()
            .add_message::<ProjectileHit>();

        // Spawn first so a projectile requested this frame also moves this frame.
        app.add_systems(
            Update,
            (
                allocator::apply_spawn_requests,
                systems::advance_projectiles.after(allocator::apply_spawn_requests),
            ),
        );
    }
}

/// Render half: gizmo drawing. Needs the gizmo plugin (DefaultPlugins).
pub fn render_plugin(app: &mut App) {
    app.add_systems(PostUpdate, systems::draw_projectiles);
}
