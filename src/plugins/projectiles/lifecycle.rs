//! Projectile lifecycle manager: spawn, update, draw, destroy.
//!
//! # Frame protocol
//! ```text
//!   spawn_*            -> catalog picks a prototype -> pool.insert      (Active)
//!   update(dt)         -> visit phase: step every instance, schedule removals
//!                         commit phase: queue.commit_and_clear(pool)     (Removed)
//!   draw(renderer)     -> read-only visit, one draw call per instance
//! ```
//! The visit phase holds the pool mutably borrowed, so nothing can remove an instance while the
//! pool is being traversed. Removals scheduled in frame N are committed at the end of frame N's
//! update, before frame N+1 visits anything.
//!
//! A frozen frame skips the whole update (no motion, no commit). Drawing is never skipped.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::catalog::PrototypeCatalog;
use super::commit::{DeferredDestroyQueue, RemovalScheduler};
use super::error::CatalogError;
use super::instance::{ProjectileHandle, ProjectileId, ProjectileInstance, Step};
use super::kind::ProjectileKind;
use super::pool::ActivePool;
use super::render::{DrawCall, ProjectileRenderer};

#[derive(Resource, Debug)]
pub struct ProjectileLifecycle {
    catalog: PrototypeCatalog,
    pool: ActivePool,
    doomed: DeferredDestroyQueue,
    rng: ChaCha8Rng,
    bounds: Rect,
    next_id: u64,
}

impl ProjectileLifecycle {
    /// Build with an explicit random source.
    pub fn new(catalog: PrototypeCatalog, rng: ChaCha8Rng, bounds: Rect) -> Self {
        let pool = ActivePool::for_kinds(catalog.kinds());
        Self {
            catalog,
            pool,
            doomed: DeferredDestroyQueue::default(),
            rng,
            bounds,
            next_id: 0,
        }
    }

    pub fn with_seed(catalog: PrototypeCatalog, seed: u64, bounds: Rect) -> Self {
        Self::new(catalog, ChaCha8Rng::seed_from_u64(seed), bounds)
    }

    // ---------------------------------------------------------------------
    // Spawning
    // ---------------------------------------------------------------------

    /// One outstanding player shot at a time: ignored while a player projectile is live.
    pub fn spawn_player_projectile(
        &mut self,
        origin: Vec2,
    ) -> Result<Option<ProjectileHandle>, CatalogError> {
        if self.pool.count(ProjectileKind::Player) > 0 {
            debug!("player shot ignored: one already in flight");
            return Ok(None);
        }
        self.spawn(ProjectileKind::Player, origin).map(Some)
    }

    /// Enemy shots are unlimited.
    pub fn spawn_enemy_projectile(&mut self, origin: Vec2) -> Result<ProjectileHandle, CatalogError> {
        self.spawn(ProjectileKind::Enemy, origin)
    }

    /// Dispatch on kind. `Ok(None)` means the request was ignored by a spawn rule.
    pub fn spawn_projectile(
        &mut self,
        kind: ProjectileKind,
        origin: Vec2,
    ) -> Result<Option<ProjectileHandle>, CatalogError> {
        match kind {
            ProjectileKind::Player => self.spawn_player_projectile(origin),
            ProjectileKind::Enemy => self.spawn_enemy_projectile(origin).map(Some),
        }
    }

    fn spawn(&mut self, kind: ProjectileKind, origin: Vec2) -> Result<ProjectileHandle, CatalogError> {
        let prototype = self.catalog.random_prototype(kind, &mut self.rng)?.clone();
        let id = ProjectileId(self.next_id);
        self.next_id += 1;

        let instance = ProjectileInstance::new(id, prototype, origin);
        let handle = instance.handle();
        trace!("spawned {kind} projectile {id:?} at {origin}");
        self.pool.insert(instance);
        Ok(handle)
    }

    // ---------------------------------------------------------------------
    // Removal
    // ---------------------------------------------------------------------

    /// Mark for removal at the next commit. Unregistered kinds are ignored.
    pub fn schedule_removal(&mut self, handle: ProjectileHandle) {
        if !self.pool.is_registered(handle.kind) {
            return;
        }
        self.doomed.schedule(handle);
    }

    // ---------------------------------------------------------------------
    // Frame
    // ---------------------------------------------------------------------

    pub fn update(&mut self, dt: f32, frozen: bool) {
        self.update_with(dt, frozen, |_, _| {});
    }

    /// Frame update with a collision collaborator.
    ///
    /// `visit` sees each instance after it moved, together with the frame's removal scheduler.
    /// It may schedule any live instance, not just the one it is looking at; everything scheduled
    /// here is committed at the end of this update, after every instance has been visited.
    pub fn update_with(
        &mut self,
        dt: f32,
        frozen: bool,
        mut visit: impl FnMut(&ProjectileInstance, &mut RemovalScheduler<'_>),
    ) {
        if frozen {
            return;
        }

        let bounds = self.bounds;
        let mut removals = RemovalScheduler::new(&mut self.doomed, self.pool.registered());
        self.pool.for_each_mut(|projectile| {
            if projectile.step(dt, bounds) == Step::OutOfBounds {
                removals.schedule(projectile.handle());
            }
            visit(projectile, &mut removals);
        });

        self.doomed.commit_and_clear(&mut self.pool);
    }

    pub fn draw(&self, renderer: &mut impl ProjectileRenderer) {
        for projectile in self.pool.iter() {
            let prototype = projectile.prototype();
            renderer.draw(DrawCall {
                sprite: projectile.sprite(),
                position: projectile.position,
                size: prototype.size,
                tint: prototype.tint,
            });
        }
    }

    /// Drop every live instance and pending removal.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.doomed.clear();
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[inline]
    pub fn count(&self, kind: ProjectileKind) -> usize {
        self.pool.count(kind)
    }

    pub fn pending_removals(&self) -> usize {
        self.doomed.len()
    }

    pub fn get(&self, handle: ProjectileHandle) -> Option<&ProjectileInstance> {
        self.pool.get(handle.kind, handle.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectileInstance> {
        self.pool.iter()
    }

    pub fn catalog(&self) -> &PrototypeCatalog {
        &self.catalog
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
