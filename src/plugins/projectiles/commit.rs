//! Deferred destroy queue: removals recorded during a frame, applied after traversal.
//!
//! This is the only path that shrinks the active pool. Entries are deduplicated on enqueue and
//! removal is by identity, so scheduling twice still removes once.

use bevy::prelude::*;

use super::instance::ProjectileHandle;
use super::kind::PerKind;
use super::pool::ActivePool;

#[derive(Debug, Default)]
pub struct DeferredDestroyQueue {
    pending: Vec<ProjectileHandle>,
}

impl DeferredDestroyQueue {
    /// Enqueue for removal. Returns `false` if it was already queued.
    pub fn schedule(&mut self, handle: ProjectileHandle) -> bool {
        if self.pending.contains(&handle) {
            return false;
        }
        self.pending.push(handle);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn contains(&self, handle: ProjectileHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Remove every queued instance from `pool`, then empty the queue.
    ///
    /// Returns how many instances were actually removed.
    pub fn commit_and_clear(&mut self, pool: &mut ActivePool) -> usize {
        let removed = self
            .pending
            .drain(..)
            .filter(|h| pool.remove_now(h.kind, h.id).is_some())
            .count();

        if removed > 0 {
            debug!("committed {removed} projectile removal(s)");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// What the visit phase of a frame update may do with the queue: schedule, nothing else.
///
/// Carries its own copy of the pool's partition registration because the pool is mutably
/// borrowed for the whole visit.
pub struct RemovalScheduler<'a> {
    queue: &'a mut DeferredDestroyQueue,
    registered: PerKind<bool>,
}

impl<'a> RemovalScheduler<'a> {
    pub fn new(queue: &'a mut DeferredDestroyQueue, registered: PerKind<bool>) -> Self {
        Self { queue, registered }
    }

    /// Mark any live projectile for removal. Unregistered kinds are ignored.
    pub fn schedule(&mut self, handle: ProjectileHandle) {
        if *self.registered.get(handle.kind) {
            self.queue.schedule(handle);
        }
    }
}
