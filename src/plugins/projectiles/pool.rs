//! Active pool: live projectile instances, one partition per kind.
//!
//! The pool is deliberately dumb. It does not enforce per-kind limits (the lifecycle manager
//! pre-checks those) and it only removes instances through [`ActivePool::remove_now`], which the
//! commit step calls after traversal has finished.

use super::instance::{ProjectileId, ProjectileInstance};
use super::kind::{PerKind, ProjectileKind};

#[derive(Debug, Default)]
pub struct ActivePool {
    partitions: PerKind<Vec<ProjectileInstance>>,
    registered: PerKind<bool>,
}

impl ActivePool {
    /// Pool with a partition registered for each of `kinds`.
    pub fn for_kinds(kinds: impl IntoIterator<Item = ProjectileKind>) -> Self {
        let mut pool = Self::default();
        for kind in kinds {
            *pool.registered.get_mut(kind) = true;
        }
        pool
    }

    #[inline]
    pub fn is_registered(&self, kind: ProjectileKind) -> bool {
        *self.registered.get(kind)
    }

    /// Snapshot of which kinds have a partition.
    pub fn registered(&self) -> PerKind<bool> {
        self.registered.clone()
    }

    #[inline]
    pub fn count(&self, kind: ProjectileKind) -> usize {
        self.partitions.get(kind).len()
    }

    pub fn total(&self) -> usize {
        self.partitions.iter().map(|(_, p)| p.len()).sum()
    }

    /// Append to the instance's partition. No cardinality check.
    pub fn insert(&mut self, instance: ProjectileInstance) {
        self.partitions.get_mut(instance.kind()).push(instance);
    }

    /// Visit every live instance. Insertion order is kept within a partition.
    ///
    /// The pool stays mutably borrowed for the whole visit, so removal during traversal is
    /// impossible; use the deferred destroy queue instead.
    pub fn for_each_mut(&mut self, mut op: impl FnMut(&mut ProjectileInstance)) {
        for partition in self.partitions.values_mut() {
            partition.iter_mut().for_each(&mut op);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectileInstance> {
        self.partitions.iter().flat_map(|(_, p)| p.iter())
    }

    pub fn partition(&self, kind: ProjectileKind) -> &[ProjectileInstance] {
        self.partitions.get(kind)
    }

    pub fn get(&self, kind: ProjectileKind, id: ProjectileId) -> Option<&ProjectileInstance> {
        self.partitions.get(kind).iter().find(|p| p.id() == id)
    }

    /// Remove by identity. Returns `None` if nothing with that id is live, which makes a second
    /// removal of the same instance a no-op.
    pub fn remove_now(&mut self, kind: ProjectileKind, id: ProjectileId) -> Option<ProjectileInstance> {
        let partition = self.partitions.get_mut(kind);
        let index = partition.iter().position(|p| p.id() == id)?;
        Some(partition.remove(index))
    }

    pub fn clear(&mut self) {
        self.partitions.values_mut().for_each(Vec::clear);
    }
}
