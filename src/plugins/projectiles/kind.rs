//! Partition key for every projectile collection.

use std::fmt;

use bevy::prelude::*;

/// Closed set of projectile kinds.
///
/// Each kind owns one partition of the active pool and one prototype list in the catalog.
/// Partitions are indexed by [`ProjectileKind::index`], so adding a variant means adding it to
/// [`ProjectileKind::ALL`] as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectileKind {
    Player,
    Enemy,
}

/// Number of partitions.
pub const KIND_COUNT: usize = ProjectileKind::ALL.len();

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 2] = [ProjectileKind::Player, ProjectileKind::Enemy];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
        }
    }

    /// Tag used in prototype data. Matching is case-insensitive.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// Direction of travel. Player shots climb, enemy shots fall.
    #[inline]
    pub fn heading(self) -> Vec2 {
        match self {
            Self::Player => Vec2::Y,
            Self::Enemy => Vec2::NEG_Y,
        }
    }
}

impl fmt::Display for ProjectileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fixed-size table with one slot per [`ProjectileKind`].
///
/// Every slot exists from construction, so lookups never need an existence check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerKind<T> {
    slots: [T; KIND_COUNT],
}

impl<T> PerKind<T> {
    #[inline]
    pub fn get(&self, kind: ProjectileKind) -> &T {
        &self.slots[kind.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, kind: ProjectileKind) -> &mut T {
        &mut self.slots[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectileKind, &T)> {
        ProjectileKind::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }
}
