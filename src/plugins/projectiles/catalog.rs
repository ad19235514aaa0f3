//! Prototype catalog: immutable templates indexed by kind.
//!
//! Built once at startup. After that every call is a read; random selection takes the RNG as an
//! argument so the catalog itself holds no mutable state.

use std::sync::Arc;

use bevy::prelude::*;
use rand::Rng;
use serde_json::Value;

use super::error::CatalogError;
use super::kind::{PerKind, ProjectileKind};
use super::prototype::{ProjectilePrototype, PrototypeRecord};

/// Default prototype data shipped with the game.
pub const DEFAULT_PROTOTYPES: &str = include_str!("../../../assets/projectiles.json");

#[derive(Clone, Debug, Default)]
pub struct PrototypeCatalog {
    by_kind: PerKind<Vec<Arc<ProjectilePrototype>>>,
}

impl PrototypeCatalog {
    /// Index an ordered sequence of records. Order within a kind is preserved.
    ///
    /// Fails on the first record that is not a valid prototype.
    pub fn from_records(
        records: impl IntoIterator<Item = PrototypeRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            let prototype = ProjectilePrototype::from_record(index, record)?;
            catalog.by_kind.get_mut(prototype.kind).push(Arc::new(prototype));
        }

        for (kind, prototypes) in catalog.by_kind.iter() {
            info!("projectile catalog: {} `{kind}` prototype(s)", prototypes.len());
        }
        Ok(catalog)
    }

    /// Parse a JSON array of prototype records.
    ///
    /// Each element is decoded on its own so a failure names the offending record.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(source)
            .map_err(|e| CatalogError::MalformedDocument(format!("invalid JSON: {e}")))?;
        let Value::Array(items) = document else {
            return Err(CatalogError::MalformedDocument(
                "expected an array of records".to_owned(),
            ));
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<PrototypeRecord>(item)
                    .map_err(|e| CatalogError::malformed(index, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// The catalog built from [`DEFAULT_PROTOTYPES`].
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(DEFAULT_PROTOTYPES)
    }

    /// Uniformly random prototype of `kind`.
    pub fn random_prototype<R: Rng>(
        &self,
        kind: ProjectileKind,
        rng: &mut R,
    ) -> Result<&Arc<ProjectilePrototype>, CatalogError> {
        let prototypes = self.by_kind.get(kind);
        if prototypes.is_empty() {
            return Err(CatalogError::UnknownType(kind));
        }
        Ok(&prototypes[rng.gen_range(0..prototypes.len())])
    }

    #[inline]
    pub fn prototypes(&self, kind: ProjectileKind) -> &[Arc<ProjectilePrototype>] {
        self.by_kind.get(kind)
    }

    /// Kinds with at least one prototype.
    pub fn kinds(&self) -> impl Iterator<Item = ProjectileKind> + '_ {
        self.by_kind
            .iter()
            .filter(|(_, prototypes)| !prototypes.is_empty())
            .map(|(kind, _)| kind)
    }

    pub fn len(&self) -> usize {
        self.by_kind.iter().map(|(_, prototypes)| prototypes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
