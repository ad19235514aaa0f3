//! Prototype records (as loaded) and prototypes (as validated).

use bevy::prelude::*;
use serde::Deserialize;

use super::error::CatalogError;
use super::kind::ProjectileKind;

const DEFAULT_DAMAGE: i32 = 1;
const DEFAULT_FRAME_SECONDS: f32 = 0.1;
const DEFAULT_SIZE: f32 = 8.0;
const DEFAULT_TINT: [f32; 3] = [1.0, 1.0, 1.0];

/// One record as it appears in prototype data.
///
/// Only `type`, `sprite` and `speed` are required. The `type` tag stays a string here so that an
/// unknown tag can be reported with its record index instead of as a generic parse failure.
/// Fields the core does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrototypeRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub sprite: String,
    pub speed: f32,
    #[serde(default = "default_damage")]
    pub damage: i32,
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(default = "default_frame_seconds")]
    pub frame_seconds: f32,
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_tint")]
    pub tint: [f32; 3],
}

fn default_damage() -> i32 {
    DEFAULT_DAMAGE
}

fn default_frame_seconds() -> f32 {
    DEFAULT_FRAME_SECONDS
}

fn default_size() -> f32 {
    DEFAULT_SIZE
}

fn default_tint() -> [f32; 3] {
    DEFAULT_TINT
}

impl PrototypeRecord {
    /// Minimal record with defaults for every optional field.
    pub fn new(kind: ProjectileKind, sprite: impl Into<String>, speed: f32) -> Self {
        Self {
            kind: kind.tag().to_owned(),
            sprite: sprite.into(),
            speed,
            damage: DEFAULT_DAMAGE,
            frames: Vec::new(),
            frame_seconds: DEFAULT_FRAME_SECONDS,
            size: DEFAULT_SIZE,
            tint: DEFAULT_TINT,
        }
    }
}

/// Immutable template for one projectile variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectilePrototype {
    pub kind: ProjectileKind,
    pub sprite: String,
    pub speed: f32,
    pub damage: i32,
    pub frames: Vec<String>,
    pub frame_seconds: f32,
    pub size: f32,
    pub tint: Color,
}

impl ProjectilePrototype {
    /// Validate a record. `index` is the record's position in its source, for error reporting.
    pub fn from_record(index: usize, record: PrototypeRecord) -> Result<Self, CatalogError> {
        let Some(kind) = ProjectileKind::from_tag(&record.kind) else {
            return Err(CatalogError::malformed(
                index,
                format!("unknown projectile type `{}`", record.kind),
            ));
        };
        if record.sprite.trim().is_empty() {
            return Err(CatalogError::malformed(index, "empty sprite reference"));
        }
        if !record.speed.is_finite() || record.speed < 0.0 {
            return Err(CatalogError::malformed(
                index,
                format!("speed must be finite and >= 0, got {}", record.speed),
            ));
        }
        if !record.frame_seconds.is_finite() || record.frame_seconds <= 0.0 {
            return Err(CatalogError::malformed(index, "frame_seconds must be > 0"));
        }
        if !record.size.is_finite() || record.size <= 0.0 {
            return Err(CatalogError::malformed(index, "size must be > 0"));
        }

        let [r, g, b] = record.tint;
        Ok(Self {
            kind,
            sprite: record.sprite,
            speed: record.speed,
            damage: record.damage,
            frames: record.frames,
            frame_seconds: record.frame_seconds,
            size: record.size,
            tint: Color::srgb(r, g, b),
        })
    }

    /// Straight-line velocity for instances of this prototype.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.kind.heading() * self.speed
    }

    /// Sprite to draw after `clock` seconds of animation.
    pub fn sprite_at(&self, clock: f32) -> &str {
        if self.frames.is_empty() {
            return &self.sprite;
        }
        let frame = (clock / self.frame_seconds).floor() as usize % self.frames.len();
        &self.frames[frame]
    }
}
