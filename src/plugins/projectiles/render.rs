//! Write-only render sink for projectiles.

use bevy::prelude::*;

/// One draw request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall<'a> {
    pub sprite: &'a str,
    pub position: Vec2,
    pub size: f32,
    pub tint: Color,
}

pub trait ProjectileRenderer {
    fn draw(&mut self, call: DrawCall<'_>);
}

/// Draws each projectile as a gizmo circle. Sprite names are ignored; size and tint are not.
impl ProjectileRenderer for Gizmos<'_, '_> {
    fn draw(&mut self, call: DrawCall<'_>) {
        self.circle_2d(call.position, call.size * 0.5, call.tint);
    }
}

/// Collects draw calls. Useful for headless checks of what would be drawn.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub calls: Vec<(String, Vec2)>,
}

impl ProjectileRenderer for RecordingRenderer {
    fn draw(&mut self, call: DrawCall<'_>) {
        self.calls.push((call.sprite.to_owned(), call.position));
    }
}
