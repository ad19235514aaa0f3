//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Half width / half height of the playable area, centred on the origin.
    pub playfield_half_extents: Vec2,
    /// Extra room past the edge before a projectile counts as gone.
    pub playfield_margin: f32,
    pub rng_seed: u64,
}

impl Tunables {
    /// Playfield rectangle projectiles are allowed to live in.
    pub fn projectile_bounds(&self) -> Rect {
        let half = self.playfield_half_extents + Vec2::splat(self.playfield_margin);
        Rect::from_center_half_size(Vec2::ZERO, half)
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            playfield_half_extents: Vec2::new(640.0, 360.0),
            playfield_margin: 32.0,
            rng_seed: 0x5eed,
        }
    }
}
