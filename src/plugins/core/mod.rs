//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

/// Inserts [`Tunables`] unless the caller already provided one.
pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)));
}

#[cfg(test)]
mod tests;
