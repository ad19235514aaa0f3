//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::{PrototypeCatalog, ProjectilesPlugin};

pub mod core;
pub mod projectiles;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App, catalog: PrototypeCatalog) {
    core::plugin(app);
    app.add_plugins(ProjectilesPlugin::new(catalog));
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    projectiles::render_plugin(app);
}
