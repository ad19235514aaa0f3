//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.
//!
//! Both take the prototype catalog as a value. Loading it is the caller's job, so a malformed
//! catalog stops startup before any `App` exists.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;
use crate::plugins::projectiles::{CatalogError, PrototypeCatalog};

pub fn run() -> Result<(), CatalogError> {
    let catalog = PrototypeCatalog::builtin()?;

    let mut app = App::new();
    configure_full(&mut app, catalog);
    app.run();
    Ok(())
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App, catalog: PrototypeCatalog) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Projectile Lifecycle".into(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));
    app.add_systems(Startup, spawn_camera);

    configure_game(app, catalog);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (gizmo drawing).
pub fn configure_headless(app: &mut App, catalog: PrototypeCatalog) {
    configure_game(app, catalog);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App, catalog: PrototypeCatalog) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app, catalog);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("MainCamera"), Camera2d));
}
