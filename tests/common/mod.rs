//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `projectile_lifecycle::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed 1/60 s per `app.update()` so positions are predictable.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use projectile_lifecycle::common::state::GameState;
use projectile_lifecycle::plugins::projectiles::{PrototypeCatalog, ProjectileLifecycle};

pub const FRAME: Duration = Duration::from_micros(16_667);

pub fn app_headless() -> App {
    app_with_catalog(PrototypeCatalog::builtin().expect("shipped catalog is valid"))
}

pub fn app_with_catalog(catalog: PrototypeCatalog) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    projectile_lifecycle::game::configure_headless(&mut app, catalog);
    app
}

pub fn set_state(app: &mut App, state: GameState) {
    app.world_mut().resource_mut::<NextState<GameState>>().set(state);
    app.update();
}

pub fn lifecycle(app: &App) -> &ProjectileLifecycle {
    app.world().resource::<ProjectileLifecycle>()
}
