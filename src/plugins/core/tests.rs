use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_caller_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { rng_seed: 7, ..default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().rng_seed, 7);
}

#[test]
fn projectile_bounds_include_margin() {
    let t = Tunables {
        playfield_half_extents: Vec2::new(100.0, 50.0),
        playfield_margin: 10.0,
        rng_seed: 0,
    };
    let r = t.projectile_bounds();
    assert_eq!(r.min, Vec2::new(-110.0, -60.0));
    assert_eq!(r.max, Vec2::new(110.0, 60.0));
}
