//! Test helpers.
//!
//! `World::run_system_once` (via `RunSystemOnce`) runs a single system without building a
//! schedule. Anything a system queues through `Commands` is applied by `world.flush()` before
//! the caller asserts.

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Make sure `Messages<M>` exists so `MessageReader<M>` / `MessageWriter<M>` can be used.
pub fn ensure_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}
