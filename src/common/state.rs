//! Global state machine.
//!
//! `Frozen` suspends gameplay updates (death / pause animation) while rendering continues.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    Frozen,
}

impl GameState {
    #[inline]
    pub fn is_frozen(self) -> bool {
        self == Self::Frozen
    }
}
