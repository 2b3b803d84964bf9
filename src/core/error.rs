//! Error types.
//!
//! Configuration problems are reported as `ConfigError` and wrapped in
//! `GameError` at the session boundary. Malformed text typed into the
//! setup form is not an error: it is ignored and the old value is kept.

use thiserror::Error;

use super::actor::Actor;
use crate::session::TurnState;

/// Rejected session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A board needs at least `start` and `end`.
    #[error("tile count {0} is too small, a board needs at least 2 tiles")]
    TileCountTooSmall(usize),

    /// The lane window would be wider than the board.
    #[error("tile count {tile_count} is smaller than the {visible_slots} visible slots")]
    TileCountBelowVisibleSlots {
        tile_count: usize,
        visible_slots: usize,
    },

    /// A lane must show at least one tile.
    #[error("at least one visible slot is required")]
    NoVisibleSlots,
}

/// Errors returned by session operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("game has not started yet")]
    NotStarted,

    #[error("game already finished")]
    GameFinished,

    #[error("setup can only change before the game starts (current state {0:?})")]
    NotIdle(TurnState),

    #[error("no action prompt is open")]
    NoPendingPrompt,

    #[error("action prompt for {0} was already answered")]
    PromptAlreadyResolved(Actor),

    #[error("illegal transition from {from:?} to {to:?}")]
    IllegalTransition { from: TurnState, to: TurnState },
}
