//! Core types shared by every module: actors, RNG, configuration, errors.

pub mod actor;
pub mod rng;
pub mod config;
pub mod error;

pub use actor::{Actor, ActorMap};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{
    AnimationTimings, SessionConfig, SetupForm, DEFAULT_PLAYER_NAME, DEFAULT_STARTING_MONEY,
    DEFAULT_TILE_COUNT, DEFAULT_TURN_BONUS, DEFAULT_VISIBLE_SLOTS, FALLBACK_PLAYER_NAME,
};
pub use error::{ConfigError, GameError};
