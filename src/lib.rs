//! # lane-monopoly
//!
//! Game core for a two-player, Monopoly-inspired lane board game: the
//! human against a bot, each walking their own lane over a shared,
//! randomly generated board.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering and no clock. Hosts feed input events and
//!    frame ticks, then read status text, lane views and an event queue.
//!
//! 2. **Explicit State Machine**: Turn states form a closed enum with a
//!    transition table. Illegal transitions are errors, not silent no-ops.
//!
//! 3. **Deterministic**: One seed drives the board, the powers and the
//!    dice. Cosmetic dice flicker uses its own stream.
//!
//! ## Modules
//!
//! - `core`: Actors, RNG, configuration, errors
//! - `board`: Tiles and board generation
//! - `inventory`: Gold and powers
//! - `lane`: Per-actor lane positions and visible windows
//! - `action`: Landing prompts and bot policies
//! - `schedule`: Delayed steps for animations
//! - `session`: The turn state machine
//! - `menu`: Title screen settings menu

pub mod core;
pub mod board;
pub mod inventory;
pub mod lane;
pub mod action;
pub mod schedule;
pub mod session;
pub mod menu;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorMap,
    GameRng, GameRngState,
    SessionConfig, AnimationTimings, SetupForm,
    ConfigError, GameError,
};

pub use crate::board::{generate, Board, Tile, TileCategory};

pub use crate::inventory::{Ledger, Power};

pub use crate::lane::{LaneView, Lanes};

pub use crate::action::{ActionChoice, ActionPolicy, ActionPrompt, SkipPolicy};

pub use crate::schedule::Scheduler;

pub use crate::session::{
    GameSession, SessionSnapshot, TurnState, GameResult,
    DiceRoll, TurnContext, TurnRecord,
    InputEvent, InputOutcome, SessionEvent,
};

pub use crate::menu::{MenuOption, SettingsMenu};
