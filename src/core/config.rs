//! Session configuration.
//!
//! Hosts build a `SessionConfig` up front (or accept the defaults) and
//! may let the player edit two fields on the setup screen through a
//! `SetupForm`:
//! - Tile count: parsed from text, bad input is ignored
//! - Player name: empty input falls back to a default
//!
//! Everything is validated once more when the game starts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Default number of tiles on the board.
pub const DEFAULT_TILE_COUNT: usize = 20;

/// Default number of tiles visible in a lane at once.
pub const DEFAULT_VISIBLE_SLOTS: usize = 2;

/// Name shown for the human before anything is typed.
pub const DEFAULT_PLAYER_NAME: &str = "Alice";

/// Name used when the player clears the name field.
pub const FALLBACK_PLAYER_NAME: &str = "Player1";

/// Gold both actors start with.
pub const DEFAULT_STARTING_MONEY: i64 = 100;

/// Gold granted at turn start by the `bonus` power.
pub const DEFAULT_TURN_BONUS: i64 = 30;

/// Durations of the animated steps of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationTimings {
    /// Random faces flashed before the final roll is shown.
    pub flicker_frames: u32,

    /// Time each flicker frame stays on screen.
    pub flicker_interval: Duration,

    /// Time for a lane to slide to its new window.
    pub lane_slide: Duration,

    /// Pause before the bot rolls.
    pub bot_think: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            flicker_frames: 20,
            flicker_interval: Duration::from_millis(50),
            lane_slide: Duration::from_millis(900),
            bot_think: Duration::ZERO,
        }
    }
}

impl AnimationTimings {
    /// All steps fire on the next tick. Handy for tests and headless runs.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            flicker_frames: 0,
            flicker_interval: Duration::ZERO,
            lane_slide: Duration::ZERO,
            bot_think: Duration::ZERO,
        }
    }

    /// Time from the first flicker frame until the final faces show.
    #[must_use]
    pub fn roll_duration(&self) -> Duration {
        self.flicker_interval * self.flicker_frames
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Tiles on the board, `start` and `end` included.
    pub tile_count: usize,

    /// Tiles a lane shows at once.
    pub visible_slots: usize,

    /// Display name of the human player.
    pub player_name: String,

    /// Gold each actor starts with.
    pub starting_money: i64,

    /// Gold added at turn start for the `bonus` power.
    pub turn_bonus: i64,

    /// Seed for board generation, powers and dice.
    pub seed: u64,

    /// Animation durations.
    pub timings: AnimationTimings,

    /// Start playing immediately instead of waiting on the setup screen.
    pub skip_setup: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            visible_slots: DEFAULT_VISIBLE_SLOTS,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            starting_money: DEFAULT_STARTING_MONEY,
            turn_bonus: DEFAULT_TURN_BONUS,
            seed: 42,
            timings: AnimationTimings::default(),
            skip_setup: false,
        }
    }
}

impl SessionConfig {
    /// Create a config with defaults and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the tile count.
    #[must_use]
    pub fn with_tile_count(mut self, tile_count: usize) -> Self {
        self.tile_count = tile_count;
        self
    }

    /// Set the number of visible slots per lane.
    #[must_use]
    pub fn with_visible_slots(mut self, visible_slots: usize) -> Self {
        self.visible_slots = visible_slots;
        self
    }

    /// Set the human player's name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set the starting gold.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the animation timings.
    #[must_use]
    pub fn with_timings(mut self, timings: AnimationTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Skip the setup screen and start as soon as the session is created.
    #[must_use]
    pub fn skip_setup(mut self) -> Self {
        self.skip_setup = true;
        self
    }

    /// Check the board and lane dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_slots == 0 {
            return Err(ConfigError::NoVisibleSlots);
        }
        if self.tile_count < 2 {
            return Err(ConfigError::TileCountTooSmall(self.tile_count));
        }
        if self.tile_count < self.visible_slots {
            return Err(ConfigError::TileCountBelowVisibleSlots {
                tile_count: self.tile_count,
                visible_slots: self.visible_slots,
            });
        }
        Ok(())
    }
}

/// Editor for the fields the setup screen exposes.
///
/// Borrowed from an idle session, see `GameSession::setup_form`.
pub struct SetupForm<'a> {
    config: &'a mut SessionConfig,
}

impl<'a> SetupForm<'a> {
    pub(crate) fn new(config: &'a mut SessionConfig) -> Self {
        Self { config }
    }

    /// Apply the text of the tile count field.
    ///
    /// Returns false and keeps the previous value when the text is not an
    /// integer. Parsed values are floored at 1; whether the count fits the
    /// lanes is only checked when the game starts.
    pub fn set_tile_count_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<i64>() {
            Ok(value) => {
                self.config.tile_count = usize::try_from(value.max(1)).unwrap_or(usize::MAX);
                true
            }
            Err(_) => {
                log::debug!("ignoring tile count input {:?}", text);
                false
            }
        }
    }

    /// Apply the text of the player name field.
    pub fn set_player_name_text(&mut self, text: &str) {
        self.config.player_name = if text.is_empty() {
            FALLBACK_PLAYER_NAME.to_string()
        } else {
            text.to_string()
        };
    }

    /// The config as currently edited.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        self.config
    }
}
