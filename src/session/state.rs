//! Turn states, the transition table and the game result.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, GameError};

/// Named states of the turn machine.
///
/// ```text
/// Idle -> PlayGame -> RollDice -> MovePlayer -> PlayGame -> ...
///            |
///            +-> GameOver
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Setup screen: tile count and player name can be edited.
    Idle,
    /// Turn announced; waiting for the human to confirm, or about to roll for the bot.
    PlayGame,
    /// Dice animation running.
    RollDice,
    /// Lane sliding, then the action prompt.
    MovePlayer,
    /// Terminal.
    GameOver,
}

impl TurnState {
    /// States reachable from this one.
    #[must_use]
    pub const fn successors(self) -> &'static [TurnState] {
        match self {
            TurnState::Idle => &[TurnState::PlayGame],
            TurnState::PlayGame => &[TurnState::RollDice, TurnState::GameOver],
            TurnState::RollDice => &[TurnState::MovePlayer],
            TurnState::MovePlayer => &[TurnState::PlayGame],
            TurnState::GameOver => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: TurnState) -> bool {
        self.successors().contains(&next)
    }

    /// Checked transition.
    pub fn transition_to(self, next: TurnState) -> Result<TurnState, GameError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(GameError::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The other actor ran out of gold.
    Winner(Actor),
    /// Both actors ran out of gold at the same check.
    Draw,
}

impl GameResult {
    /// Build the result from the actors that lost. `None` if nobody lost.
    #[must_use]
    pub fn from_losers(losers: &[Actor]) -> Option<Self> {
        match losers {
            [] => None,
            [loser] => Some(GameResult::Winner(loser.other())),
            _ => Some(GameResult::Draw),
        }
    }
}
