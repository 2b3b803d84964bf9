//! Dice and per-turn bookkeeping.

use serde::{Deserialize, Serialize};

use crate::action::ActionChoice;
use crate::core::{Actor, GameRng};

/// Faces of the two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Roll both dice independently.
    pub fn roll(rng: &mut GameRng) -> Self {
        let first = rng.roll_die();
        let second = rng.roll_die();
        Self { first, second }
    }

    /// Tiles to move (2..=12).
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.first + self.second
    }
}

impl Default for DiceRoll {
    /// Both dice show one before the first roll.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Whose turn it is and what was last rolled.
///
/// Lane positions live in `Lanes`; this only tracks turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    pub actor: Actor,
    /// Turn number, starting at 1. One turn is one actor's move.
    pub turn: u32,
    pub dice: DiceRoll,
}

impl Default for TurnContext {
    fn default() -> Self {
        Self {
            actor: Actor::Human,
            turn: 1,
            dice: DiceRoll::default(),
        }
    }
}

impl TurnContext {
    /// Hand the turn to the other actor.
    pub fn pass_turn(&mut self) {
        self.actor = self.actor.other();
        self.turn += 1;
    }
}

/// One completed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub actor: Actor,
    pub dice: DiceRoll,
    /// Board index the actor landed on.
    pub tile_index: usize,
    pub choice: ActionChoice,
}
