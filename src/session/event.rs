//! Session input and output signals.
//!
//! Input arrives as `InputEvent`s from whatever the host maps its keys
//! to. Output is a queue of `SessionEvent`s the renderer drains each
//! frame, next to the pull-style accessors on `GameSession`.

use serde::{Deserialize, Serialize};

use super::state::{GameResult, TurnState};
use super::turn::DiceRoll;
use crate::action::{ActionChoice, ActionPrompt};
use crate::core::Actor;
use crate::lane::{LaneSlide, LaneView};

/// Discrete player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Enter: start the game from setup, or roll on the human's turn.
    Confirm,
    /// Step a lane by `delta` tiles (arrow keys / A-D in the prototype).
    Navigate { lane: Actor, delta: i64 },
    /// Answer the open action prompt.
    Choose(ActionChoice),
    /// Quit.
    Escape,
}

/// What happened to an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Accepted,
    /// Not meaningful right now (e.g. confirm while the dice roll).
    Ignored,
}

/// Output signals for the rendering layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    StateChanged { from: TurnState, to: TurnState },
    StatusChanged(String),
    /// Gold or power display of an actor changed.
    InventoryChanged(Actor),
    /// Dice faces to show (flicker frames and the final roll).
    DiceFaces(DiceRoll),
    LaneSlideStarted(LaneSlide),
    /// Lane reached its final window; enlarge `view.highlighted_index`.
    LaneSettled { lane: Actor, view: LaneView },
    PromptOpened(ActionPrompt),
    PromptClosed { actor: Actor, choice: ActionChoice },
    GameOver(GameResult),
    QuitRequested,
}
