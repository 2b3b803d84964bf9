//! Game session and turn state machine.
//!
//! ## Turn Flow
//!
//! 1. `PlayGame`: victory check, turn-start bonus, status line. The human
//!    confirms to roll; the bot rolls after a short pause.
//! 2. `RollDice`: the final dice are drawn at once, flicker frames are
//!    scheduled before them.
//! 3. `MovePlayer`: the acting lane slides by the dice sum, settles, and
//!    an action prompt opens. Answering it passes the turn.
//!
//! All delays run through a `Scheduler` driven by `GameSession::tick`.

pub mod state;
pub mod turn;
pub mod event;
pub mod game;

pub use state::{GameResult, TurnState};
pub use turn::{DiceRoll, TurnContext, TurnRecord};
pub use event::{InputEvent, InputOutcome, SessionEvent};
pub use game::{GameSession, SessionSnapshot, BOT_NAME};
