//! Action resolution.
//!
//! When a lane settles on its landing tile, the acting player gets a
//! prompt with four options: buy, pay rent, auction or skip. The human
//! answers with input; the bot answers at once through an `ActionPolicy`.
//! Answering closes the prompt and hands the turn to the other actor.

pub mod prompt;
pub mod policy;

pub use prompt::{ActionChoice, ActionPrompt};
pub use policy::{ActionPolicy, FixedPolicy, SkipPolicy};
