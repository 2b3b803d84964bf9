//! How the bot answers action prompts.

use super::prompt::{ActionChoice, ActionPrompt};
use crate::inventory::Ledger;

/// Decides the bot's answer to an action prompt.
///
/// Called synchronously: the bot never keeps the turn waiting.
pub trait ActionPolicy {
    fn choose(&mut self, prompt: &ActionPrompt, ledger: &Ledger) -> ActionChoice;
}

/// Always skips. The default bot behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipPolicy;

impl ActionPolicy for SkipPolicy {
    fn choose(&mut self, _prompt: &ActionPrompt, _ledger: &Ledger) -> ActionChoice {
        ActionChoice::Skip
    }
}

/// Always answers with the same option.
#[derive(Clone, Copy, Debug)]
pub struct FixedPolicy(pub ActionChoice);

impl ActionPolicy for FixedPolicy {
    fn choose(&mut self, _prompt: &ActionPrompt, _ledger: &Ledger) -> ActionChoice {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;
    use crate::core::Actor;
    use crate::inventory::Power;

    #[test]
    fn test_policies() {
        let prompt = ActionPrompt::new(Actor::Bot, 0, Tile::Start);
        let ledger = Ledger::with_powers(Power::Bonus, Power::CheaperUpgrades, 100, 30);

        assert_eq!(SkipPolicy.choose(&prompt, &ledger), ActionChoice::Skip);
        assert_eq!(
            FixedPolicy(ActionChoice::Buy).choose(&prompt, &ledger),
            ActionChoice::Buy
        );
    }
}
