//! The four-choice prompt shown after a token lands on a tile.

use serde::{Deserialize, Serialize};

use crate::board::Tile;
use crate::core::{Actor, GameError};

/// Options offered on every landed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionChoice {
    Buy,
    PayRent,
    Auction,
    Skip,
}

impl ActionChoice {
    /// All options in display order.
    pub const ALL: [ActionChoice; 4] = [
        ActionChoice::Buy,
        ActionChoice::PayRent,
        ActionChoice::Auction,
        ActionChoice::Skip,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ActionChoice::Buy => "Buy",
            ActionChoice::PayRent => "Pay rent",
            ActionChoice::Auction => "Auction",
            ActionChoice::Skip => "Skip",
        }
    }
}

impl std::fmt::Display for ActionChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An open (or just answered) prompt for one actor and tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPrompt {
    pub actor: Actor,
    pub tile_index: usize,
    pub tile: Tile,
    choice: Option<ActionChoice>,
}

impl ActionPrompt {
    #[must_use]
    pub fn new(actor: Actor, tile_index: usize, tile: Tile) -> Self {
        Self {
            actor,
            tile_index,
            tile,
            choice: None,
        }
    }

    /// The options to display.
    #[must_use]
    pub fn options(&self) -> &'static [ActionChoice] {
        &ActionChoice::ALL
    }

    #[must_use]
    pub fn choice(&self) -> Option<ActionChoice> {
        self.choice
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.choice.is_some()
    }

    /// Record the answer. The first answer wins; later ones are rejected.
    pub fn resolve(&mut self, choice: ActionChoice) -> Result<ActionChoice, GameError> {
        if self.choice.is_some() {
            return Err(GameError::PromptAlreadyResolved(self.actor));
        }
        self.choice = Some(choice);
        apply_choice(self.actor, choice, &self.tile);
        Ok(choice)
    }
}

/// Economic effect of a choice. Prices and rent are not modelled yet, so
/// every option only leaves a trace in the log.
fn apply_choice(actor: Actor, choice: ActionChoice, tile: &Tile) {
    match choice {
        ActionChoice::Buy => log::info!("{} buys {}", actor, tile),
        ActionChoice::PayRent => log::info!("{} pays rent on {}", actor, tile),
        ActionChoice::Auction => log::info!("{} puts {} up for auction", actor, tile),
        ActionChoice::Skip => log::info!("{} skips {}", actor, tile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpecialKind;

    #[test]
    fn test_four_options() {
        let prompt = ActionPrompt::new(Actor::Human, 3, Tile::Special(SpecialKind::Hotel));
        assert_eq!(prompt.options().len(), 4);
        assert_eq!(
            prompt.options(),
            &[
                ActionChoice::Buy,
                ActionChoice::PayRent,
                ActionChoice::Auction,
                ActionChoice::Skip
            ]
        );
    }

    #[test]
    fn test_first_choice_wins() {
        let mut prompt = ActionPrompt::new(Actor::Human, 3, Tile::Start);
        assert!(!prompt.is_resolved());

        assert_eq!(prompt.resolve(ActionChoice::Auction), Ok(ActionChoice::Auction));
        assert_eq!(
            prompt.resolve(ActionChoice::Buy),
            Err(GameError::PromptAlreadyResolved(Actor::Human))
        );
        assert_eq!(prompt.choice(), Some(ActionChoice::Auction));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ActionChoice::PayRent.to_string(), "Pay rent");
        assert_eq!(ActionChoice::Skip.label(), "Skip");
    }
}
