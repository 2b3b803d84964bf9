//! Per-actor gold, powers and owned cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Actor, ActorMap, GameRng};

/// Passive economic modifier. Each actor gets a different one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Power {
    /// Upgrades cost less. Only a label for now: no upgrades exist yet.
    CheaperUpgrades,
    /// Extra gold at the start of every turn.
    Bonus,
}

impl Power {
    pub const ALL: [Power; 2] = [Power::CheaperUpgrades, Power::Bonus];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Power::CheaperUpgrades => "cheaper_upgrades",
            Power::Bonus => "bonus",
        }
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Draw a power for the human and give the other one to the bot.
pub fn assign_powers(rng: &mut GameRng) -> (Power, Power) {
    let human = rng.pick(&Power::ALL);
    let bot = match human {
        Power::CheaperUpgrades => Power::Bonus,
        Power::Bonus => Power::CheaperUpgrades,
    };
    (human, bot)
}

/// A tile an actor owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedCard {
    /// Board index of the tile.
    pub tile_index: usize,
    /// Tile label at the time it was acquired.
    pub label: String,
}

/// One actor's holdings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub power: Power,
    /// Gold. Never clamped: zero or less means the actor has lost.
    pub money: i64,
    pub cards: Vec<OwnedCard>,
}

impl Inventory {
    #[must_use]
    pub fn new(power: Power, money: i64) -> Self {
        Self {
            power,
            money,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.money <= 0
    }
}

/// Inventories of both actors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    inventories: ActorMap<Inventory>,
    turn_bonus: i64,
}

impl Ledger {
    /// Create a ledger with random, distinct powers and equal starting gold.
    pub fn new(rng: &mut GameRng, starting_money: i64, turn_bonus: i64) -> Self {
        let (human, bot) = assign_powers(rng);
        log::info!("powers assigned: human={} bot={}", human, bot);
        Self::with_powers(human, bot, starting_money, turn_bonus)
    }

    /// Create a ledger with explicit powers.
    #[must_use]
    pub fn with_powers(human: Power, bot: Power, starting_money: i64, turn_bonus: i64) -> Self {
        Self {
            inventories: ActorMap::from_pair(
                Inventory::new(human, starting_money),
                Inventory::new(bot, starting_money),
            ),
            turn_bonus,
        }
    }

    #[must_use]
    pub fn inventory(&self, actor: Actor) -> &Inventory {
        &self.inventories[actor]
    }

    #[must_use]
    pub fn money(&self, actor: Actor) -> i64 {
        self.inventories[actor].money
    }

    #[must_use]
    pub fn power(&self, actor: Actor) -> Power {
        self.inventories[actor].power
    }

    /// Change an actor's gold by `delta`.
    pub fn adjust_money(&mut self, actor: Actor, delta: i64) {
        self.inventories[actor].money += delta;
    }

    /// Grant the turn-start bonus if the actor holds the `bonus` power.
    ///
    /// Returns the amount granted.
    pub fn apply_turn_start_bonus(&mut self, actor: Actor) -> Option<i64> {
        match self.power(actor) {
            Power::Bonus => {
                self.adjust_money(actor, self.turn_bonus);
                Some(self.turn_bonus)
            }
            Power::CheaperUpgrades => None,
        }
    }

    /// Actors with no gold left, in turn order.
    #[must_use]
    pub fn losers(&self) -> SmallVec<[Actor; 2]> {
        self.inventories
            .iter()
            .filter(|(_, inv)| inv.is_broke())
            .map(|(actor, _)| actor)
            .collect()
    }

    /// Text for the actor's inventory panel.
    #[must_use]
    pub fn summary(&self, actor: Actor) -> String {
        let inv = &self.inventories[actor];
        format!("Gold: {} $\nPower: {}", inv.money, inv.power)
    }
}
