//! Actor identification and per-actor data storage.
//!
//! ## Actor
//!
//! The game always has exactly two participants: the human at the
//! keyboard and the bot. Turns alternate strictly between them.
//!
//! ## ActorMap
//!
//! Two-slot storage indexed by `Actor`, used for inventories, lanes and
//! anything else kept once per participant.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The player at the keyboard. Always takes the first turn.
    Human,
    /// The computer opponent.
    Bot,
}

impl Actor {
    /// Both actors in turn order.
    pub const ALL: [Actor; 2] = [Actor::Human, Actor::Bot];

    /// The opponent of this actor.
    ///
    /// ```
    /// use lane_monopoly::core::Actor;
    ///
    /// assert_eq!(Actor::Human.other(), Actor::Bot);
    /// assert_eq!(Actor::Bot.other(), Actor::Human);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Actor::Human => Actor::Bot,
            Actor::Bot => Actor::Human,
        }
    }

    /// Slot index (human = 0, bot = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Actor::Human => 0,
            Actor::Bot => 1,
        }
    }

    /// True for the bot, which never waits for keyboard input.
    #[must_use]
    pub const fn is_bot(self) -> bool {
        matches!(self, Actor::Bot)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Human => write!(f, "human"),
            Actor::Bot => write!(f, "bot"),
        }
    }
}

/// Per-actor data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use lane_monopoly::core::{Actor, ActorMap};
///
/// let mut gold: ActorMap<i64> = ActorMap::with_value(100);
/// gold[Actor::Bot] -= 30;
///
/// assert_eq!(gold[Actor::Human], 100);
/// assert_eq!(gold[Actor::Bot], 70);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    data: [T; 2],
}

impl<T> ActorMap<T> {
    /// Create a new ActorMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Actor) -> T) -> Self {
        Self {
            data: [factory(Actor::Human), factory(Actor::Bot)],
        }
    }

    /// Create an ActorMap from explicit human and bot values.
    pub fn from_pair(human: T, bot: T) -> Self {
        Self { data: [human, bot] }
    }

    /// Create a new ActorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, actor: Actor) -> &T {
        &self.data[actor.index()]
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, actor: Actor) -> &mut T {
        &mut self.data[actor.index()]
    }

    /// Iterate over (Actor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Actor, &T)> {
        Actor::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for ActorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        self.get(actor)
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        self.get_mut(actor)
    }
}
