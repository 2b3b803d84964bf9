//! Logical positions of the two lanes.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::view::LaneView;
use crate::core::{Actor, ActorMap};

/// One actor's position along their lane.
///
/// The position only grows with dice rolls (and moves either way with
/// manual navigation); it is wrapped onto the board when read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    position: i64,
}

impl Lane {
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Move by `steps` tiles. Saturates at the ends of `i64`.
    pub fn advance(&mut self, steps: i64) {
        self.position = self.position.saturating_add(steps);
    }

    #[must_use]
    pub fn view(&self, visible_slots: usize, board_len: usize) -> LaneView {
        LaneView::at_index(self.position, visible_slots, board_len)
    }
}

/// Animated move of one lane between two views.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneSlide {
    pub lane: Actor,
    pub from: LaneView,
    pub to: LaneView,
    pub duration: Duration,
}

/// Both lanes plus the window geometry they share.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lanes {
    lanes: ActorMap<Lane>,
    visible_slots: usize,
    board_len: usize,
}

impl Lanes {
    #[must_use]
    pub fn new(visible_slots: usize, board_len: usize) -> Self {
        assert!(
            visible_slots >= 1 && visible_slots <= board_len,
            "Lane window must fit on the board"
        );
        Self {
            lanes: ActorMap::default(),
            visible_slots,
            board_len,
        }
    }

    #[must_use]
    pub fn lane(&self, actor: Actor) -> &Lane {
        &self.lanes[actor]
    }

    #[must_use]
    pub fn view(&self, actor: Actor) -> LaneView {
        self.lanes[actor].view(self.visible_slots, self.board_len)
    }

    #[must_use]
    pub fn visible_slots(&self) -> usize {
        self.visible_slots
    }

    /// Advance one lane and describe the slide the renderer should play.
    ///
    /// The other lane is untouched.
    pub fn advance(&mut self, actor: Actor, steps: i64, duration: Duration) -> LaneSlide {
        let from = self.view(actor);
        self.lanes[actor].advance(steps);
        let to = self.view(actor);
        log::debug!(
            "{} lane {} -> {} (window {})",
            actor,
            from.highlighted_index,
            to.highlighted_index,
            to.window_start
        );
        LaneSlide {
            lane: actor,
            from,
            to,
            duration,
        }
    }

    /// Manual one-step navigation; re-derives the view immediately.
    pub fn nudge(&mut self, actor: Actor, delta: i64) -> LaneView {
        self.lanes[actor].advance(delta);
        self.view(actor)
    }
}
