//! Lane scroll window and highlight.
//!
//! Each actor has a lane: a horizontal strip showing `visible_slots`
//! tiles of the board at a time. The renderer shifts the lane's content by
//! `scroll_offset` and enlarges the `highlighted_index` tile. Content
//! spans two screen units, so one slot is `2 / visible_slots` wide.

use serde::{Deserialize, Serialize};

/// Derived render state of one lane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneView {
    /// First board index inside the visible window.
    pub window_start: usize,
    /// Horizontal shift of the lane content, in screen units.
    pub scroll_offset: f64,
    /// Board index of the highlighted tile.
    pub highlighted_index: usize,
}

impl LaneView {
    /// Compute the view for a fractional position, e.g. mid-slide.
    ///
    /// `position` is rounded, then handled like `at_index`. Positions
    /// beyond `i64` saturate.
    ///
    /// ```
    /// use lane_monopoly::lane::LaneView;
    ///
    /// let view = LaneView::at(7.0, 2, 20);
    /// assert_eq!(view.highlighted_index, 7);
    /// assert_eq!(view.window_start, 6);
    /// assert_eq!(view.scroll_offset, -6.0);
    /// ```
    #[must_use]
    pub fn at(position: f64, visible_slots: usize, board_len: usize) -> Self {
        Self::at_index(position.round() as i64, visible_slots, board_len)
    }

    /// Compute the view for a whole-tile position.
    ///
    /// `position` may be negative or far past the board; it is wrapped
    /// onto the board. The window is centred on the wrapped tile and
    /// clamped to the board edges.
    ///
    /// Requires `1 <= visible_slots <= board_len`, which session
    /// configuration validates.
    #[must_use]
    pub fn at_index(position: i64, visible_slots: usize, board_len: usize) -> Self {
        debug_assert!(visible_slots >= 1 && visible_slots <= board_len);

        let highlighted_index = position.rem_euclid(board_len as i64) as usize;
        let max_start = board_len - visible_slots;
        let window_start = highlighted_index
            .saturating_sub(visible_slots / 2)
            .min(max_start);

        Self {
            window_start,
            scroll_offset: scroll_offset(window_start, visible_slots),
            highlighted_index,
        }
    }
}

/// Content shift that puts `window_start` at the left edge.
#[must_use]
pub fn scroll_offset(window_start: usize, visible_slots: usize) -> f64 {
    if window_start == 0 {
        return 0.0;
    }
    -(window_start as f64) * (2.0 / visible_slots as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let view = LaneView::at(0.0, 2, 20);
        assert_eq!(view.window_start, 0);
        assert_eq!(view.scroll_offset, 0.0);
        assert_eq!(view.highlighted_index, 0);
    }

    #[test]
    fn test_last_tile() {
        let view = LaneView::at(19.0, 2, 20);
        assert_eq!(view.highlighted_index, 19);
        assert_eq!(view.window_start, 18);
        assert_eq!(view.scroll_offset, -18.0);
    }

    #[test]
    fn test_wraps_past_end() {
        let view = LaneView::at(23.0, 2, 20);
        assert_eq!(view.highlighted_index, 3);
        assert_eq!(view.window_start, 2);
    }

    #[test]
    fn test_negative_position() {
        let view = LaneView::at(-1.0, 2, 20);
        assert_eq!(view.highlighted_index, 19);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(LaneView::at(4.4, 2, 20).highlighted_index, 4);
        assert_eq!(LaneView::at(4.6, 2, 20).highlighted_index, 5);
    }

    #[test]
    fn test_wider_window() {
        let view = LaneView::at(5.0, 4, 10);
        assert_eq!(view.window_start, 3);
        assert_eq!(view.scroll_offset, -1.5);

        // Clamped at the right edge.
        let view = LaneView::at(9.0, 4, 10);
        assert_eq!(view.window_start, 6);
        assert_eq!(view.highlighted_index, 9);
    }

    #[test]
    fn test_index_beyond_float_precision() {
        let position = (1_i64 << 53) + 1;
        let view = LaneView::at_index(position, 2, 20);
        assert_eq!(view.highlighted_index, 13);
        assert_eq!(view.window_start, 12);

        let view = LaneView::at_index(i64::MAX, 2, 20);
        assert_eq!(view.highlighted_index, (i64::MAX % 20) as usize);
    }

    #[test]
    fn test_window_equals_board() {
        let view = LaneView::at(3.0, 5, 5);
        assert_eq!(view.window_start, 0);
        assert_eq!(view.scroll_offset, 0.0);
    }
}
