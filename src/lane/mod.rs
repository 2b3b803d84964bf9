//! Lane view model.
//!
//! Two independent lanes, one per actor, each with its own logical
//! position, visible window and highlighted tile. Moving one lane never
//! touches the other.

pub mod view;
pub mod track;

pub use view::{scroll_offset, LaneView};
pub use track::{Lane, LaneSlide, Lanes};
