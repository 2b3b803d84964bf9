//! Board tiles and random board generation.
//!
//! The board is generated once when a game starts and shared by both
//! lanes: each actor walks the same tiles on their own lane.

pub mod tile;
pub mod generator;

pub use tile::{
    BlockElement, BlockTitle, Rgba, SpecialKind, Tile, TileCategory, PLAIN_TILE_COLOR,
    SPECIAL_TILE_COLOR,
};
pub use generator::{generate, Board, BLOCK_SIZES};
