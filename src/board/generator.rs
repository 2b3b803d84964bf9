//! Random board generation.

use serde::{Deserialize, Serialize};

use super::tile::{BlockElement, BlockTitle, SpecialKind, Tile};
use crate::core::GameRng;

/// Possible lengths of a block run.
pub const BLOCK_SIZES: [usize; 2] = [2, 3];

/// Ordered board tiles. Always starts with `start` and ends with `end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Wrap a tile sequence.
    ///
    /// Panics if the sequence is not closed by `start` and `end`.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        assert!(tiles.len() >= 2, "A board needs at least start and end");
        assert_eq!(tiles.first(), Some(&Tile::Start), "Board must begin with start");
        assert_eq!(tiles.last(), Some(&Tile::End), "Board must end with end");
        Self { tiles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Map an unbounded logical index onto the board.
    #[must_use]
    pub fn wrap_index(&self, logical: i64) -> usize {
        logical.rem_euclid(self.tiles.len() as i64) as usize
    }

    /// Tile under an unbounded logical index.
    #[must_use]
    pub fn tile_at(&self, logical: i64) -> &Tile {
        &self.tiles[self.wrap_index(logical)]
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Display labels of all tiles, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.tiles.iter().map(Tile::label).collect()
    }
}

/// Generate a board of exactly `tile_count` tiles (minimum 2).
///
/// Interior tiles come in runs of 2 or 3 block tiles followed by one
/// special tile, cut short so that `end` lands on the last slot.
///
/// Element and title are drawn again for every slot of a run, so a run is
/// not guaranteed to repeat one name.
///
/// ```
/// use lane_monopoly::board::{generate, Tile};
/// use lane_monopoly::core::GameRng;
///
/// let board = generate(5, &mut GameRng::new(1));
/// assert_eq!(board.len(), 5);
/// assert_eq!(board.tiles()[0], Tile::Start);
/// assert_eq!(board.tiles()[4], Tile::End);
/// ```
pub fn generate(tile_count: usize, rng: &mut GameRng) -> Board {
    let interior_limit = tile_count.saturating_sub(1).max(1);
    let mut tiles = Vec::with_capacity(interior_limit + 1);
    tiles.push(Tile::Start);

    while tiles.len() < interior_limit {
        let block_size = rng.pick(&BLOCK_SIZES);
        for _ in 0..block_size {
            if tiles.len() >= interior_limit {
                break;
            }
            let element = rng.pick(&BlockElement::ALL);
            let title = rng.pick(&BlockTitle::ALL);
            tiles.push(Tile::block(element, title));
        }

        if tiles.len() >= interior_limit {
            break;
        }
        tiles.push(Tile::Special(rng.pick(&SpecialKind::ALL)));
    }

    tiles.push(Tile::End);
    log::debug!("generated board of {} tiles", tiles.len());
    Board::from_tiles(tiles)
}
