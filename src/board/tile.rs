//! Board tiles.
//!
//! A tile is one of four kinds:
//! - `Start` and `End` close the board
//! - `Block` tiles are named `"<element> <title>"`, e.g. "Castle Windsor"
//! - `Special` tiles follow each block (station, prison, hotel, ...)
//!
//! Only the category carries meaning here: it decides the render colour.

use serde::{Deserialize, Serialize};

/// RGBA colour handed to the renderer.
pub type Rgba = [f32; 4];

/// Colour of special tiles.
pub const SPECIAL_TILE_COLOR: Rgba = [0.82, 0.91, 0.86, 1.0];

/// Colour of every other tile.
pub const PLAIN_TILE_COLOR: Rgba = [0.69, 0.69, 0.69, 1.0];

/// First word of a block tile name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockElement {
    Road,
    Street,
    Castle,
    Palace,
    Corner,
}

impl BlockElement {
    pub const ALL: [BlockElement; 5] = [
        BlockElement::Road,
        BlockElement::Street,
        BlockElement::Castle,
        BlockElement::Palace,
        BlockElement::Corner,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BlockElement::Road => "Road",
            BlockElement::Street => "Street",
            BlockElement::Castle => "Castle",
            BlockElement::Palace => "Palace",
            BlockElement::Corner => "Corner",
        }
    }
}

/// Second word of a block tile name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockTitle {
    Windsor,
    Versailles,
    Edinburgh,
    Regent,
    Victoria,
    Kensington,
    Balmoral,
    Trafalgar,
    Piccadilly,
    Lancaster,
    Dover,
    Hampton,
    York,
    Nottingham,
}

impl BlockTitle {
    pub const ALL: [BlockTitle; 14] = [
        BlockTitle::Windsor,
        BlockTitle::Versailles,
        BlockTitle::Edinburgh,
        BlockTitle::Regent,
        BlockTitle::Victoria,
        BlockTitle::Kensington,
        BlockTitle::Balmoral,
        BlockTitle::Trafalgar,
        BlockTitle::Piccadilly,
        BlockTitle::Lancaster,
        BlockTitle::Dover,
        BlockTitle::Hampton,
        BlockTitle::York,
        BlockTitle::Nottingham,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BlockTitle::Windsor => "Windsor",
            BlockTitle::Versailles => "Versailles",
            BlockTitle::Edinburgh => "Edinburgh",
            BlockTitle::Regent => "Regent",
            BlockTitle::Victoria => "Victoria",
            BlockTitle::Kensington => "Kensington",
            BlockTitle::Balmoral => "Balmoral",
            BlockTitle::Trafalgar => "Trafalgar",
            BlockTitle::Piccadilly => "Piccadilly",
            BlockTitle::Lancaster => "Lancaster",
            BlockTitle::Dover => "Dover",
            BlockTitle::Hampton => "Hampton",
            BlockTitle::York => "York",
            BlockTitle::Nottingham => "Nottingham",
        }
    }
}

/// Facility placed after each block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    Station,
    Facility,
    Prison,
    Hospital,
    Museum,
    Hotel,
    Shop,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 7] = [
        SpecialKind::Station,
        SpecialKind::Facility,
        SpecialKind::Prison,
        SpecialKind::Hospital,
        SpecialKind::Museum,
        SpecialKind::Hotel,
        SpecialKind::Shop,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SpecialKind::Station => "station",
            SpecialKind::Facility => "facility",
            SpecialKind::Prison => "prison",
            SpecialKind::Hospital => "hospital",
            SpecialKind::Museum => "museum",
            SpecialKind::Hotel => "hotel",
            SpecialKind::Shop => "shop",
        }
    }
}

/// Coarse tile category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCategory {
    Start,
    End,
    Block,
    Special,
}

/// A single board tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Start,
    End,
    Block {
        element: BlockElement,
        title: BlockTitle,
    },
    Special(SpecialKind),
}

impl Tile {
    /// Create a block tile.
    #[must_use]
    pub const fn block(element: BlockElement, title: BlockTitle) -> Self {
        Tile::Block { element, title }
    }

    #[must_use]
    pub const fn category(&self) -> TileCategory {
        match self {
            Tile::Start => TileCategory::Start,
            Tile::End => TileCategory::End,
            Tile::Block { .. } => TileCategory::Block,
            Tile::Special(_) => TileCategory::Special,
        }
    }

    /// Render colour for this tile.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        match self.category() {
            TileCategory::Special => SPECIAL_TILE_COLOR,
            _ => PLAIN_TILE_COLOR,
        }
    }

    /// Display label, e.g. `"start"`, `"Road York"`, `"museum"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Start => write!(f, "start"),
            Tile::End => write!(f, "end"),
            Tile::Block { element, title } => write!(f, "{} {}", element.name(), title.name()),
            Tile::Special(kind) => write!(f, "{}", kind.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Tile::Start.label(), "start");
        assert_eq!(Tile::End.label(), "end");
        assert_eq!(
            Tile::block(BlockElement::Castle, BlockTitle::Windsor).label(),
            "Castle Windsor"
        );
        assert_eq!(Tile::Special(SpecialKind::Museum).label(), "museum");
    }

    #[test]
    fn test_categories() {
        assert_eq!(Tile::Start.category(), TileCategory::Start);
        assert_eq!(Tile::End.category(), TileCategory::End);
        assert_eq!(
            Tile::block(BlockElement::Road, BlockTitle::York).category(),
            TileCategory::Block
        );
        assert_eq!(
            Tile::Special(SpecialKind::Shop).category(),
            TileCategory::Special
        );
    }

    #[test]
    fn test_colors() {
        assert_eq!(Tile::Special(SpecialKind::Hotel).color(), SPECIAL_TILE_COLOR);
        assert_eq!(Tile::Start.color(), PLAIN_TILE_COLOR);
        assert_eq!(Tile::End.color(), PLAIN_TILE_COLOR);
        assert_eq!(
            Tile::block(BlockElement::Palace, BlockTitle::Dover).color(),
            PLAIN_TILE_COLOR
        );
    }

    #[test]
    fn test_name_tables_are_complete() {
        assert_eq!(BlockElement::ALL.len(), 5);
        assert_eq!(BlockTitle::ALL.len(), 14);
        assert_eq!(SpecialKind::ALL.len(), 7);
        assert_eq!(BlockTitle::Nottingham.name(), "Nottingham");
        assert_eq!(SpecialKind::Station.name(), "station");
    }
}
