pub mod hex;

use crate::{
    board::hex::{TileEdge, TileEdgeIndexSet, TilePoint, TilePointSet},
    render::unit::Color3,
};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A hexagon-shaped board: every tile within `radius` steps of the origin,
/// plus whatever roads have been placed along tile edges. This only holds
/// what's needed to _draw_ a board; the game state lives elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Distance from the center of the board to the edge (in tiles). The
    /// standard board has a radius of 2.
    pub radius: u16,
    /// Roads placed on the board, in draw order
    #[serde(default)]
    pub roads: Vec<Road>,
}

/// A road occupying one board edge
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub tile: TilePoint,
    pub direction: hex::TileDirection,
    pub color: PlayerColor,
}

impl Road {
    pub fn edge(&self) -> TileEdge {
        TileEdge::new(self.tile, self.direction)
    }
}

/// The colors a player can take
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerColor {
    Red,
    Blue,
    Orange,
    White,
}

impl PlayerColor {
    /// Fill color used to draw this player's pieces
    pub fn color(self) -> Color3 {
        match self {
            Self::Red => Color3::new_int(225, 66, 66),
            Self::Blue => Color3::new_int(30, 104, 196),
            Self::Orange => Color3::new_int(230, 142, 37),
            Self::White => Color3::new_int(240, 240, 240),
        }
    }

    pub fn all() -> impl Iterator<Item = PlayerColor> {
        Self::iter()
    }
}

impl Board {
    /// Create an empty board with the given radius
    pub fn new(radius: u16) -> Self {
        Self {
            radius,
            roads: Vec::new(),
        }
    }

    /// All tiles on the board, center first, then ring by ring
    pub fn tiles(&self) -> Vec<TilePoint> {
        TilePoint::ORIGIN.spiral(self.radius)
    }

    /// Is the given tile on this board?
    pub fn contains(&self, tile: TilePoint) -> bool {
        TilePoint::ORIGIN.distance_to(tile) <= u32::from(self.radius)
    }

    /// Every side of every tile, with each shared side listed only once. The
    /// order is stable: tiles in [Self::tiles] order, then sides clockwise.
    pub fn edges(&self) -> TileEdgeIndexSet {
        let edges: TileEdgeIndexSet = self
            .tiles()
            .into_iter()
            .flat_map(|tile| {
                hex::TileDirection::iter()
                    .map(move |direction| TileEdge::new(tile, direction))
            })
            .map(|edge| edge.canonical(|tile| self.contains(tile)))
            .collect();
        log::trace!(
            "Board of radius {} has {} edges",
            self.radius,
            edges.len()
        );
        edges
    }

    /// Make sure every road is attached to a tile that's on the board, and
    /// that no edge holds more than one road
    pub fn validate_roads(&self) -> anyhow::Result<()> {
        let mut taken = TileEdgeIndexSet::default();
        for road in &self.roads {
            let edge = road.edge();
            if !self.contains(edge.tile) && !self.contains(edge.flip().tile) {
                bail!(
                    "Road at {} {} is not on a board of radius {}",
                    road.tile,
                    road.direction,
                    self.radius
                );
            }
            let canonical = edge.canonical(|tile| self.contains(tile));
            if !taken.insert(canonical) {
                bail!(
                    "Edge {} {} already holds a road",
                    road.tile,
                    road.direction
                );
            }
        }
        Ok(())
    }

    /// Parse a board from JSON. Roads are validated after parsing.
    #[cfg(feature = "json")]
    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        let board: Self = serde_json::from_str(input)?;
        board.validate_roads()?;
        Ok(board)
    }

    /// Serialize this board into JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panics only if the board format isn't serializable (a bug)
        serde_json::to_string(self).expect("error serializing board")
    }
}

/// Calculate the number of tiles in a board based on its radius. Radius 0
/// means 1 tile, 1 is 7 tiles, 2 is 19, etc.
pub fn board_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Set of all tiles on a board of the given radius
pub fn board_tiles(radius: u16) -> TilePointSet {
    TilePoint::ORIGIN.spiral(radius).into_iter().collect()
}
