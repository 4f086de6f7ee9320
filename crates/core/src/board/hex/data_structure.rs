use crate::board::hex::{HexDirection, TileDirection, TilePoint};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of tile points
pub type TilePointSet = HashSet<TilePoint, FnvBuildHasher>;
/// An ORDERED set of tile edges. This has some extra memory overhead, so we
/// should only use it when we actually need the ordering.
pub type TileEdgeIndexSet = IndexSet<TileEdge, FnvBuildHasher>;

/// One side of one tile. Every board edge (i.e. road slot) between two tiles
/// can be named two ways, once from each tile. Use [TileEdge::canonical] to
/// collapse both names into one when deduplicating.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct TileEdge {
    pub tile: TilePoint,
    pub direction: TileDirection,
}

impl TileEdge {
    pub const fn new(tile: TilePoint, direction: TileDirection) -> Self {
        Self { tile, direction }
    }

    /// The same edge, as seen from the tile on the other side of it
    pub fn flip(self) -> Self {
        Self::new(
            self.tile.adjacent(self.direction),
            self.direction.opposite(),
        )
    }

    /// Normalize this edge so that both names of the same side end up equal.
    /// The name whose tile passes `contains` (i.e. is on the board) wins. If
    /// both or neither do, the name facing `NE`, `E` or `SE` wins.
    pub fn canonical(self, contains: impl Fn(TilePoint) -> bool) -> Self {
        let flipped = self.flip();
        match (contains(self.tile), contains(flipped.tile)) {
            (true, false) => self,
            (false, true) => flipped,
            _ => match self.direction {
                TileDirection::NE | TileDirection::E | TileDirection::SE => {
                    self
                }
                TileDirection::SW | TileDirection::W | TileDirection::NW => {
                    flipped
                }
            },
        }
    }
}
