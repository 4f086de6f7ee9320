//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! A board uses two different coordinate systems:
//!
//! ### Board Coordinates
//!
//! Board coordinates (AKA hex coordinates) address whole tiles. We use the
//! [axial coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial),
//! which is the cube system with the third component dropped. Each tile has
//! a `q` and an `r`, and the cube `s` component can always be derived because
//! `q + r + s = 0`. The game backend hands us cube triples, so
//! [TilePoint::from_cube] accepts those too.
//!
//! Tiles are **pointy topped**, meaning each tile has a vertex straight up
//! and straight down, and flat sides to the east and west. That gives the six
//! sides the names `NE`, `E`, `SE`, `SW`, `W` and `NW` (see [TileDirection]).
//!
//! ```text
//!           N
//!     WNW  / \  ENE
//!     NW  /   \  NE
//!        |     |
//!      W |  o  | E
//!        |     |
//!     SW  \   /  SE
//!     WSW  \ /  ESE
//!           S
//! ```
//!
//! ### Screen Coordinates
//!
//! Screen coordinates are pixels, exactly the way the browser sees them: `x`
//! grows to the right and **`y` grows downwards**. Angles are measured
//! clockwise, which is the same convention CSS and SVG `rotate()` use.
//!
//! The conversion from board to screen space is linear in `(q, r)` and the
//! tile size, so it lives with the renderer. See
//! [crate::BoardRenderer::tile_to_pixel].

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
