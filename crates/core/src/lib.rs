//! Hexboard is the geometry layer for drawing a hex tile board game in a
//! browser. It converts axial tile coordinates into pixel positions, and
//! works out how to rotate and place the strips (road slots) that lie along
//! each side of a tile. Presentation layers are implemented elsewhere.
//!
//! ```
//! use hexboard::{BoardRenderer, RenderConfig, TileDirection, TilePoint, Point2};
//!
//! let renderer = BoardRenderer::new(RenderConfig::default()).unwrap();
//! let center = renderer
//!     .tile_to_pixel(TilePoint::new(1, -1), 100.0, Point2::new(500.0, 500.0))
//!     .unwrap();
//! let transform = renderer
//!     .edge_transform(TileDirection::NE, 100.0, 1024.0)
//!     .unwrap();
//! println!("{} {:?}", center, transform);
//! // From here you can position your DOM/SVG elements however you like.
//! ```
//!
//! See [RenderConfig] for details on how the presentation can be customized.

mod board;
mod error;
mod render;
mod util;

pub use crate::{
    board::{board_len, board_tiles, hex, Board, PlayerColor, Road},
    error::{GeometryError, InvalidDirectionError},
    render::{
        config::{
            RenderConfig, LARGE_STROKE, SMALL_BREAKPOINT, SMALL_STROKE,
        },
        css::{css_transform, EdgeStyle},
        transform::{
            edge_rotation, side_midpoint_unit, vertex_unit, EdgeTransform,
        },
        unit::{Color3, Degrees, Point2},
        BoardRenderer, SQRT_3,
    },
};
pub use hex::{
    HexDirection, TileDirection, TileEdge, TilePoint, VertexDirection,
};
#[cfg(feature = "svg")]
pub use render::svg::{board_to_svg, svg_transform};

// Re-export to give consumers access to the error and validation types
pub use anyhow;
pub use validator;
