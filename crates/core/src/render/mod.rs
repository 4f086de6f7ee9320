pub mod config;
pub mod css;
#[cfg(feature = "svg")]
pub mod svg;
pub mod transform;
pub mod unit;

use crate::{
    board::hex::{HexDirection, TileDirection, TilePoint, VertexDirection},
    error::{check_finite, check_non_negative, check_positive, GeometryError},
    render::{
        config::RenderConfig,
        css::EdgeStyle,
        transform::{vertex_unit, EdgeTransform},
        unit::Point2,
    },
};
use anyhow::anyhow;
use serde::Serialize;
use validator::Validate;

/// `√3`, which shows up everywhere in hex math. `f64::consts::SQRT_3` isn't
/// stable yet.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A board renderer converts board coordinates into screen-space placement.
/// A renderer is created using a particular [RenderConfig], and from there
/// can be used for any number of boards, tile sizes and viewports.
///
/// Every method is pure: the same inputs always give bit-identical outputs,
/// and nothing is cached or mutated. That matters because UI frameworks will
/// happily call these on every re-render.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new renderer.
///
/// ## Orientation
///
/// Tiles are pointy-topped and anchored at their center. See [crate::hex]
/// for the full description of both coordinate systems.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BoardRenderer {
    /// Config that determines viewport-dependent presentation constants.
    /// Board geometry never depends on it.
    render_config: RenderConfig,
}

impl BoardRenderer {
    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config.validate()?;
        // Range validation lets NaN through, so check that separately
        for (field, value) in [
            ("small_breakpoint", render_config.small_breakpoint),
            ("small_stroke", render_config.small_stroke),
            ("large_stroke", render_config.large_stroke),
        ] {
            if !value.is_finite() {
                return Err(anyhow!(
                    "{} must be finite, but was {}",
                    field,
                    value
                ));
            }
        }
        log::debug!("Created board renderer with {:?}", render_config);
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Distance between the two flat sides of a tile (`E` to `W`), which is
    /// also the horizontal distance between neighboring tile centers
    pub fn tile_width(size: f64) -> f64 {
        SQRT_3 * size
    }

    /// Distance between the top and bottom vertex of a tile
    pub fn tile_height(size: f64) -> f64 {
        2.0 * size
    }

    /// Convert a tile's board coordinate to the pixel position of its center.
    /// `size` is the distance from a tile's center to any of its vertices,
    /// which is also the length of one side. `center` is where the origin
    /// tile is drawn.
    ///
    /// For pointy-top tiles:
    ///
    /// ```text
    /// x = center.x + size * (√3 * q + √3/2 * r)
    /// y = center.y + size * (3/2 * r)
    /// ```
    pub fn tile_to_pixel(
        &self,
        tile: TilePoint,
        size: f64,
        center: Point2,
    ) -> Result<Point2, GeometryError> {
        let size = check_positive("size", size)?;
        let center_x = check_finite("center_x", center.x)?;
        let center_y = check_finite("center_y", center.y)?;
        let q = f64::from(tile.q);
        let r = f64::from(tile.r);
        Ok(Point2::new(
            center_x + size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            center_y + size * (1.5 * r),
        ))
    }

    /// Does the given viewport get the compact presentation? Compact means
    /// strictly narrower than the configured breakpoint.
    pub fn is_compact(
        &self,
        viewport_width: f64,
    ) -> Result<bool, GeometryError> {
        let viewport_width =
            check_non_negative("viewport_width", viewport_width)?;
        Ok(viewport_width < self.render_config.small_breakpoint)
    }

    /// Thickness of a road strip for the given viewport width
    pub fn stroke_width(
        &self,
        viewport_width: f64,
    ) -> Result<f64, GeometryError> {
        Ok(if self.is_compact(viewport_width)? {
            self.render_config.small_stroke
        } else {
            self.render_config.large_stroke
        })
    }

    /// Get the placement of a road strip lying along one side of a tile,
    /// relative to the tile's center (as given by [Self::tile_to_pixel]).
    ///
    /// Rotation and translation only depend on `direction` and `size`. The
    /// viewport width only picks the strip thickness, see
    /// [RenderConfig::small_breakpoint].
    ///
    /// Since the direction is a closed enum, there is no such thing as an
    /// invalid direction here. Untyped directions have to be parsed first,
    /// which is where [crate::InvalidDirectionError] comes from.
    pub fn edge_transform(
        &self,
        direction: TileDirection,
        size: f64,
        viewport_width: f64,
    ) -> Result<EdgeTransform, GeometryError> {
        let size = check_positive("size", size)?;
        let thickness = self.stroke_width(viewport_width)?;
        Ok(EdgeTransform::new(direction, size, thickness))
    }

    /// Get the absolute placement of a road strip, as an inline style for an
    /// absolutely positioned HTML element. See [EdgeStyle].
    pub fn edge_style(
        &self,
        tile: TilePoint,
        direction: TileDirection,
        size: f64,
        center: Point2,
        viewport_width: f64,
    ) -> Result<EdgeStyle, GeometryError> {
        let anchor = self.tile_to_pixel(tile, size, center)?;
        let transform = self.edge_transform(direction, size, viewport_width)?;
        Ok(EdgeStyle::new(anchor, &transform))
    }

    /// Get the six vertices of a tile relative to its center, in clockwise
    /// order starting at the top
    pub fn tile_vertices(
        &self,
        size: f64,
    ) -> Result<Vec<Point2>, GeometryError> {
        let size = check_positive("size", size)?;
        Ok(VertexDirection::CLOCKWISE
            .iter()
            .map(|dir| vertex_unit(*dir) * size)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    fn renderer() -> BoardRenderer {
        BoardRenderer::new(RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_tile_to_pixel_origin() {
        let center = Point2::new(500.0, 500.0);
        assert_eq!(
            renderer().tile_to_pixel(TilePoint::ORIGIN, 100.0, center),
            Ok(center)
        );
    }

    #[test]
    fn test_tile_to_pixel() {
        let renderer = renderer();
        let p = renderer
            .tile_to_pixel(TilePoint::new(1, 0), 10.0, Point2::ORIGIN)
            .unwrap();
        assert_approx_eq!(p.x, 10.0 * SQRT_3);
        assert_approx_eq!(p.y, 0.0);

        let p = renderer
            .tile_to_pixel(TilePoint::new(0, 2), 10.0, Point2::new(1.0, 2.0))
            .unwrap();
        assert_approx_eq!(p.x, 1.0 + 10.0 * SQRT_3);
        assert_approx_eq!(p.y, 32.0);
    }

    #[test]
    fn test_neighbors_are_one_tile_width_apart() {
        let renderer = renderer();
        let center = Point2::new(-3.0, 7.0);
        let tile = TilePoint::new(-2, 5);
        let here = renderer.tile_to_pixel(tile, 40.0, center).unwrap();
        for neighbor in tile.adjacents() {
            let there =
                renderer.tile_to_pixel(neighbor, 40.0, center).unwrap();
            assert_approx_eq!(
                here.distance_to(there),
                BoardRenderer::tile_width(40.0)
            );
        }
    }

    #[test]
    fn test_tile_to_pixel_invalid() {
        let renderer = renderer();
        assert!(matches!(
            renderer.tile_to_pixel(TilePoint::ORIGIN, f64::NAN, Point2::ORIGIN),
            Err(GeometryError::NonFinite { field: "size", .. })
        ));
        assert_eq!(
            renderer.tile_to_pixel(TilePoint::ORIGIN, -1.0, Point2::ORIGIN),
            Err(GeometryError::NonPositive {
                field: "size",
                value: -1.0
            })
        );
        assert!(matches!(
            renderer.tile_to_pixel(
                TilePoint::ORIGIN,
                1.0,
                Point2::new(0.0, f64::INFINITY)
            ),
            Err(GeometryError::NonFinite {
                field: "center_y",
                ..
            })
        ));
    }

    #[test]
    fn test_edge_transform_ne() {
        let transform = renderer()
            .edge_transform(TileDirection::NE, 100.0, 800.0)
            .unwrap();
        assert_eq!(transform.rotation.0, 30.0);
        assert_approx_eq!(transform.translation.x, 25.0 * SQRT_3);
        assert_approx_eq!(transform.translation.y, -75.0);
        assert_approx_eq!(transform.translation.magnitude(), 50.0 * SQRT_3);
        assert_eq!(transform.length, 100.0);
        assert_eq!(transform.thickness, 12.0);
    }

    #[test]
    fn test_breakpoint() {
        let renderer = renderer();
        assert_eq!(renderer.stroke_width(0.0), Ok(8.0));
        assert_eq!(renderer.stroke_width(575.0), Ok(8.0));
        assert_eq!(renderer.stroke_width(576.0), Ok(12.0));
        assert_eq!(renderer.stroke_width(1920.0), Ok(12.0));
        assert!(renderer.stroke_width(-1.0).is_err());
        assert!(renderer.stroke_width(f64::NAN).is_err());
    }

    #[test]
    fn test_viewport_only_changes_thickness() {
        let renderer = renderer();
        for dir in TileDirection::iter() {
            let small = renderer.edge_transform(dir, 50.0, 575.0).unwrap();
            let large = renderer.edge_transform(dir, 50.0, 576.0).unwrap();
            assert_eq!(small.translation, large.translation);
            assert_eq!(small.rotation, large.rotation);
            assert_eq!(small.length, large.length);
            assert_eq!(small.thickness, 8.0);
            assert_eq!(large.thickness, 12.0);
        }
    }

    #[test]
    fn test_custom_breakpoint() {
        let renderer = BoardRenderer::new(RenderConfig {
            small_breakpoint: 1000.0,
            small_stroke: 2.0,
            large_stroke: 4.0,
        })
        .unwrap();
        assert_eq!(renderer.stroke_width(999.0), Ok(2.0));
        assert_eq!(renderer.stroke_width(1000.0), Ok(4.0));
    }

    #[test]
    fn test_edge_transform_invalid() {
        let renderer = renderer();
        assert!(matches!(
            renderer.edge_transform(TileDirection::E, 0.0, 800.0),
            Err(GeometryError::NonPositive { field: "size", .. })
        ));
        assert!(matches!(
            renderer.edge_transform(TileDirection::E, 10.0, f64::INFINITY),
            Err(GeometryError::NonFinite {
                field: "viewport_width",
                ..
            })
        ));
    }

    #[test]
    fn test_tile_vertices() {
        let vertices = renderer().tile_vertices(10.0).unwrap();
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0], Point2::new(0.0, -10.0));
        for vertex in vertices {
            assert_approx_eq!(vertex.magnitude(), 10.0);
        }
    }

    #[test]
    fn test_shared_side_has_shared_vertices() {
        let renderer = renderer();
        let size = 33.0;
        let tile = TilePoint::new(1, -2);
        let here = renderer.tile_to_pixel(tile, size, Point2::ORIGIN).unwrap();
        for dir in TileDirection::iter() {
            let neighbor = tile.adjacent(dir);
            let there = renderer
                .tile_to_pixel(neighbor, size, Point2::ORIGIN)
                .unwrap();
            let (a0, a1) =
                renderer.edge_transform(dir, size, 800.0).unwrap().endpoints();
            let (b0, b1) = renderer
                .edge_transform(dir.opposite(), size, 800.0)
                .unwrap()
                .endpoints();
            // Same side, walked in opposite directions
            assert_approx_eq!((here + a0).distance_to(there + b1), 0.0);
            assert_approx_eq!((here + a1).distance_to(there + b0), 0.0);
        }
    }

    #[test]
    fn test_default_renderer_is_valid() {
        // Default is the only way to get a renderer without going through
        // new, so it has to hold a config that new would accept
        let default = BoardRenderer::default();
        let validated = renderer();
        assert_eq!(default.render_config(), validated.render_config());
        assert!(BoardRenderer::new(*default.render_config()).is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(BoardRenderer::new(RenderConfig {
            small_stroke: f64::NAN,
            ..Default::default()
        })
        .is_err());
    }
}
