//! The edge transform descriptor. This is the structured form of "take a
//! horizontal strip and lay it along one side of a tile". String forms for
//! specific render targets live in [crate::render::css] and
//! [crate::render::svg].

use crate::{
    board::hex::{TileDirection, VertexDirection},
    render::{
        unit::{Degrees, Point2},
        SQRT_3,
    },
};
use nalgebra::{Isometry2, Matrix3, Vector2};
use serde::{Deserialize, Serialize};

/// Rotation that lays a strip pointing along `+x` onto the given side. The
/// strip runs clockwise, i.e. from the side's first vertex (see
/// [TileDirection::adjacent_vertex_directions]) to its second.
///
/// Consecutive sides are exactly 60° apart, starting at 30° for `NE`.
pub fn edge_rotation(direction: TileDirection) -> Degrees {
    match direction {
        TileDirection::NE => Degrees(30.0),
        TileDirection::E => Degrees(90.0),
        TileDirection::SE => Degrees(150.0),
        TileDirection::SW => Degrees(210.0),
        TileDirection::W => Degrees(270.0),
        TileDirection::NW => Degrees(330.0),
    }
}

/// Offset from a tile's center to the midpoint of one of its sides, for a
/// tile with a vertex radius of `1`. Multiply by the tile size to get pixels.
///
/// Each of these is exactly half of the center-to-center offset to the
/// neighbor in that direction, which is what makes shared edges line up.
pub fn side_midpoint_unit(direction: TileDirection) -> Point2 {
    match direction {
        TileDirection::NE => Point2::new(SQRT_3 / 4.0, -0.75),
        TileDirection::E => Point2::new(SQRT_3 / 2.0, 0.0),
        TileDirection::SE => Point2::new(SQRT_3 / 4.0, 0.75),
        TileDirection::SW => Point2::new(-SQRT_3 / 4.0, 0.75),
        TileDirection::W => Point2::new(-SQRT_3 / 2.0, 0.0),
        TileDirection::NW => Point2::new(-SQRT_3 / 4.0, -0.75),
    }
}

/// Offset from a tile's center to one of its vertices, for a tile with a
/// vertex radius of `1`
pub fn vertex_unit(direction: VertexDirection) -> Point2 {
    match direction {
        VertexDirection::N => Point2::new(0.0, -1.0),
        VertexDirection::ENE => Point2::new(SQRT_3 / 2.0, -0.5),
        VertexDirection::ESE => Point2::new(SQRT_3 / 2.0, 0.5),
        VertexDirection::S => Point2::new(0.0, 1.0),
        VertexDirection::WSW => Point2::new(-SQRT_3 / 2.0, 0.5),
        VertexDirection::WNW => Point2::new(-SQRT_3 / 2.0, -0.5),
    }
}

/// Placement of a rectangular strip (a road slot) along one side of a tile,
/// relative to that tile's center.
///
/// In its default orientation, the strip is `length` long along `+x`,
/// `thickness` thick along `y`, and centered on the origin. Applying
/// [Self::to_matrix] to it rotates it by [Self::rotation] about its own
/// center, then moves that center to [Self::translation].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeTransform {
    /// Offset from the tile center to the midpoint of the side. This only
    /// depends on direction and tile size.
    pub translation: Point2,
    /// Clockwise rotation of the strip. This only depends on direction.
    pub rotation: Degrees,
    /// Length of the strip, which is also the length of a tile side
    pub length: f64,
    /// Thickness of the strip. This is the only viewport-dependent value.
    pub thickness: f64,
}

impl EdgeTransform {
    /// Build the transform for one side of a tile. Inputs are assumed to be
    /// validated already, see [crate::BoardRenderer::edge_transform].
    pub(crate) fn new(
        direction: TileDirection,
        size: f64,
        thickness: f64,
    ) -> Self {
        Self {
            translation: side_midpoint_unit(direction) * size,
            rotation: edge_rotation(direction),
            length: size,
            thickness,
        }
    }

    /// Top-left corner of the **unrotated** strip box, relative to the tile
    /// center. Render targets that position a box by its corner and rotate it
    /// about its center (e.g. an absolutely positioned HTML element) need
    /// this instead of [Self::translation]. The thickness enters here, so this
    /// is the one place where the viewport shifts anything.
    pub fn box_origin(&self) -> Point2 {
        self.translation - Point2::new(self.length / 2.0, self.thickness / 2.0)
    }

    /// The affine matrix (in homogeneous coordinates) that maps strip-local
    /// coordinates to tile-relative screen coordinates. Rotation happens
    /// first, then translation.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Isometry2::new(
            Vector2::from(self.translation),
            self.rotation.to_radians(),
        )
        .to_homogeneous()
    }

    /// Map a point in strip-local coordinates into tile-relative screen space
    pub fn apply(&self, local: Point2) -> Point2 {
        let local: nalgebra::Point2<f64> = local.into();
        Point2::from(self.to_matrix().transform_point(&local))
    }

    /// Where the two ends of the strip's center line land, relative to the
    /// tile center. These are exactly the two vertices of the side, in
    /// clockwise order.
    pub fn endpoints(&self) -> (Point2, Point2) {
        let half = self.length / 2.0;
        (
            self.apply(Point2::new(-half, 0.0)),
            self.apply(Point2::new(half, 0.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::HexDirection;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_six_fold_rotation() {
        let angles: Vec<f64> =
            TileDirection::iter().map(|dir| edge_rotation(dir).0).collect();
        assert_eq!(angles.len(), 6);

        // Each step is 60°, and going all the way around gets back to the
        // start
        let mut total = 0.0;
        for (i, angle) in angles.iter().enumerate() {
            let next = angles[(i + 1) % angles.len()];
            let step = Degrees(next - angle).normalized().0;
            assert_eq!(step, 60.0);
            total += step;
        }
        assert_eq!(total, 360.0);
    }

    #[test]
    fn test_opposite_sides_are_parallel() {
        for dir in TileDirection::iter() {
            let delta = edge_rotation(dir.opposite()) - edge_rotation(dir);
            assert_eq!(delta.normalized(), Degrees(180.0));
            assert_eq!(
                side_midpoint_unit(dir.opposite()),
                -side_midpoint_unit(dir)
            );
        }
    }

    #[test]
    fn test_midpoint_is_apothem_away() {
        for dir in TileDirection::iter() {
            assert_approx_eq!(
                side_midpoint_unit(dir).magnitude(),
                SQRT_3 / 2.0
            );
        }
    }

    #[test]
    fn test_endpoints_are_vertices() {
        for dir in TileDirection::iter() {
            let transform = EdgeTransform::new(dir, 2.0, 1.0);
            let (start, end) = transform.endpoints();
            let (start_dir, end_dir) = dir.adjacent_vertex_directions();
            let expected_start = vertex_unit(start_dir) * 2.0;
            let expected_end = vertex_unit(end_dir) * 2.0;
            assert_approx_eq!(start.x, expected_start.x);
            assert_approx_eq!(start.y, expected_start.y);
            assert_approx_eq!(end.x, expected_end.x);
            assert_approx_eq!(end.y, expected_end.y);
        }
    }

    #[test]
    fn test_box_origin() {
        let transform = EdgeTransform::new(TileDirection::E, 100.0, 12.0);
        assert_approx_eq!(transform.box_origin().x, 50.0 * SQRT_3 - 50.0);
        assert_approx_eq!(transform.box_origin().y, -6.0);
    }
}
