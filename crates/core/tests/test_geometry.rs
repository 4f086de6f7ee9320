use assert_approx_eq::assert_approx_eq;
use hexboard::{
    Board, BoardRenderer, HexDirection, Point2, TileDirection, TilePoint,
    SMALL_BREAKPOINT, SQRT_3,
};
use strum::IntoEnumIterator;

const SIZES: [f64; 4] = [1.0, 17.5, 60.0, 250.0];

fn assert_points_eq(a: Point2, b: Point2) {
    assert!(
        a.distance_to(b) < 1e-9,
        "expected {} and {} to be the same point",
        a,
        b
    );
}

/// The midpoint of a shared side has to be the same pixel no matter which of
/// the two tiles it's computed from. This is what keeps roads from showing a
/// seam between tiles.
#[test]
fn test_shared_edges_line_up() {
    let renderer = BoardRenderer::default();
    let center = Point2::new(320.0, 240.0);
    for size in SIZES {
        for tile in Board::new(3).tiles() {
            let tile_pos = renderer.tile_to_pixel(tile, size, center).unwrap();
            for direction in TileDirection::iter() {
                let neighbor = tile.adjacent(direction);
                let neighbor_pos =
                    renderer.tile_to_pixel(neighbor, size, center).unwrap();
                let here = renderer
                    .edge_transform(direction, size, 1024.0)
                    .unwrap();
                let there = renderer
                    .edge_transform(direction.opposite(), size, 1024.0)
                    .unwrap();

                assert_points_eq(
                    tile_pos + here.translation,
                    neighbor_pos + there.translation,
                );
                assert_approx_eq!(
                    (there.rotation - here.rotation).normalized().0,
                    180.0
                );
            }
        }
    }
}

#[test]
fn test_scale_linearity() {
    let renderer = BoardRenderer::default();
    for tile in Board::new(2).tiles() {
        let unit = renderer.tile_to_pixel(tile, 1.0, Point2::ORIGIN).unwrap();
        for size in SIZES {
            let scaled =
                renderer.tile_to_pixel(tile, size, Point2::ORIGIN).unwrap();
            assert_points_eq(scaled, unit * size);
        }
    }
    for direction in TileDirection::iter() {
        let unit = renderer.edge_transform(direction, 1.0, 800.0).unwrap();
        for size in SIZES {
            let scaled =
                renderer.edge_transform(direction, size, 800.0).unwrap();
            assert_points_eq(scaled.translation, unit.translation * size);
            assert_eq!(scaled.rotation, unit.rotation);
            assert_eq!(scaled.length, size);
        }
    }
}

#[test]
fn test_deterministic() {
    let renderer = BoardRenderer::default();
    let tile = TilePoint::new(-2, 3);
    let center = Point2::new(123.4, 567.8);
    let first = renderer.tile_to_pixel(tile, 33.3, center).unwrap();
    let first_edge = renderer
        .edge_style(tile, TileDirection::SW, 33.3, center, 500.0)
        .unwrap();
    for _ in 0..100 {
        // Bit-identical, not just close
        let pos = renderer.tile_to_pixel(tile, 33.3, center).unwrap();
        assert_eq!(pos.x.to_bits(), first.x.to_bits());
        assert_eq!(pos.y.to_bits(), first.y.to_bits());
        assert_eq!(
            renderer
                .edge_style(tile, TileDirection::SW, 33.3, center, 500.0)
                .unwrap(),
            first_edge
        );
    }
}

/// A full walkthrough of placing one road on a phone-sized and a
/// desktop-sized viewport
#[test]
fn test_place_road() {
    let renderer = BoardRenderer::default();
    let center = Point2::new(500.0, 500.0);
    let tile = TilePoint::from_cube(1, -1, 0).unwrap();

    let pos = renderer.tile_to_pixel(tile, 100.0, center).unwrap();
    assert_approx_eq!(pos.x, 500.0 + 50.0 * SQRT_3);
    assert_approx_eq!(pos.y, 350.0);

    let direction: TileDirection = "southeast".parse().unwrap();
    let phone = renderer
        .edge_transform(direction, 100.0, SMALL_BREAKPOINT - 1.0)
        .unwrap();
    let desktop = renderer
        .edge_transform(direction, 100.0, SMALL_BREAKPOINT)
        .unwrap();
    assert_eq!(phone.rotation.0, 150.0);
    assert_eq!(phone.thickness, 8.0);
    assert_eq!(desktop.thickness, 12.0);
    assert_eq!(phone.translation, desktop.translation);
    assert_approx_eq!(desktop.translation.x, 25.0 * SQRT_3);
    assert_approx_eq!(desktop.translation.y, 75.0);

    let style = renderer
        .edge_style(tile, direction, 100.0, center, 1920.0)
        .unwrap();
    assert_eq!(style.left, pos.x);
    assert_eq!(style.top, pos.y);
    assert!(style.transform.ends_with("rotate(150deg)"));
}

#[test]
fn test_invalid_inputs() {
    let renderer = BoardRenderer::default();
    assert!(renderer
        .tile_to_pixel(TilePoint::ORIGIN, 0.0, Point2::ORIGIN)
        .is_err());
    assert!(renderer
        .tile_to_pixel(TilePoint::ORIGIN, 10.0, Point2::new(f64::NAN, 0.0))
        .is_err());
    assert!(renderer
        .edge_transform(TileDirection::E, 10.0, -1.0)
        .is_err());
    assert!("north".parse::<TileDirection>().is_err());
    assert!(TilePoint::from_f64(f64::NAN, 0.0).is_err());
    assert!(TilePoint::from_cube(1, 1, 1).is_err());
    assert!(TilePoint::from_f64(0.5, 0.0).is_err());
}
