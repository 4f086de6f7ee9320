use crate::{
    board::{
        hex::{TileEdge, TilePoint},
        Board,
    },
    error::GeometryError,
    render::{
        transform::EdgeTransform,
        unit::{Color3, Point2},
        BoardRenderer,
    },
};
use svg::{
    node::{
        element::{Group, Polygon, Rectangle},
        Comment,
    },
    Document,
};

const TILE_COLOR: Color3 = Color3::new_int(233, 214, 164);
const TILE_BORDER_COLOR: Color3 = Color3::new_int(120, 98, 64);
const EMPTY_EDGE_COLOR: Color3 = Color3::new_int(255, 255, 255);

/// Format a transform as an SVG `transform` attribute, for a strip drawn as a
/// rectangle centered on the origin. SVG applies the list right to left, so
/// the strip is rotated in place and then moved out to the side midpoint.
pub fn svg_transform(anchor: Point2, transform: &EdgeTransform) -> String {
    let position = anchor + transform.translation;
    format!(
        "translate({} {}) rotate({})",
        position.x, position.y, transform.rotation.0
    )
}

/// Render a board as an SVG. This is a flat top-down rendering: every tile,
/// a faint outline for every empty edge, and a filled strip for every road.
/// The origin tile is drawn at `(0, 0)`, and the view box is sized to fit
/// the whole board.
pub fn board_to_svg(
    board: &Board,
    renderer: &BoardRenderer,
    size: f64,
    viewport_width: f64,
) -> Result<Document, GeometryError> {
    let stroke = renderer.stroke_width(viewport_width)?;
    let radius = f64::from(board.radius);
    // Distance from center of origin tile to center of right-most tile,
    // **plus** the center of that right-most tile to its right-most edge
    let view_box_max_x = (radius + 0.5) * BoardRenderer::tile_width(size)
        + stroke;
    // Same thing, but for the bottom-most tile and its bottom vertex
    let view_box_max_y = radius * 1.5 * size
        + BoardRenderer::tile_height(size) / 2.0
        + stroke;

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                // Top-left corner
                -view_box_max_x,
                -view_box_max_y,
                // Width and height
                view_box_max_x * 2.0,
                view_box_max_y * 2.0,
            ),
        )
        .add(Comment::new(format!(
            " radius={} size={} viewport_width={} ",
            board.radius, size, viewport_width
        )));

    let vertices: Vec<(f64, f64)> = renderer
        .tile_vertices(size)?
        .into_iter()
        .map(|vertex| (vertex.x, vertex.y))
        .collect();
    for tile in board.tiles() {
        let pos = renderer.tile_to_pixel(tile, size, Point2::ORIGIN)?;
        document = document.add(draw_tile(tile, pos, &vertices));
    }

    let mut edges = Group::new().set("class", "edges");
    for edge in board.edges() {
        edges = edges.add(
            draw_edge(renderer, edge, size, viewport_width)?
                .set("fill", EMPTY_EDGE_COLOR.to_html())
                .set("fill-opacity", 0.4),
        );
    }
    document = document.add(edges);

    let mut roads = Group::new().set("class", "roads");
    for road in &board.roads {
        roads = roads.add(
            draw_edge(renderer, road.edge(), size, viewport_width)?
                .set("fill", road.color.color().to_html()),
        );
    }
    document = document.add(roads);

    log::debug!(
        "Rendered board of radius {} with {} roads as SVG",
        board.radius,
        board.roads.len()
    );
    Ok(document)
}

/// Generate an SVG polygon for a single tile
fn draw_tile(tile: TilePoint, pos: Point2, vertices: &[(f64, f64)]) -> Group {
    Group::new()
        // Translate the tile to its correct position
        .set("transform", format!("translate({} {})", pos.x, pos.y))
        .add(Comment::new(tile.to_string())) // Readability!
        .add(
            Polygon::new()
                .set("points", vertices.to_vec())
                .set("fill", TILE_COLOR.to_html())
                .set("stroke", TILE_BORDER_COLOR.to_html())
                .set("stroke-width", 1),
        )
}

/// Generate a strip rectangle for one side of one tile
fn draw_edge(
    renderer: &BoardRenderer,
    edge: TileEdge,
    size: f64,
    viewport_width: f64,
) -> Result<Rectangle, GeometryError> {
    let anchor = renderer.tile_to_pixel(edge.tile, size, Point2::ORIGIN)?;
    let transform =
        renderer.edge_transform(edge.direction, size, viewport_width)?;
    Ok(Rectangle::new()
        .set("x", -transform.length / 2.0)
        .set("y", -transform.thickness / 2.0)
        .set("width", transform.length)
        .set("height", transform.thickness)
        .set("transform", svg_transform(anchor, &transform)))
}
