#![cfg(feature = "json")]

use hexboard::{Board, PlayerColor, TileDirection, TilePoint};

#[test]
fn test_board_from_json() {
    let board = Board::from_json(
        r#"{
            "radius": 2,
            "roads": [
                {"tile": {"q": 0, "r": 0}, "direction": "NE", "color": "RED"},
                {"tile": {"q": 1, "r": 0}, "direction": "WEST", "color": "BLUE"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(board.radius, 2);
    assert_eq!(board.roads.len(), 2);
    assert_eq!(board.roads[1].tile, TilePoint::new(1, 0));
    assert_eq!(board.roads[1].direction, TileDirection::W);
    assert_eq!(board.roads[1].color, PlayerColor::Blue);

    let reparsed = Board::from_json(&board.to_json()).unwrap();
    assert_eq!(reparsed, board);
}

#[test]
fn test_board_from_json_invalid() {
    // Unknown direction
    assert!(Board::from_json(
        r#"{"radius": 1, "roads": [
            {"tile": {"q": 0, "r": 0}, "direction": "UP", "color": "RED"}
        ]}"#
    )
    .is_err());
    // Off the board
    assert!(Board::from_json(
        r#"{"radius": 1, "roads": [
            {"tile": {"q": 4, "r": 0}, "direction": "E", "color": "RED"}
        ]}"#
    )
    .is_err());
    // No roads is fine
    assert_eq!(Board::from_json(r#"{"radius": 0}"#).unwrap(), Board::new(0));
}
