//! Snapshot view and serialised shapes.

use crate::domain::test_state_helpers::{game_with_layout, seeded_game};
use crate::domain::{Card, Coordinate, GameEngine, GameSnapshot, Rank, Suit};

#[test]
fn snapshot_mirrors_engine_state() {
    let mut game = seeded_game(5, 5, 77);
    let snap = game.snapshot();
    assert_eq!(snap.seed, 77);
    assert_eq!((snap.rows, snap.cols), (5, 5));
    assert_eq!(snap.score, 0);
    assert_eq!(snap.cards_left, 27);
    assert!(!snap.is_win);
    assert_eq!(snap.occupied(), 25);

    if let Some((a, b)) = game.hint() {
        game.remove_cards(a, b);
        let snap = game.snapshot();
        assert_eq!(snap.score, 2);
        assert_eq!(snap.occupied(), 23);
    }
}

#[test]
fn display_renders_grid_of_symbols() {
    #[rustfmt::skip]
    let game = game_with_layout(2, 3, &[
        "ac", "..", "td",
        "kh", "2s", "..",
    ]);
    assert_eq!(game.snapshot().to_string(), "ac .. td\nkh 2s ..\n");
}

#[test]
fn cards_serialise_with_upper_case_names() {
    let card = Card::new(Rank::Ace, Suit::Clubs);
    let json = serde_json::to_value(card).unwrap();
    assert_eq!(json, serde_json::json!({ "rank": "ACE", "suit": "CLUBS" }));

    let coord = serde_json::to_value(Coordinate::new(1, 2)).unwrap();
    assert_eq!(coord, serde_json::json!({ "row": 1, "col": 2 }));
}

#[test]
fn snapshot_json_marks_empty_slots_as_null() {
    #[rustfmt::skip]
    let game = game_with_layout(1, 2, &["..", "9c"]);
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["slots"][0], serde_json::Value::Null);
    assert_eq!(json["slots"][1]["rank"], "NINE");
    let back: GameSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, game.snapshot());
}
