//! Builders for games in a known state.

use crate::domain::{Card, Coordinate, Game};

pub fn seeded_game(rows: usize, cols: usize, seed: i64) -> Game {
    test_support::logging::init();
    Game::with_seed(rows, cols, seed).expect("valid dimensions")
}

/// A game whose tableau is overwritten with `layout`, one token per slot in
/// row-major order: a card symbol pair such as `"ac"` or `".."` for empty.
///
/// The deck underneath is the seed-0 deck, so later refills still work.
pub fn game_with_layout(rows: usize, cols: usize, layout: &[&str]) -> Game {
    assert_eq!(layout.len(), rows * cols, "layout must fill the tableau");
    let mut game = seeded_game(rows, cols, 0);
    for (index, token) in layout.iter().enumerate() {
        let card = match *token {
            ".." => None,
            symbol => Some(symbol.parse::<Card>().expect("valid card token")),
        };
        game.set_slot(Coordinate::from_index(index, cols), card);
    }
    game
}
