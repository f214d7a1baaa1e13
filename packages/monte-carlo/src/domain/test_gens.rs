// Proptest generators for domain types.
// Dimensions are generated valid by construction (rows * cols <= 52).

use proptest::prelude::*;

use crate::domain::{Card, Coordinate, Rank, Suit, DECK_SIZE};

pub fn suit() -> impl Strategy<Value = Suit> {
    proptest::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card { rank, suit })
}

pub fn seed() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Board dimensions that fit a single deck.
pub fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=8).prop_flat_map(|rows| {
        let max_cols = (DECK_SIZE / rows).min(13);
        (Just(rows), 1usize..=max_cols)
    })
}

/// A coordinate that may fall one step outside a `rows x cols` board.
pub fn coordinate_near(rows: usize, cols: usize) -> impl Strategy<Value = Coordinate> {
    (0..=rows, 0..=cols).prop_map(|(row, col)| Coordinate::new(row, col))
}
