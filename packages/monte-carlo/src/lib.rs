//! Monte Carlo solitaire engine.
//!
//! A rows x cols tableau is dealt from a seeded 52-card deck. The player
//! removes adjacent pairs of equal rank and consolidates the tableau to pull
//! fresh cards from the deck until every card has been paired.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    Card, Coordinate, Deck, Game, GameEngine, GameSnapshot, MoveRejection, Rank, Suit, Tableau,
    DECK_SIZE, HELP_TEXT,
};
pub use domain::{derive_strategy_seed, random_game_number};
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
