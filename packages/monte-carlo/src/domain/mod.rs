//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_types;
pub mod coordinate;
pub mod deck;
pub mod game;
pub mod hint;
pub mod rules;
pub mod seed;
pub mod snapshot;
pub mod tableau;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_game;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use coordinate::Coordinate;
pub use deck::{Deck, DECK_SIZE};
pub use game::{Game, GameEngine, MoveRejection};
pub use rules::{validate_dimensions, HELP_TEXT, WINNING_SCORE};
pub use seed::{derive_strategy_seed, random_game_number, random_seed};
pub use snapshot::GameSnapshot;
pub use tableau::Tableau;
