//! Game rules: board limits, scoring constants and the player help text.

use super::deck::DECK_SIZE;
use crate::errors::domain::{DomainError, ValidationKind};

/// Classic Monte Carlo layout.
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;

/// Score gained for each accepted pair.
pub const CARDS_PER_PAIR: usize = 2;

/// A game is won once every card of the deck has been paired off.
pub const WINNING_SCORE: usize = DECK_SIZE;

pub const HELP_TEXT: &str = "This is a Monte Carlo Solitaire Game. The objective is to \n\
pair cards of the same rank (suit is irrelevant). Cards must \n\
be directly above, beside, or diagonal to be paired. \n\
If there are no more pairs, consolidate to get new cards. \n\
Game is won when all cards are paired.";

/// Check that a `rows x cols` tableau can be dealt from a single deck.
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), DomainError> {
    if rows == 0 || cols == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidDimensions,
            format!("Tableau must have at least one row and column, got {rows}x{cols}"),
        ));
    }
    match rows.checked_mul(cols) {
        Some(slots) if slots <= DECK_SIZE => Ok(()),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidDimensions,
            format!("Tableau {rows}x{cols} exceeds deck size {DECK_SIZE}"),
        )),
    }
}
