//! The Monte Carlo game engine.
//!
//! `Game` owns the tableau, the deck and the score. Every operation runs to
//! completion synchronously; callers serialize access to a game instance.

use std::fmt;

use rand::Rng;
use tracing::{debug, trace, warn};

use super::cards_types::{Card, Rank, Suit};
use super::coordinate::Coordinate;
use super::deck::{Deck, DECK_SIZE};
use super::hint;
use super::rules::{CARDS_PER_PAIR, HELP_TEXT, WINNING_SCORE};
use super::seed::random_seed;
use super::snapshot::GameSnapshot;
use super::tableau::Tableau;
use crate::config::GameConfig;
use crate::errors::domain::DomainError;

/// Why a pair of coordinates was not removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// A coordinate lies outside the tableau
    OutOfBounds,
    /// Both coordinates name the same slot
    SameSlot,
    /// At least one slot holds no card
    EmptySlot,
    /// The two cards have different ranks
    RankMismatch,
    /// The slots are more than one row or column apart
    NotAdjacent,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "coordinate outside the tableau"),
            MoveRejection::SameSlot => write!(f, "cannot pair a card with itself"),
            MoveRejection::EmptySlot => write!(f, "slot is empty"),
            MoveRejection::RankMismatch => write!(f, "ranks differ"),
            MoveRejection::NotAdjacent => write!(f, "cards are not adjacent"),
        }
    }
}

/// The operations a presentation layer drives a solitaire engine through.
///
/// `hint` and `is_hint_implemented` have defaults for engines that cannot
/// search for hints; the consumer disables its hint control when the
/// capability query returns `false`.
pub trait GameEngine {
    /// Start a fresh deal from `seed` and remember the seed for replay.
    fn new_game(&mut self, seed: i64);

    /// Deal the current seed again from scratch.
    fn replay(&mut self);

    /// Compact the tableau and refill trailing empty slots from the deck.
    fn consolidate(&mut self);

    /// Remove two adjacent cards of equal rank. Returns `false` and leaves
    /// the game untouched when the pair is not valid.
    fn remove_cards(&mut self, a: Coordinate, b: Coordinate) -> bool;

    fn suit_at(&self, coord: Coordinate) -> Option<Suit>;

    fn rank_at(&self, coord: Coordinate) -> Option<Rank>;

    /// Cards removed so far.
    fn score(&self) -> usize;

    /// Undealt cards remaining in the deck.
    fn number_of_cards_left(&self) -> usize;

    fn is_win(&self) -> bool;

    fn hint(&self) -> Option<(Coordinate, Coordinate)> {
        None
    }

    fn is_hint_implemented(&self) -> bool {
        false
    }

    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    tableau: Tableau,
    deck: Deck,
    /// Seed of the current deal, kept for replay
    seed: i64,
    /// Cumulative cards paired off
    cards_removed: usize,
    /// Cards drawn after the initial fill
    cards_dealt: usize,
}

impl Game {
    /// Build a `rows x cols` game and deal it from a seed drawn from
    /// `seed_source`.
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        seed_source: &mut R,
    ) -> Result<Self, DomainError> {
        Self::with_seed(rows, cols, random_seed(seed_source))
    }

    /// Build a `rows x cols` game and deal it from `seed`.
    pub fn with_seed(rows: usize, cols: usize, seed: i64) -> Result<Self, DomainError> {
        let tableau = Tableau::new(rows, cols)?;
        let mut game = Self {
            tableau,
            deck: Deck::new(),
            seed,
            cards_removed: 0,
            cards_dealt: 0,
        };
        game.deal();
        Ok(game)
    }

    pub fn from_config(config: &GameConfig, seed: i64) -> Result<Self, DomainError> {
        Self::with_seed(config.rows, config.cols, seed)
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn rows(&self) -> usize {
        self.tableau.rows()
    }

    pub fn cols(&self) -> usize {
        self.tableau.cols()
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn card_at(&self, coord: Coordinate) -> Option<Card> {
        self.tableau.get(coord)
    }

    pub fn occupied_slots(&self) -> usize {
        self.tableau.occupied()
    }

    /// Cards drawn from the deck after the initial fill.
    pub fn cards_dealt(&self) -> usize {
        self.cards_dealt
    }

    /// Every available pair in hint scan order.
    pub fn matching_pairs(&self) -> Vec<(Coordinate, Coordinate)> {
        hint::matching_pairs(&self.tableau)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Validate and remove a pair, reporting why a refused pair failed.
    pub fn try_remove_cards(&mut self, a: Coordinate, b: Coordinate) -> Result<(), MoveRejection> {
        let ia = self.tableau.index_of(a).ok_or(MoveRejection::OutOfBounds)?;
        let ib = self.tableau.index_of(b).ok_or(MoveRejection::OutOfBounds)?;
        if ia == ib {
            return Err(MoveRejection::SameSlot);
        }
        let (Some(first), Some(second)) = (self.tableau.slot(ia), self.tableau.slot(ib)) else {
            return Err(MoveRejection::EmptySlot);
        };
        if first.rank != second.rank {
            return Err(MoveRejection::RankMismatch);
        }
        if !a.is_adjacent_to(b) {
            return Err(MoveRejection::NotAdjacent);
        }

        self.tableau.take(ia);
        self.tableau.take(ib);
        self.cards_removed += CARDS_PER_PAIR;
        debug!(%a, %b, rank = %first.rank, score = self.cards_removed, "removed pair");
        Ok(())
    }

    /// Compact occupied slots to the front, preserving order.
    pub fn shift(&mut self) {
        self.tableau.shift();
    }

    /// Reset counters, rebuild and shuffle the deck from the stored seed,
    /// and fill every tableau slot in order.
    fn deal(&mut self) {
        self.cards_removed = 0;
        self.cards_dealt = 0;
        self.deck = Deck::new();
        self.deck.shuffle(self.seed);
        for index in 0..self.tableau.len() {
            let card = self.deck.draw();
            self.tableau.set(index, card);
        }
        debug!(
            seed = self.seed,
            rows = self.rows(),
            cols = self.cols(),
            cards_left = self.number_of_cards_left(),
            "dealt game"
        );
    }

    #[cfg(test)]
    pub(crate) fn set_slot(&mut self, coord: Coordinate, card: Option<Card>) {
        if let Some(index) = self.tableau.index_of(coord) {
            self.tableau.set(index, card);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: usize) {
        self.cards_removed = score;
    }
}

impl GameEngine for Game {
    fn new_game(&mut self, seed: i64) {
        self.seed = seed;
        self.deal();
    }

    fn replay(&mut self) {
        debug!(seed = self.seed, "replaying game");
        self.deal();
    }

    fn consolidate(&mut self) {
        self.shift();
        let mut empty = self.tableau.empty_slots();
        let before = empty;
        while empty > 0 && self.number_of_cards_left() > 0 {
            let index = self.tableau.len() - empty;
            let Some(card) = self.deck.draw() else {
                warn!(
                    cards_dealt = self.cards_dealt,
                    "deck exhausted before the dealt count says it should be"
                );
                break;
            };
            trace!(index, %card, "refilled slot");
            self.tableau.set(index, Some(card));
            self.cards_dealt += 1;
            empty -= 1;
        }
        debug!(
            refilled = before - empty,
            cards_left = self.number_of_cards_left(),
            "consolidated tableau"
        );
    }

    fn remove_cards(&mut self, a: Coordinate, b: Coordinate) -> bool {
        match self.try_remove_cards(a, b) {
            Ok(()) => true,
            Err(reason) => {
                trace!(%a, %b, %reason, "rejected pair");
                false
            }
        }
    }

    fn suit_at(&self, coord: Coordinate) -> Option<Suit> {
        self.card_at(coord).map(|card| card.suit)
    }

    fn rank_at(&self, coord: Coordinate) -> Option<Rank> {
        self.card_at(coord).map(|card| card.rank)
    }

    fn score(&self) -> usize {
        self.cards_removed
    }

    /// Deck capacity minus the initial fill minus later deals.
    fn number_of_cards_left(&self) -> usize {
        DECK_SIZE
            .saturating_sub(self.tableau.len())
            .saturating_sub(self.cards_dealt)
    }

    /// Defined by score rather than an empty tableau.
    fn is_win(&self) -> bool {
        self.cards_removed == WINNING_SCORE
    }

    fn hint(&self) -> Option<(Coordinate, Coordinate)> {
        hint::first_matching_pair(&self.tableau)
    }

    fn is_hint_implemented(&self) -> bool {
        true
    }
}
