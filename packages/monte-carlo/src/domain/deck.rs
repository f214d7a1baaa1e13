//! The 52-card deck: deterministic construction, seeded shuffling and
//! sequential draw-with-removal.

use std::fmt;

use rand::Rng;
use tracing::trace;

use super::cards_types::{Card, Rank, Suit};
use super::seed::shuffle_rng;

pub const DECK_SIZE: usize = 52;

/// An ordered deck of slots, each holding a card or empty once drawn.
///
/// `next` always points at the lowest occupied slot, or is `None` when the
/// deck is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slots: [Option<Card>; DECK_SIZE],
    next: Option<usize>,
}

impl Deck {
    /// Generate a full 52-card deck in standard order: suits outer
    /// (Clubs, Diamonds, Hearts, Spades), ranks inner (Ace through King).
    pub fn new() -> Self {
        let mut slots = [None; DECK_SIZE];
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card { rank, suit }));
        for (slot, card) in slots.iter_mut().zip(cards) {
            *slot = Some(card);
        }
        Self {
            slots,
            next: Some(0),
        }
    }

    /// Fisher-Yates shuffle driven by the seeded stream: for `i` from 51
    /// down to 1, swap slot `i` with a uniform index in `[0, i]`.
    pub fn shuffle(&mut self, seed: i64) {
        let mut rng = shuffle_rng(seed);
        for i in (1..DECK_SIZE).rev() {
            let j = rng.random_range(0..=i);
            self.slots.swap(i, j);
        }
        self.next = self.find_next_card_index();
    }

    /// Remove and return the card in the lowest occupied slot.
    ///
    /// Returns `None` once every slot has been drawn.
    pub fn draw(&mut self) -> Option<Card> {
        let pos = self.next?;
        let card = self.slots[pos].take();
        self.next = self.find_next_card_index();
        trace!(pos, card = ?card, next = ?self.next, "drew card");
        card
    }

    /// Deck capacity, not the number of cards left.
    pub const fn size(&self) -> usize {
        DECK_SIZE
    }

    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }

    /// Card held by a slot, if the slot exists and has not been drawn.
    pub fn card_at(&self, pos: usize) -> Option<Card> {
        self.slots.get(pos).copied().flatten()
    }

    /// Overwrite a slot. Returns `false` if `pos` is outside the deck.
    pub fn set_card(&mut self, pos: usize, card: Option<Card>) -> bool {
        match self.slots.get_mut(pos) {
            Some(slot) => {
                *slot = card;
                self.next = self.find_next_card_index();
                true
            }
            None => false,
        }
    }

    /// Cards still in the deck, in draw order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }

    fn find_next_card_index(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_some)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.cards() {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
