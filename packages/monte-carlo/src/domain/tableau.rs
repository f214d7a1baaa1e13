//! The rows x cols grid of card slots that forms the play surface.

use super::cards_types::Card;
use super::coordinate::Coordinate;
use super::rules::validate_dimensions;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    rows: usize,
    cols: usize,
    slots: Vec<Option<Card>>,
}

impl Tableau {
    /// An empty tableau. Fails unless `1 <= rows * cols <= 52`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, DomainError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            slots: vec![None; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of slots (`rows * cols`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// Linear index of a coordinate, or `None` when it lies off the board.
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.to_index(self.cols))
    }

    pub fn coordinate_of(&self, index: usize) -> Coordinate {
        Coordinate::from_index(index, self.cols)
    }

    pub fn get(&self, coord: Coordinate) -> Option<Card> {
        self.index_of(coord).and_then(|index| self.slot(index))
    }

    pub fn slot(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    pub(crate) fn set(&mut self, index: usize, card: Option<Card>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = card;
        }
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn empty_slots(&self) -> usize {
        self.len() - self.occupied()
    }

    /// Compact occupied slots toward the front, keeping their relative
    /// order, and leave every empty slot at the end.
    pub fn shift(&mut self) {
        let mut write = 0;
        for read in 0..self.slots.len() {
            if let Some(card) = self.slots[read] {
                self.slots[write] = Some(card);
                write += 1;
            }
        }
        for slot in &mut self.slots[write..] {
            *slot = None;
        }
    }

    /// Distinct slots whose rows and columns each differ by at most one.
    /// Derived from coordinates so nothing wraps across a row boundary.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        a != b
            && a < self.len()
            && b < self.len()
            && self.coordinate_of(a).is_adjacent_to(self.coordinate_of(b))
    }

    /// Both slots occupied by cards of equal rank and adjacent to each other.
    pub fn is_matching_pair(&self, a: usize, b: usize) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Some(x), Some(y)) => x.rank == y.rank && self.are_adjacent(a, b),
            _ => false,
        }
    }

    /// Rows of slots, top to bottom.
    pub fn grid(&self) -> impl Iterator<Item = &[Option<Card>]> {
        self.slots.chunks(self.cols)
    }
}
