//! Read-only, serialisable view of a game for consumers that render or
//! record it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::game::{Game, GameEngine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: i64,
    pub rows: usize,
    pub cols: usize,
    pub score: usize,
    pub cards_left: usize,
    pub is_win: bool,
    /// Row-major tableau slots; `None` marks an empty slot
    pub slots: Vec<Option<Card>>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            seed: game.seed(),
            rows: game.rows(),
            cols: game.cols(),
            score: game.score(),
            cards_left: game.number_of_cards_left(),
            is_win: game.is_win(),
            slots: game.tableau().slots().to_vec(),
        }
    }
}

impl GameSnapshot {
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Grid of two-character card symbols, `..` for empty slots.
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.slots.chunks(self.cols.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|slot| slot.map_or_else(|| "..".to_string(), |card| card.short()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
