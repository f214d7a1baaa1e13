//! In-memory autoplayer for Monte Carlo games.
//!
//! Drives a `Game` through the public engine contract only: ask the strategy
//! for a pair, remove it, and consolidate when no pair is offered.

use monte_carlo::{DomainError, Game, GameConfig, GameEngine, GameSnapshot};
use tracing::{debug, trace};

use crate::strategy::{Strategy, StrategyError};
use crate::types::StopReason;

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: i64,
    pub score: usize,
    pub won: bool,
    pub cards_left: usize,
    pub pairs_removed: u32,
    pub consolidations: u32,
    pub steps: u32,
    pub stop_reason: StopReason,
    /// Board as it stood when play stopped
    pub final_state: GameSnapshot,
}

pub struct Simulator {
    game: Game,
    max_steps: u32,
}

impl Simulator {
    pub fn new(config: &GameConfig, seed: i64, max_steps: u32) -> Result<Self, DomainError> {
        Ok(Self {
            game: Game::from_config(config, seed)?,
            max_steps,
        })
    }

    pub fn simulate_game(mut self, strategy: &dyn Strategy) -> Result<GameResult, StrategyError> {
        let mut pairs_removed = 0u32;
        let mut consolidations = 0u32;
        let mut steps = 0u32;

        let stop_reason = loop {
            if self.game.is_win() {
                break StopReason::Won;
            }
            if steps >= self.max_steps {
                break StopReason::StepLimit;
            }
            steps += 1;

            match strategy.choose_pair(&self.game)? {
                Some((a, b)) => {
                    if !self.game.remove_cards(a, b) {
                        return Err(StrategyError::InvalidMove(format!(
                            "engine refused pair {a} {b}"
                        )));
                    }
                    pairs_removed += 1;
                    trace!(%a, %b, score = self.game.score(), "removed pair");
                }
                None => {
                    let before = self.game.tableau().clone();
                    self.game.consolidate();
                    consolidations += 1;
                    if *self.game.tableau() == before {
                        break StopReason::Stuck;
                    }
                }
            }
        };

        debug!(
            seed = self.game.seed(),
            score = self.game.score(),
            ?stop_reason,
            steps,
            "game finished"
        );

        Ok(GameResult {
            seed: self.game.seed(),
            score: self.game.score(),
            won: self.game.is_win(),
            cards_left: self.game.number_of_cards_left(),
            pairs_removed,
            consolidations,
            steps,
            stop_reason,
            final_state: self.game.snapshot(),
        })
    }
}
