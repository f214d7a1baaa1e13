//! Move-choosing strategies for the autoplayer.

use std::fmt;
use std::sync::Mutex;

use monte_carlo::{Coordinate, Game, GameEngine};
use rand::prelude::*;

use crate::types::StrategyKind;

/// Errors that can occur while a strategy chooses a move.
#[derive(Debug)]
pub enum StrategyError {
    /// Strategy encountered an internal error
    Internal(String),
    /// Strategy produced a pair the engine refused
    InvalidMove(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
            StrategyError::InvalidMove(msg) => write!(f, "strategy invalid move: {msg}"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// A policy for picking which pair to remove next.
///
/// Returning `Ok(None)` means "no pair to remove", after which the simulator
/// consolidates.
pub trait Strategy: Send + Sync {
    fn choose_pair(&self, game: &Game) -> Result<Option<(Coordinate, Coordinate)>, StrategyError>;
}

/// Takes whatever the engine's hint search returns first.
pub struct FirstHint;

impl Strategy for FirstHint {
    fn choose_pair(&self, game: &Game) -> Result<Option<(Coordinate, Coordinate)>, StrategyError> {
        Ok(game.hint())
    }
}

/// Chooses uniformly among every available pair.
///
/// The RNG sits behind a `Mutex` because strategies are shared by reference.
pub struct RandomPair {
    rng: Mutex<StdRng>,
}

impl RandomPair {
    /// `Some(seed)` gives reproducible choices; `None` draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Strategy for RandomPair {
    fn choose_pair(&self, game: &Game) -> Result<Option<(Coordinate, Coordinate)>, StrategyError> {
        let pairs = game.matching_pairs();
        if pairs.is_empty() {
            return Ok(None);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| StrategyError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(pairs.choose(&mut *rng).copied())
    }
}

/// Build the strategy for one game. Random strategies are seeded from the
/// game so a seeded run is reproducible end to end.
pub fn create_strategy(kind: StrategyKind, strategy_seed: Option<u64>) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::FirstHint => Box::new(FirstHint),
        StrategyKind::Random => Box::new(RandomPair::new(strategy_seed)),
    }
}
