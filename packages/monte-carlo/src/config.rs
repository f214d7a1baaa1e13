//! Board configuration loaded from the environment.
//!
//! `MONTE_CARLO_ROWS` and `MONTE_CARLO_COLS` select the tableau size. Unset
//! variables fall back to the classic 5x5 layout.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{validate_dimensions, DEFAULT_COLS, DEFAULT_ROWS};
use crate::errors::domain::DomainError;

pub const ROWS_ENV: &str = "MONTE_CARLO_ROWS";
pub const COLS_ENV: &str = "MONTE_CARLO_COLS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize) -> Result<Self, DomainError> {
        let config = Self { rows, cols };
        config.validate()?;
        Ok(config)
    }

    /// Load from `MONTE_CARLO_ROWS` / `MONTE_CARLO_COLS`.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let rows = parse_dimension(ROWS_ENV, lookup(ROWS_ENV), defaults.rows)?;
        let cols = parse_dimension(COLS_ENV, lookup(COLS_ENV), defaults.cols)?;
        Self::new(rows, cols).map_err(|e| DomainError::config(format!("{ROWS_ENV}/{COLS_ENV}: {e}")))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_dimensions(self.rows, self.cols)
    }

    /// Number of tableau slots.
    pub fn slots(&self) -> usize {
        self.rows * self.cols
    }
}

fn parse_dimension(key: &str, value: Option<String>, default: usize) -> Result<usize, DomainError> {
    match value {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|e| DomainError::config(format!("{key}={raw:?} is not a valid size: {e}"))),
    }
}
