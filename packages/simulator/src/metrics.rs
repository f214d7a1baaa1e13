//! Metrics collection and output for simulation results.

use monte_carlo::GameSnapshot;
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::{MetricsLevel, StopReason, StrategyKind};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: i64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state: Option<GameSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub strategy: StrategyKind,
    pub rows: usize,
    pub cols: usize,
    pub total_games: u32,
    pub max_steps: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub score: usize,
    pub won: bool,
    pub cards_left: usize,
    pub pairs_removed: u32,
    pub consolidations: u32,
    pub steps: u32,
    pub stop_reason: StopReason,
    pub duration_ms: f64,
}

/// Build metrics from a game result.
pub fn build_game_metrics(
    game_id: u32,
    config: RunConfig,
    result: &GameResult,
    level: &MetricsLevel,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let final_state = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(result.final_state.clone()),
    };

    GameMetrics {
        game_id,
        seed: result.seed,
        timestamp,
        config,
        result: GameResultMetrics {
            score: result.score,
            won: result.won,
            cards_left: result.cards_left,
            pairs_removed: result.pairs_removed,
            consolidations: result.consolidations,
            steps: result.steps,
            stop_reason: result.stop_reason,
            duration_ms,
        },
        final_state,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: i64,
    pub strategy: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub won: bool,
    pub score: usize,
    pub cards_left: usize,
    pub pairs_removed: u32,
    pub consolidations: u32,
    pub steps: u32,
    pub stop_reason: StopReason,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            strategy: metrics.config.strategy.name(),
            rows: metrics.config.rows,
            cols: metrics.config.cols,
            won: metrics.result.won,
            score: metrics.result.score,
            cards_left: metrics.result.cards_left,
            pairs_removed: metrics.result.pairs_removed,
            consolidations: metrics.result.consolidations,
            steps: metrics.result.steps,
            stop_reason: metrics.result.stop_reason,
        }
    }
}
