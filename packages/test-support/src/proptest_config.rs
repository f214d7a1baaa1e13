//! Shared proptest configuration.
//!
//! Env knobs:
//! - `PROPTEST_CASES`: number of cases per property (e.g. 32, 800, 5000).
//! - `PROPTEST_MAX_SHRINK_MS`: optional cap for shrinking time in milliseconds.
//!
//! Generate valid inputs by construction rather than filtering with
//! `prop_assume!`.

use proptest::prelude::ProptestConfig;

/// Project default number of cases when `PROPTEST_CASES` is unset or invalid.
pub const DEFAULT_CASES: u32 = 32;

pub fn proptest_prelude_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_CASES)
        .max(1);

    let max_shrink_time: u32 = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // Persistence files are noise for workspace integration tests
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
