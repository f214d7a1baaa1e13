//! Test support utilities shared by the workspace crates.
//!
//! Provides unified logging initialization for unit and integration tests and
//! the common proptest configuration used by property suites.

pub mod logging;
pub mod proptest_config;

pub use proptest_config::proptest_prelude_config;
