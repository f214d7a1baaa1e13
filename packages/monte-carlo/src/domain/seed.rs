//! RNG seed utilities for deterministic game behavior.
//!
//! A game is fully determined by its 64-bit seed. The seed is reinterpreted as
//! `u64` bits and fed to a ChaCha stream so the same seed yields the same deal
//! on every platform and across `rand` releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Exclusive upper bound for game numbers handed out to players.
pub const MAX_GAME_NUMBER: i64 = 1_000_000_000;

/// Build the deterministic generator that drives deck shuffling.
pub fn shuffle_rng(seed: i64) -> ChaCha20Rng {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    ChaCha20Rng::seed_from_u64(seed as u64)
}

/// Draw a fresh game seed from any 64-bit value.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random::<i64>()
}

/// Draw a player-friendly game number in `[0, MAX_GAME_NUMBER)`.
///
/// Game numbers are short enough to type back in when asking for a specific
/// game, while still covering a billion distinct deals.
pub fn random_game_number<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(0..MAX_GAME_NUMBER)
}

/// Derive a seed for a move-choosing strategy playing a given game.
///
/// Keeps strategy randomness separate from the dealing stream so a replayed
/// deal played by a seeded strategy repeats exactly.
pub fn derive_strategy_seed(game_seed: i64) -> u64 {
    let base = game_seed as u64;
    base.rotate_left(17)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(1) // Offset to distinguish from the dealing seed
}
