//! Card parsing from symbol representations (e.g., "ac", "TH")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

fn rank_from_symbol(ch: char) -> Option<Rank> {
    let ch = ch.to_ascii_lowercase();
    Rank::ALL.into_iter().find(|r| r.symbol() == ch)
}

fn suit_from_symbol(ch: char) -> Option<Suit> {
    let ch = ch.to_ascii_lowercase();
    Suit::ALL.into_iter().find(|s| s.symbol() == ch)
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s.trim())
            .and_then(rank_from_symbol)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseRank, format!("Parse rank: {s}"))
            })
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s.trim())
            .and_then(suit_from_symbol)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseSuit, format!("Parse suit: {s}"))
            })
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));
        let mut chars = s.trim().chars();
        let rank_ch = chars.next().ok_or_else(err)?;
        let suit_ch = chars.next().ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }
        let rank = rank_from_symbol(rank_ch).ok_or_else(err)?;
        let suit = suit_from_symbol(suit_ch).ok_or_else(err)?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "ac", "2d") into Card instances.
/// Returns the first parse failure if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
