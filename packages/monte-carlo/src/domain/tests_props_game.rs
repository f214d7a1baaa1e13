//! Property-based tests for engine invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::test_state_helpers::seeded_game;
use crate::domain::{test_gens, Card, Game, GameEngine, DECK_SIZE};

/// Drive a game with hints and consolidation until it is stuck or won,
/// checking card conservation after every step.
fn play_out(game: &mut Game) -> Result<(), TestCaseError> {
    for _ in 0..500 {
        prop_assert_eq!(
            game.number_of_cards_left() + game.occupied_slots() + game.score(),
            DECK_SIZE,
            "every card is in the deck, on the tableau or removed"
        );
        if game.is_win() {
            return Ok(());
        }
        match game.hint() {
            Some((a, b)) => {
                let left = game.number_of_cards_left();
                prop_assert!(game.remove_cards(a, b));
                prop_assert_eq!(game.number_of_cards_left(), left);
            }
            None => {
                let before = game.tableau().clone();
                let left = game.number_of_cards_left();
                let empty = game.tableau().empty_slots();
                game.consolidate();
                let dealt = left - game.number_of_cards_left();
                prop_assert_eq!(dealt, empty.min(left));
                if *game.tableau() == before {
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(test_support::proptest_prelude_config())]

    /// Property: a fresh deal places distinct cards in every slot
    #[test]
    fn prop_deal_is_full_and_unique(
        (rows, cols) in test_gens::dimensions(),
        seed in test_gens::seed(),
    ) {
        let game = seeded_game(rows, cols, seed);
        let cards: HashSet<Card> = game.tableau().slots().iter().flatten().copied().collect();
        prop_assert_eq!(cards.len(), rows * cols);
        prop_assert_eq!(game.number_of_cards_left(), DECK_SIZE - rows * cols);
    }

    /// Property: hints are always legal pairs, and absent only when no pair exists
    #[test]
    fn prop_hint_is_a_legal_pair(
        (rows, cols) in test_gens::dimensions(),
        seed in test_gens::seed(),
    ) {
        let game = seeded_game(rows, cols, seed);
        match game.hint() {
            Some((a, b)) => {
                prop_assert_ne!(a, b);
                prop_assert!(a.is_adjacent_to(b));
                let (x, y) = (game.card_at(a), game.card_at(b));
                prop_assert!(x.is_some() && y.is_some());
                prop_assert_eq!(x.map(|c| c.rank), y.map(|c| c.rank));
                prop_assert_eq!(game.matching_pairs().first().copied(), Some((a, b)));
                // Later slot first
                prop_assert!(a.to_index(cols) > b.to_index(cols));
            }
            None => prop_assert!(game.matching_pairs().is_empty()),
        }
    }

    /// Property: removal succeeds exactly for the documented rule
    #[test]
    fn prop_remove_matches_rule(
        seed in test_gens::seed(),
        a in test_gens::coordinate_near(5, 5),
        b in test_gens::coordinate_near(5, 5),
    ) {
        let mut game = seeded_game(5, 5, seed);
        let before = game.snapshot();
        let expected = match (game.card_at(a), game.card_at(b)) {
            (Some(x), Some(y)) => a != b && x.rank == y.rank && a.is_adjacent_to(b),
            _ => false,
        };
        let removed = game.remove_cards(a, b);
        prop_assert_eq!(removed, expected);
        if removed {
            prop_assert_eq!(game.score(), 2);
            prop_assert_eq!(game.card_at(a), None);
            prop_assert_eq!(game.card_at(b), None);
        } else {
            prop_assert_eq!(game.snapshot(), before);
        }
        prop_assert_eq!(game.number_of_cards_left(), 27);
    }

    /// Property: cards are conserved and refills are exact across a full game
    #[test]
    fn prop_play_out_conserves_cards(
        (rows, cols) in test_gens::dimensions(),
        seed in test_gens::seed(),
    ) {
        let mut game = seeded_game(rows, cols, seed);
        play_out(&mut game)?;
    }

    /// Property: replay reproduces the deal after arbitrary play
    #[test]
    fn prop_replay_reproduces_deal(
        (rows, cols) in test_gens::dimensions(),
        seed in test_gens::seed(),
    ) {
        let mut game = seeded_game(rows, cols, seed);
        let initial = game.snapshot();
        play_out(&mut game)?;
        game.replay();
        prop_assert_eq!(game.snapshot(), initial);
    }

    /// Property: card text forms agree with the rank and suit tables
    #[test]
    fn prop_card_text_forms(card in test_gens::card()) {
        prop_assert_eq!(
            card.to_string(),
            format!("{} of {}", card.rank.name(), card.suit.name())
        );
        prop_assert_eq!(card.short().parse::<Card>().ok(), Some(card));
    }
}
