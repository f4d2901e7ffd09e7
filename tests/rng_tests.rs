use std::collections::HashSet;

use holdem_engine::domain::Deck;
use holdem_engine::engine::RandomSource;
use holdem_engine::infra::{DeterministicRng, SystemRng};

#[test]
fn deterministic_rng_reproduces_the_same_shuffle() {
    let mut rng_a = DeterministicRng::from_seed(42);
    let mut rng_b = DeterministicRng::from_seed(42);

    let mut deck_a = Deck::standard_52();
    let mut deck_b = Deck::standard_52();
    rng_a.shuffle(&mut deck_a.cards);
    rng_b.shuffle(&mut deck_b.cards);

    assert_eq!(deck_a, deck_b);
}

#[test]
fn different_seeds_give_different_orders() {
    let mut rng_a = DeterministicRng::from_seed(1);
    let mut rng_b = DeterministicRng::from_seed(2);

    let mut deck_a = Deck::standard_52();
    let mut deck_b = Deck::standard_52();
    rng_a.shuffle(&mut deck_a.cards);
    rng_b.shuffle(&mut deck_b.cards);

    assert_ne!(deck_a, deck_b);
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let mut rng = DeterministicRng::from_seed(7);
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 52);
    let unique: HashSet<String> = deck.cards.iter().map(|c| c.to_string()).collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn system_rng_also_preserves_the_multiset() {
    let mut rng = SystemRng::default();
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 52);
    let unique: HashSet<String> = deck.cards.iter().map(|c| c.to_string()).collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn consecutive_shuffles_from_one_rng_differ() {
    // один RNG, два перемешивания подряд - порядок не повторяется
    let mut rng = DeterministicRng::from_seed(42);

    let mut deck_a = Deck::standard_52();
    let mut deck_b = Deck::standard_52();
    rng.shuffle(&mut deck_a.cards);
    rng.shuffle(&mut deck_b.cards);

    assert_ne!(deck_a, deck_b);
}
