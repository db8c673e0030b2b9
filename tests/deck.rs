//! Deck integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;
use std::thread;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shoedeck::{
    Card, DECK_SIZE, DEFAULT_SHOE_DECKS, Deck, DeckError, DeckOptions, Rank, Remaining,
    SharedDeck, Suit, new_card_shoe, new_std_deck,
};

fn assert_full_multiset(deck: &Deck, copies: usize) {
    let tally = deck.tally();
    assert_eq!(tally.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(tally.get(&Card::new(rank, suit)), Some(&copies));
        }
    }
}

#[test]
fn standard_deck_has_each_card_once() {
    let deck = Deck::standard(1);
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.size(), 52);
    assert_eq!(deck.decks(), 1);
    assert_full_multiset(&deck, 1);

    for rank in Rank::ALL {
        let suits: HashSet<Suit> = deck
            .iter()
            .filter(|card| card.rank() == rank)
            .map(Card::suit)
            .collect();
        assert_eq!(suits.len(), 4);
    }
}

#[test]
fn standard_deck_ignores_deck_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let deck = Deck::standard_from_rng(DeckOptions::default().with_decks(4), &mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.size(), DECK_SIZE);
    assert_eq!(new_std_deck(5).size(), DECK_SIZE);
}

#[test]
fn shoe_has_six_copies_by_default() {
    let shoe = Deck::shoe(2);
    assert_eq!(shoe.decks(), DEFAULT_SHOE_DECKS);
    assert_eq!(shoe.len(), 312);
    assert_eq!(shoe.size(), 312);
    assert_full_multiset(&shoe, 6);

    let shoe = new_card_shoe(None, 2).unwrap();
    assert_eq!(shoe.size(), 312);

    let shoe = new_card_shoe(Some(6), 3).unwrap();
    assert_eq!(shoe.len(), 312);
    assert_full_multiset(&shoe, 6);
}

#[test]
fn shoe_accepts_any_positive_count() {
    for decks in [1, 2, 8, 10] {
        let shoe = new_card_shoe(Some(decks), 9).unwrap();
        assert_eq!(shoe.size(), decks * DECK_SIZE);
        assert_full_multiset(&shoe, decks);
    }
}

#[test]
fn deck_count_errors() {
    assert_eq!(new_card_shoe(Some(0), 1).unwrap_err(), DeckError::NoDecks);
    assert_eq!(
        Deck::new(DeckOptions::default().with_decks(0), 1).unwrap_err(),
        DeckError::NoDecks
    );
    assert_eq!(
        Deck::new(DeckOptions::default().with_decks(usize::MAX), 1).unwrap_err(),
        DeckError::TooManyDecks
    );
    assert_eq!(
        Deck::new(DeckOptions::default().with_decks(usize::MAX / DECK_SIZE), 1).unwrap_err(),
        DeckError::TooManyDecks
    );
    assert_eq!(
        new_card_shoe(Some(usize::MAX / DECK_SIZE), 1).unwrap_err(),
        DeckError::TooManyDecks
    );
}

#[test]
fn drawing_exhausts_the_deck() {
    let mut deck = Deck::standard(3);
    let mut seen = HashSet::new();

    for drawn in 1..=52 {
        let top = *deck.peek_top().unwrap();
        let card = deck.remove_top().unwrap();
        assert_eq!(card, top);
        assert!(seen.insert(card));
        assert_eq!(deck.len(), 52 - drawn);
        assert_eq!(deck.dealt(), drawn);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.peek_top(), None);
    assert_eq!(deck.remove_top().unwrap_err(), DeckError::EmptyDeck);
    assert_eq!(deck.remaining_cards().to_string(), "0 of 52 cards remain");
}

#[test]
fn drawing_from_a_shoe_yields_the_full_multiset() {
    let mut shoe = new_card_shoe(Some(2), 4).unwrap();
    let mut drawn = Vec::new();
    while let Ok(card) = shoe.remove_top() {
        drawn.push(card);
    }

    assert_eq!(drawn.len(), 104);
    drawn.sort();
    for pair in drawn.chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
    assert_eq!(shoe.remove_top(), Err(DeckError::EmptyDeck));
}

#[test]
fn draws_come_from_the_top() {
    let mut deck = Deck::standard(8);
    let second = deck[1];
    let first = *deck.get(0).unwrap();
    assert_eq!(deck.iter().next(), Some(&first));

    assert_eq!(deck.remove_top().unwrap(), first);
    assert_eq!(deck.remove_top().unwrap(), second);
    assert_eq!(deck.get(50), None);
}

#[test]
fn remaining_cards_tracks_len() {
    let mut deck = Deck::standard(10);
    assert_eq!(deck.remaining_cards().to_string(), "52 of 52 cards remain");

    deck.remove_top().unwrap();
    assert_eq!(deck.remaining_cards().to_string(), "51 of 52 cards remain");
    assert_eq!(
        deck.remaining_cards(),
        Remaining {
            count: deck.len(),
            size: 52,
        }
    );

    let mut shoe = Deck::shoe(10);
    for _ in 0..12 {
        shoe.remove_top().unwrap();
    }
    assert_eq!(shoe.remaining_cards().to_string(), "300 of 312 cards remain");
}

#[test]
fn penetration_reports_dealt_fraction() {
    let mut deck = Deck::standard(12);
    assert_eq!(deck.penetration(), 0.0);
    for _ in 0..13 {
        deck.remove_top().unwrap();
    }
    assert_eq!(deck.penetration(), 0.25);
}

#[test]
fn seeded_decks_are_reproducible() {
    let a = Deck::shoe(77);
    let b = Deck::shoe(77);
    assert!(a.iter().eq(b.iter()));
    assert_eq!(a.shuffle_passes(), b.shuffle_passes());
}

#[test]
fn shuffle_permutes_the_enumeration() {
    let unshuffled: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect();

    let mut orders = HashSet::new();
    for seed in 0..20 {
        let deck = Deck::standard(seed);
        let order: Vec<Card> = deck.iter().copied().collect();

        let mut sorted = order.clone();
        sorted.sort();
        let mut expected = unshuffled.clone();
        expected.sort();
        assert_eq!(sorted, expected);

        assert_ne!(order, unshuffled);
        orders.insert(order);
    }
    assert_eq!(orders.len(), 20);
}

#[test]
fn shuffle_pass_count_is_bounded() {
    for seed in 0..20 {
        let deck = Deck::standard(seed);
        assert!((1..=DECK_SIZE + 1).contains(&deck.shuffle_passes()));
    }

    let deck = Deck::new(DeckOptions::shoe().with_extra_entropy(false), 1).unwrap();
    assert_eq!(deck.shuffle_passes(), 1);
    assert_full_multiset(&deck, DEFAULT_SHOE_DECKS);
}

#[test]
fn extra_entropy_adds_a_random_number_of_passes() {
    let passes: Vec<usize> = (0..100).map(|seed| Deck::standard(seed).shuffle_passes()).collect();
    assert!(passes.iter().all(|&count| (1..=DECK_SIZE + 1).contains(&count)));
    assert!(passes.iter().any(|&count| count > 1));
    assert!(passes.iter().collect::<HashSet<_>>().len() > 10);

    let shoe_passes: Vec<usize> = (0..30).map(|seed| Deck::shoe(seed).shuffle_passes()).collect();
    assert!(shoe_passes.iter().all(|&count| (1..=312 + 1).contains(&count)));
    assert!(shoe_passes.iter().any(|&count| count > DECK_SIZE + 1));
    assert!(shoe_passes.iter().collect::<HashSet<_>>().len() > 5);
}

#[test]
fn extra_passes_follow_the_first_shuffle() {
    for seed in [0, 1, 99] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut replay = rng.clone();
        let deck = Deck::from_rng(DeckOptions::standard(), &mut rng).unwrap();

        let mut first_pass = [0_u8; DECK_SIZE];
        first_pass.shuffle(&mut replay);
        let extra = replay.random_range(0..=DECK_SIZE);
        assert_eq!(deck.shuffle_passes(), extra + 1);
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default();
    assert_eq!(options, DeckOptions::standard());
    assert_eq!(options.decks, 1);
    assert!(options.extra_entropy);

    let options = DeckOptions::shoe().with_decks(8).with_extra_entropy(false);
    assert_eq!(options.decks, 8);
    assert!(!options.extra_entropy);
}

#[test]
fn shared_deck_serializes_draws() {
    let shoe = SharedDeck::new(Deck::shoe(21));

    let drawn: Vec<Card> = thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut mine = Vec::new();
                    while let Ok(card) = shoe.remove_top() {
                        mine.push(card);
                    }
                    mine
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().unwrap())
            .collect()
    });

    assert_eq!(drawn.len(), 312);
    assert!(shoe.is_empty());
    assert_eq!(shoe.remaining_cards().to_string(), "0 of 312 cards remain");
    assert_eq!(shoe.remove_top(), Err(DeckError::EmptyDeck));

    let mut rebuilt = SharedDeck::from(Deck::shoe(21));
    assert_eq!(rebuilt.with_deck(Deck::len), 312);
    rebuilt = SharedDeck::new(rebuilt.into_inner());
    assert_eq!(rebuilt.len(), 312);

    let mut tally = std::collections::HashMap::new();
    for card in drawn {
        *tally.entry(card).or_insert(0) += 1;
    }
    assert_eq!(tally.len(), DECK_SIZE);
    assert!(tally.values().all(|&count| count == 6));
}
