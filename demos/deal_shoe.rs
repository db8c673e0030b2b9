//! Deals a few rounds from a six-deck shoe.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use shoedeck::{Card, Deck, DeckError};

const PLAYERS: usize = 3;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut shoe = Deck::shoe(seed);

    println!(
        "Shoe of {} decks, shuffled {} times",
        shoe.decks(),
        shoe.shuffle_passes()
    );

    for round in 1..=3 {
        println!("Round {round}");
        for seat in 0..=PLAYERS {
            let hand = match deal_hand(&mut shoe) {
                Ok(hand) => hand,
                Err(err) => {
                    println!("Deal error: {err}");
                    return;
                }
            };
            let name = if seat == PLAYERS {
                "Dealer".to_owned()
            } else {
                format!("Seat {}", seat + 1)
            };
            println!("  {name}: {} {}", hand[0], hand[1]);
        }
        println!("  {}", shoe.remaining_cards());
    }
}

fn deal_hand(shoe: &mut Deck) -> Result<[Card; 2], DeckError> {
    Ok([shoe.remove_top()?, shoe.remove_top()?])
}
