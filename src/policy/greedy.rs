//! Deterministic heuristic opponent.
//!
//! Evaluated once per turn:
//! 1. Play the first legal non-8 in hand order.
//! 2. Otherwise play an 8 if one is legal.
//! 3. Otherwise draw.
//!
//! After an 8, name the suit held most often in the remaining hand. Ties go
//! to the earliest suit in `Suit::ALL`; an empty hand names hearts.

use crate::core::{Action, Card, GameState, Seat, Status, Suit};
use crate::rules::playable_cards;

use super::AiPolicy;

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Most frequent suit in `hand`, first in `Suit::ALL` on ties.
    #[must_use]
    pub fn preferred_suit(hand: &[Card]) -> Suit {
        let mut counts = [0usize; 4];
        for card in hand {
            counts[card.suit.index()] += 1;
        }

        let mut best = Suit::Hearts;
        let mut best_count = 0;
        for suit in Suit::ALL {
            if counts[suit.index()] > best_count {
                best = suit;
                best_count = counts[suit.index()];
            }
        }
        best
    }
}

impl AiPolicy for GreedyPolicy {
    fn choose_action(&mut self, state: &GameState, seat: Seat) -> Action {
        if state.status() == Status::WaitingForSuit {
            let hand: Vec<Card> = state.hand(seat).collect();
            return Action::ChooseSuit(Self::preferred_suit(&hand));
        }

        let legal = playable_cards(state, seat);
        legal
            .iter()
            .find(|card| !card.is_wild())
            .or_else(|| legal.first())
            .map_or(Action::Draw, |card| Action::Play(card.id))
    }

    fn choose_suit(&mut self, remaining: &[Card]) -> Suit {
        Self::preferred_suit(remaining)
    }
}
