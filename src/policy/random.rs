//! Uniform random policy.

use crate::core::{Action, Card, GameRng, GameState, Seat, Status, Suit};
use crate::rules::playable_cards;

use super::AiPolicy;

/// Picks uniformly among legal actions. Drawing is always one of them.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    fn random_suit(&mut self) -> Suit {
        Suit::ALL[self.rng.gen_range_usize(0..Suit::ALL.len())]
    }
}

impl AiPolicy for RandomPolicy {
    fn choose_action(&mut self, state: &GameState, seat: Seat) -> Action {
        if state.status() == Status::WaitingForSuit {
            return Action::ChooseSuit(self.random_suit());
        }

        let mut options: Vec<Action> = playable_cards(state, seat)
            .iter()
            .map(|card| Action::Play(card.id))
            .collect();
        options.push(Action::Draw);
        self.rng.choose(&options).copied().unwrap_or(Action::Draw)
    }

    fn choose_suit(&mut self, _remaining: &[Card]) -> Suit {
        self.random_suit()
    }
}
