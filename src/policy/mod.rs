//! Move-selection policies.
//!
//! Policies are trait-based so the AI seat can be swapped:
//! - `GreedyPolicy`: the deterministic house heuristic
//! - `RandomPolicy`: uniform over legal actions, for stress tests and benches

mod greedy;
mod random;

pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;

use crate::core::{Action, Card, GameState, Seat, Suit};

/// Chooses moves for a seat.
pub trait AiPolicy {
    /// Pick the next action for `seat`.
    ///
    /// Only called when `seat` may act: its turn while playing, or the
    /// player's suit choice while waiting for one.
    fn choose_action(&mut self, state: &GameState, seat: Seat) -> Action;

    /// Name the wild suit after playing an 8.
    ///
    /// `remaining` is the hand with the played 8 already removed.
    fn choose_suit(&mut self, remaining: &[Card]) -> Suit;
}
