//! Read-only view of a session for a presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, GameState, Seat, Status, Suit};
use crate::rules::{current_suit, is_card_playable};
use crate::shop::PowerUp;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// A card in the player's hand with its legality against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub card: Card,
    pub playable: bool,
}

/// Everything the UI renders, derived from the session.
///
/// The AI hand is reduced to its size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u64,
    pub round: u32,
    pub status: Status,
    pub current_turn: Seat,
    pub wild_suit: Option<Suit>,
    pub current_suit: Option<Suit>,
    pub top_discard: Option<Card>,
    pub deck_size: usize,
    pub player_hand: Vec<HandCard>,
    pub ai_hand_size: usize,
    pub stars: u32,
    pub inventory: Vec<(PowerUp, u32)>,
    pub message: String,
}

impl Snapshot {
    pub(crate) fn capture(
        state: &GameState,
        version: u64,
        round: u32,
        stars: u32,
        inventory: Vec<(PowerUp, u32)>,
    ) -> Self {
        let player_hand = state
            .hand(Seat::Player)
            .map(|card| HandCard {
                card,
                playable: is_card_playable(&card, state),
            })
            .collect();

        Self {
            version,
            round,
            status: state.status(),
            current_turn: state.current_turn(),
            wild_suit: state.wild_suit(),
            current_suit: current_suit(state),
            top_discard: state.top_discard(),
            deck_size: state.deck_size(),
            player_hand,
            ai_hand_size: state.hand_size(Seat::Ai),
            stars,
            inventory,
            message: status_message(state),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Free-text status line for the current round.
#[must_use]
pub fn status_message(state: &GameState) -> String {
    match (state.status(), state.current_turn()) {
        (Status::PlayerWon, _) => "You won the round!".to_string(),
        (Status::AiWon, _) => "The AI won the round.".to_string(),
        (Status::WaitingForSuit, _) => "Choose a suit for your 8.".to_string(),
        (Status::Playing, Seat::Ai) => "AI is thinking...".to_string(),
        (Status::Playing, Seat::Player) => match state.wild_suit() {
            Some(suit) => format!("Your turn. The suit is {}.", suit),
            None => "Your turn.".to_string(),
        },
    }
}
