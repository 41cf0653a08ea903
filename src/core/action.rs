//! Actions, rejection reasons, and transition events.
//!
//! An `Action` is one of the three turn transitions. Every accepted
//! transition yields a batch of `GameEvent`s describing what happened;
//! every refused one yields a `Rejected` reason and leaves state untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::card::{CardId, Suit};
use super::seat::Seat;
use crate::shop::PowerUp;

/// A turn transition requested by a seat.
///
/// ```
/// use crazy_eights::core::{Action, CardId, Suit};
///
/// let play = Action::Play(CardId(4));
/// let pick = Action::ChooseSuit(Suit::Clubs);
/// assert_ne!(play, Action::Draw);
/// assert_ne!(pick, Action::Draw);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from hand onto the discard pile.
    Play(CardId),
    /// Draw the top card of the deck (or pass if it is empty).
    Draw,
    /// Name the wild suit after the human played an 8.
    ChooseSuit(Suit),
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub action: Action,
    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
    /// Position in the round's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}

/// Why an operation was refused. The state is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejected {
    #[error("it is not this seat's turn")]
    WrongTurn,
    #[error("operation not allowed in the current status")]
    WrongStatus,
    #[error("card does not match the current suit or rank")]
    IllegalCard,
    #[error("card is not in the acting seat's hand")]
    CardNotInHand,
    #[error("not enough stars")]
    InsufficientFunds,
    #[error("no units of that power-up in inventory")]
    EmptyInventory,
    #[error("power-up is passive and cannot be used")]
    NotActivatable,
}

/// Something that happened during an accepted transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CardPlayed { seat: Seat, card: CardId },
    /// `card` is `None` when the deck was empty.
    CardDrawn { seat: Seat, card: Option<CardId> },
    SuitChosen { seat: Seat, suit: Suit },
    TurnPassed { to: Seat },
    RoundOver { winner: Seat },
    StarsGranted { amount: u32, balance: u32 },
    PowerUpUsed { item: PowerUp },
    Redeemed { item: PowerUp, cost: u32 },
}

/// Event batch for one transition. Most transitions emit at most four.
pub type Events = SmallVec<[GameEvent; 4]>;
