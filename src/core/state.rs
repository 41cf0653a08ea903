//! Game state for one round.
//!
//! ## Status
//!
//! The round's lifecycle: `Playing`, `WaitingForSuit` (the human owes a
//! suit after playing an 8), and the two terminal results.
//!
//! ## GameState
//!
//! The aggregate for one round:
//! - Zone manager (deck, discard pile, both hands)
//! - Card values by id
//! - Turn owner, status, active wild suit
//! - Action history
//!
//! The state is replaced wholesale when a new round starts. Mutation goes
//! through the rules engine; the setters here are crate-internal.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::card::{Card, CardId, Suit};
use super::seat::Seat;
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// Round status. Exactly one holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Playing,
    WaitingForSuit,
    PlayerWon,
    AiWon,
}

impl Status {
    /// Terminal status for a seat's win.
    #[must_use]
    pub const fn won_by(seat: Seat) -> Self {
        match seat {
            Seat::Player => Status::PlayerWon,
            Seat::Ai => Status::AiWon,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::PlayerWon | Status::AiWon)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Status::PlayerWon => Some(Seat::Player),
            Status::AiWon => Some(Seat::Ai),
            Status::Playing | Status::WaitingForSuit => None,
        }
    }
}

/// Full state of one round.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Card locations.
    zones: ZoneManager,

    /// Card values by id, for every card dealt this round.
    cards: FxHashMap<CardId, Card>,

    current_turn: Seat,
    status: Status,
    wild_suit: Option<Suit>,

    /// Turn number (starts at 1, increments each time the turn passes).
    turn_number: u32,

    /// Accepted actions this round.
    history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state: no cards, player to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zones: ZoneManager::new(),
            cards: FxHashMap::default(),
            current_turn: Seat::Player,
            status: Status::Playing,
            wild_suit: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Build a state from explicit piles, bottom card first.
    ///
    /// Duplicate card ids after the first occurrence are ignored. Useful for
    /// arranging a specific position, e.g. in tests or replays.
    ///
    /// ```
    /// use crazy_eights::core::{Card, CardId, GameState, Rank, Seat, Suit};
    ///
    /// let state = GameState::from_piles(
    ///     vec![Card::new(CardId(0), Rank::Two, Suit::Clubs)],
    ///     vec![Card::new(CardId(1), Rank::Five, Suit::Hearts)],
    ///     vec![Card::new(CardId(2), Rank::Five, Suit::Spades)],
    ///     vec![Card::new(CardId(3), Rank::King, Suit::Hearts)],
    /// );
    /// assert_eq!(state.deck_size(), 1);
    /// assert_eq!(state.hand_size(Seat::Player), 1);
    /// assert_eq!(state.top_discard().map(|c| c.id), Some(CardId(1)));
    /// ```
    #[must_use]
    pub fn from_piles(
        deck: Vec<Card>,
        discard: Vec<Card>,
        player_hand: Vec<Card>,
        ai_hand: Vec<Card>,
    ) -> Self {
        let mut state = Self::new();
        let piles = [
            (Zone::Deck, deck),
            (Zone::Discard, discard),
            (Zone::Hand(Seat::Player), player_hand),
            (Zone::Hand(Seat::Ai), ai_hand),
        ];
        for (zone, cards) in piles {
            for card in cards {
                state.add_card(card, zone);
            }
        }
        state
    }

    /// Set whose turn it is.
    #[must_use]
    pub fn with_turn(mut self, seat: Seat) -> Self {
        self.current_turn = seat;
        self
    }

    /// Set the active wild suit.
    #[must_use]
    pub fn with_wild_suit(mut self, suit: Option<Suit>) -> Self {
        self.wild_suit = suit;
        self
    }

    // === Observation ===

    #[must_use]
    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn wild_suit(&self) -> Option<Suit> {
        self.wild_suit
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// Look up a card dealt this round.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.cards.get(&id).copied()
    }

    /// Every card dealt this round, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.values().copied()
    }

    /// A seat's hand in hand order.
    pub fn hand(&self, seat: Seat) -> impl Iterator<Item = Card> + '_ {
        self.cards_in(Zone::Hand(seat))
    }

    /// Cards in a zone, bottom first.
    pub fn cards_in(&self, zone: Zone) -> impl Iterator<Item = Card> + '_ {
        self.zones
            .cards_in_zone(zone)
            .iter()
            .filter_map(move |id| self.card(*id))
    }

    #[must_use]
    pub fn hand_size(&self, seat: Seat) -> usize {
        self.zones.zone_size(Zone::Hand(seat))
    }

    /// Check if a card is in a seat's hand.
    #[must_use]
    pub fn holds(&self, seat: Seat, card: CardId) -> bool {
        self.zones.is_in_zone(card, Zone::Hand(seat))
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.zones.zone_size(Zone::Deck)
    }

    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.zones.zone_size(Zone::Discard)
    }

    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.zones
            .top_card(Zone::Discard)
            .and_then(|id| self.card(id))
    }

    // === Mutation (engine only) ===

    pub(crate) fn add_card(&mut self, card: Card, zone: Zone) {
        if self.zones.add_to_zone(card.id, zone, ZonePosition::Top) {
            self.cards.insert(card.id, card);
        }
    }

    pub(crate) fn zones_mut(&mut self) -> &mut ZoneManager {
        &mut self.zones
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn set_wild_suit(&mut self, suit: Option<Suit>) {
        self.wild_suit = suit;
    }

    pub(crate) fn set_turn(&mut self, seat: Seat) {
        self.current_turn = seat;
    }

    /// Hand the turn to the other seat.
    pub(crate) fn pass_turn(&mut self) -> Seat {
        self.current_turn = self.current_turn.other();
        self.turn_number += 1;
        self.current_turn
    }

    pub(crate) fn record(&mut self, seat: Seat, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(seat, action, self.turn_number, sequence));
    }
}
