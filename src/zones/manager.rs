//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks where every card is and handles movement
//! between zones. Each card id maps to exactly one zone, so the deck, the
//! discard pile and the two hands always partition the dealt cards.
//!
//! All zones are ordered. For the deck and discard pile index 0 is the
//! bottom and the last index is the top; hands keep insertion order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::seat::{Seat, SeatMap};

/// A place a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Discard,
    Hand(Seat),
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to top of zone (end of a hand).
    Top,
    /// Add to bottom of zone (front of a hand).
    Bottom,
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use crazy_eights::core::{CardId, Seat};
/// use crazy_eights::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut zones = ZoneManager::new();
/// zones.add_to_zone(CardId(10), Zone::Deck, ZonePosition::Top);
/// zones.add_to_zone(CardId(11), Zone::Deck, ZonePosition::Top);
///
/// let drawn = zones.move_top(Zone::Deck, Zone::Hand(Seat::Ai));
/// assert_eq!(drawn, Some(CardId(11)));
/// assert_eq!(zones.zone_of(CardId(11)), Some(Zone::Hand(Seat::Ai)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: card -> zone
    locations: FxHashMap<CardId, Zone>,

    deck: Vec<CardId>,
    discard: Vec<CardId>,
    hands: SeatMap<Vec<CardId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn order(&self, zone: Zone) -> &Vec<CardId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Discard => &self.discard,
            Zone::Hand(seat) => &self.hands[seat],
        }
    }

    fn order_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Discard => &mut self.discard,
            Zone::Hand(seat) => &mut self.hands[seat],
        }
    }

    fn insert(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        self.locations.insert(card, zone);
        let order = self.order_mut(zone);
        match position {
            ZonePosition::Top => order.push(card),
            ZonePosition::Bottom => order.insert(0, card),
        }
    }

    /// Add a new card to a zone.
    ///
    /// Returns false, leaving the manager unchanged, if the card is
    /// already tracked.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone, position: ZonePosition) -> bool {
        if self.locations.contains_key(&card) {
            return false;
        }
        self.insert(card, zone, position);
        true
    }

    /// Move a card from wherever it is to another zone.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(
        &mut self,
        card: CardId,
        new_zone: Zone,
        position: ZonePosition,
    ) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;
        self.order_mut(old_zone).retain(|&c| c != card);
        self.insert(card, new_zone, position);
        Some(old_zone)
    }

    /// Move the top card of one zone onto the top of another.
    ///
    /// Returns the moved card, or `None` if `from` is empty.
    pub fn move_top(&mut self, from: Zone, to: Zone) -> Option<CardId> {
        let card = self.order_mut(from).pop()?;
        self.insert(card, to, ZonePosition::Top);
        Some(card)
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Cards in a zone, bottom first.
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        self.order(zone)
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.order(zone).len()
    }

    /// Get the top card of a zone (last in order).
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<CardId> {
        self.order(zone).last().copied()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
