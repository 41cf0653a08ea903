//! Move legality.
//!
//! A card is legal when it is an 8, matches the current suit, or matches
//! the top discard's rank. The current suit is the wild suit if one is
//! active, else the top discard's suit.

use smallvec::SmallVec;

use crate::core::card::{Card, Suit};
use crate::core::seat::Seat;
use crate::core::state::GameState;

/// Suit that legal plays must follow.
///
/// `None` only when the discard pile is empty and no wild suit is set.
#[must_use]
pub fn current_suit(state: &GameState) -> Option<Suit> {
    state
        .wild_suit()
        .or_else(|| state.top_discard().map(|top| top.suit))
}

/// Pure legality query. Does not check who holds the card.
///
/// With an empty discard pile every card is playable.
#[must_use]
pub fn is_card_playable(card: &Card, state: &GameState) -> bool {
    if card.is_wild() {
        return true;
    }
    let Some(top) = state.top_discard() else {
        return true;
    };
    current_suit(state) == Some(card.suit) || card.rank == top.rank
}

/// Legal cards in a seat's hand, in hand order.
#[must_use]
pub fn playable_cards(state: &GameState, seat: Seat) -> SmallVec<[Card; 8]> {
    state
        .hand(seat)
        .filter(|card| is_card_playable(card, state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{CardId, Rank};

    fn card(raw: u32, rank: Rank, suit: Suit) -> Card {
        Card::new(CardId(raw), rank, suit)
    }

    fn table(top: Card, wild: Option<Suit>) -> GameState {
        GameState::from_piles(Vec::new(), vec![top], Vec::new(), Vec::new()).with_wild_suit(wild)
    }

    #[test]
    fn test_suit_and_rank_match() {
        let state = table(card(0, Rank::Five, Suit::Hearts), None);

        assert!(is_card_playable(&card(1, Rank::King, Suit::Hearts), &state));
        assert!(is_card_playable(&card(2, Rank::Five, Suit::Clubs), &state));
        assert!(!is_card_playable(&card(3, Rank::King, Suit::Clubs), &state));
    }

    #[test]
    fn test_eight_always_playable() {
        let state = table(card(0, Rank::Five, Suit::Hearts), Some(Suit::Spades));

        for suit in Suit::ALL {
            assert!(is_card_playable(&card(1, Rank::Eight, suit), &state));
        }
    }

    #[test]
    fn test_wild_suit_overrides_top_suit() {
        let state = table(card(0, Rank::Eight, Suit::Hearts), Some(Suit::Clubs));

        assert_eq!(current_suit(&state), Some(Suit::Clubs));
        assert!(is_card_playable(&card(1, Rank::Two, Suit::Clubs), &state));
        assert!(!is_card_playable(&card(2, Rank::Two, Suit::Hearts), &state));
    }

    #[test]
    fn test_rank_match_still_applies_under_wild_suit() {
        // Rank match against the top discard holds regardless of the wild suit
        let state = table(card(0, Rank::Nine, Suit::Hearts), Some(Suit::Clubs));
        assert!(is_card_playable(&card(1, Rank::Nine, Suit::Spades), &state));
    }

    #[test]
    fn test_empty_discard() {
        let state = GameState::new();
        assert_eq!(current_suit(&state), None);
        assert!(is_card_playable(&card(1, Rank::Two, Suit::Clubs), &state));
    }

    #[test]
    fn test_playable_cards_in_hand_order() {
        let state = GameState::from_piles(
            Vec::new(),
            vec![card(0, Rank::Five, Suit::Hearts)],
            vec![
                card(1, Rank::King, Suit::Clubs),
                card(2, Rank::Eight, Suit::Spades),
                card(3, Rank::Two, Suit::Hearts),
            ],
            Vec::new(),
        );

        let ids: Vec<_> = playable_cards(&state, Seat::Player).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId(2), CardId(3)]);
    }
}
