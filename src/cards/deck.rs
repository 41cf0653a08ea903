//! Deck building and the opening deal.

use log::debug;

use crate::core::card::{Card, CardId};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::rng::GameRng;
use crate::core::seat::Seat;
use crate::core::state::GameState;
use crate::zones::Zone;

/// Build one card per configured rank x suit and shuffle them.
///
/// Ids are assigned in build order (suit-major), before the shuffle, so
/// they are unique within the returned deck. The last element is the top.
///
/// ```
/// use crazy_eights::cards::create_deck;
/// use crazy_eights::core::{GameConfig, GameRng};
///
/// let deck = create_deck(&GameConfig::default(), &mut GameRng::new(1));
/// assert_eq!(deck.len(), 52);
/// ```
#[must_use]
pub fn create_deck(config: &GameConfig, rng: &mut GameRng) -> Vec<Card> {
    let mut deck: Vec<Card> = config
        .suits
        .iter()
        .flat_map(|&suit| config.ranks.iter().map(move |&rank| (rank, suit)))
        .enumerate()
        .map(|(i, (rank, suit))| Card::new(CardId(i as u32), rank, suit))
        .collect();
    rng.shuffle(&mut deck);
    deck
}

/// Start a round: deal `hand_size` cards to the player, then to the AI,
/// then one card to seed the discard pile. The rest becomes the deck.
///
/// Fails only if the configured universe cannot cover the deal.
pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Result<GameState, ConfigError> {
    config.validate()?;

    let mut deck = create_deck(config, rng);
    let available = deck.len();
    let required = config.cards_required();
    if available < required {
        return Err(ConfigError::DeckTooSmall {
            available,
            required,
        });
    }

    let mut take = |n: usize| deck.split_off(deck.len() - n);
    let player_hand = take(config.hand_size);
    let ai_hand = take(config.hand_size);
    let discard = take(1);

    let state = GameState::from_piles(deck, discard, player_hand, ai_hand);
    debug!(
        "dealt round: deck={} discard={:?} hand_size={}",
        state.deck_size(),
        state.top_discard(),
        state.hand_size(Seat::Player)
    );
    debug_assert_eq!(state.zones().total_cards(), available);
    debug_assert_eq!(state.zones().zone_size(Zone::Discard), 1);
    Ok(state)
}
