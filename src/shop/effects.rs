//! Power-up effects and the round reward rule.
//!
//! Effects mutate the round outside the turn protocol: they ignore whose
//! turn it is and never pass it. Cards taken out of the player's hand go
//! under the discard pile so every card stays in exactly one zone.

use log::debug;

use super::inventory::Inventory;
use super::power_up::PowerUp;
use crate::core::{Events, GameEvent, GameState, Rejected, RewardConfig, Seat, Status};
use crate::zones::{Zone, ZonePosition};

/// Stars for a finished round: the win amount if the player won or holds
/// a star guarantee, else the loss amount.
#[must_use]
pub fn round_reward(winner: Seat, inventory: &Inventory, rewards: &RewardConfig) -> u32 {
    if winner == Seat::Player || inventory.holds(PowerUp::StarGuarantee) {
        rewards.win_stars
    } else {
        rewards.loss_stars
    }
}

/// Apply an activatable power-up to the round.
///
/// Only valid while the round is `Playing`. Does not touch inventory or
/// stars. When p3 or p4 ends the round, the caller pays the power-up's
/// own award in place of the standard `round_reward`.
pub fn apply_power_up(
    state: &mut GameState,
    item: PowerUp,
    rewards: &RewardConfig,
) -> Result<Events, Rejected> {
    if state.status() != Status::Playing {
        return Err(Rejected::WrongStatus);
    }

    let mut events = Events::new();
    match item {
        PowerUp::ExtraCards => {
            for _ in 0..rewards.extra_cards {
                let Some(card) = state.zones_mut().move_top(Zone::Deck, Zone::Hand(Seat::Ai))
                else {
                    break;
                };
                events.push(GameEvent::CardDrawn {
                    seat: Seat::Ai,
                    card: Some(card),
                });
            }
            debug!("{} pushed {} cards to the ai", item, events.len());
        }
        PowerUp::Discard => {
            let removed = strip_player_hand(state, Some(rewards.discard_count));
            debug!("{} removed {} player cards", item, removed);
        }
        PowerUp::InstantWin => {
            let removed = strip_player_hand(state, None);
            debug!("{} cleared {} player cards", item, removed);
        }
        PowerUp::StarGuarantee => return Err(Rejected::NotActivatable),
    }

    if state.hand_size(Seat::Player) == 0 {
        state.set_status(Status::PlayerWon);
        events.push(GameEvent::RoundOver {
            winner: Seat::Player,
        });
    }
    Ok(events)
}

/// Move the first `limit` player cards (all if `None`) under the discard
/// pile. Returns how many moved.
fn strip_player_hand(state: &mut GameState, limit: Option<usize>) -> usize {
    let hand = Zone::Hand(Seat::Player);
    let cards = state.zones().cards_in_zone(hand);
    let take = limit.map_or(cards.len(), |n| n.min(cards.len()));
    let removed = cards[..take].to_vec();

    // Reverse so the removed cards keep their relative order at the bottom
    for &card in removed.iter().rev() {
        state
            .zones_mut()
            .move_to_zone(card, Zone::Discard, ZonePosition::Bottom);
    }
    removed.len()
}
