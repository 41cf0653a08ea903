//! Rules engine: the round's transition functions.
//!
//! `RulesEngine` is the seam between a session and the rules:
//! - What actions are legal
//! - How actions modify state
//! - Win detection
//!
//! `CrazyEights` implements it. Every transition checks its preconditions
//! first and returns `Rejected` without touching the state if one fails.

use log::{debug, trace};

use crate::cards::deck;
use crate::core::{
    Action, Card, CardId, ConfigError, Events, GameConfig, GameEvent, GameRng, GameState,
    Rejected, Seat, Status, Suit,
};
use crate::policy::{AiPolicy, GreedyPolicy};
use crate::zones::{Zone, ZonePosition};

use super::legality::{is_card_playable, playable_cards};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty if the seat can't act
/// - `apply_action`: atomic; a rejection leaves the state unchanged
/// - `winner`: `None` while the round continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate all legal actions for a seat.
    fn legal_actions(&self, state: &GameState, seat: Seat) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(
        &mut self,
        state: &mut GameState,
        seat: Seat,
        action: Action,
    ) -> Result<Events, Rejected>;

    /// The round's winner, once it is over.
    fn winner(&self, state: &GameState) -> Option<Seat> {
        state.status().winner()
    }
}

/// Crazy Eights rules with an AI policy for the AI seat's suit choices.
#[derive(Clone, Debug)]
pub struct CrazyEights<P = GreedyPolicy> {
    config: GameConfig,
    policy: P,
}

impl CrazyEights<GreedyPolicy> {
    /// Engine with the default heuristic opponent.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config, GreedyPolicy)
    }
}

impl<P: AiPolicy> CrazyEights<P> {
    pub fn with_policy(config: GameConfig, policy: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    /// Deal a fresh round.
    pub fn init_game(&self, rng: &mut GameRng) -> Result<GameState, ConfigError> {
        deck::deal(&self.config, rng)
    }

    /// Ask the policy for `seat`'s next move.
    pub fn choose_action(&mut self, state: &GameState, seat: Seat) -> Action {
        self.policy.choose_action(state, seat)
    }

    /// Play a card from `seat`'s hand.
    ///
    /// A human 8 leaves the turn with the player and waits for
    /// `choose_suit`, even when it was the last card. An AI 8 names its
    /// suit here and passes the turn.
    pub fn play_card(
        &mut self,
        state: &mut GameState,
        seat: Seat,
        card_id: CardId,
    ) -> Result<Events, Rejected> {
        let action = Action::Play(card_id);
        check_turn(state, seat, action)?;
        let card = match state.card(card_id) {
            Some(card) if state.holds(seat, card_id) => card,
            _ => return reject(seat, action, Rejected::CardNotInHand),
        };
        if !is_card_playable(&card, state) {
            return reject(seat, action, Rejected::IllegalCard);
        }

        state
            .zones_mut()
            .move_to_zone(card_id, Zone::Discard, ZonePosition::Top);
        state.record(seat, action);
        debug!("{} played {}", seat, card);

        let mut events = Events::new();
        events.push(GameEvent::CardPlayed {
            seat,
            card: card_id,
        });
        let hand_empty = state.hand_size(seat) == 0;

        if card.is_wild() {
            match seat {
                Seat::Player => {
                    state.set_status(Status::WaitingForSuit);
                    debug!("waiting for player to choose a suit");
                    return Ok(events);
                }
                Seat::Ai => {
                    let remaining: Vec<Card> = state.hand(Seat::Ai).collect();
                    let suit = self.policy.choose_suit(&remaining);
                    state.set_wild_suit(Some(suit));
                    debug!("ai named {}", suit);
                    events.push(GameEvent::SuitChosen { seat, suit });
                }
            }
        } else {
            state.set_wild_suit(None);
        }

        if hand_empty {
            finish(state, seat, &mut events);
        } else {
            let to = state.pass_turn();
            events.push(GameEvent::TurnPassed { to });
        }
        Ok(events)
    }

    /// Draw the top deck card into `seat`'s hand and pass the turn.
    ///
    /// An empty deck draws nothing and still passes the turn.
    pub fn draw_card(&mut self, state: &mut GameState, seat: Seat) -> Result<Events, Rejected> {
        check_turn(state, seat, Action::Draw)?;

        let card = state.zones_mut().move_top(Zone::Deck, Zone::Hand(seat));
        state.record(seat, Action::Draw);
        match card {
            Some(id) => debug!("{} drew {:?}", seat, state.card(id)),
            None => debug!("{} passed on an empty deck", seat),
        }

        let mut events = Events::new();
        events.push(GameEvent::CardDrawn { seat, card });
        let to = state.pass_turn();
        events.push(GameEvent::TurnPassed { to });
        Ok(events)
    }

    /// Resolve the human's pending wild suit and hand the turn to the AI.
    ///
    /// If the 8 was the player's last card, the round ends here instead.
    pub fn choose_suit(&mut self, state: &mut GameState, suit: Suit) -> Result<Events, Rejected> {
        let action = Action::ChooseSuit(suit);
        if state.status() != Status::WaitingForSuit {
            return reject(Seat::Player, action, Rejected::WrongStatus);
        }

        state.set_wild_suit(Some(suit));
        state.record(Seat::Player, action);
        debug!("player named {}", suit);

        let mut events = Events::new();
        events.push(GameEvent::SuitChosen {
            seat: Seat::Player,
            suit,
        });
        if state.hand_size(Seat::Player) == 0 {
            finish(state, Seat::Player, &mut events);
        } else {
            state.set_status(Status::Playing);
            state.set_turn(Seat::Player);
            let to = state.pass_turn();
            events.push(GameEvent::TurnPassed { to });
        }
        Ok(events)
    }
}

impl<P: AiPolicy> RulesEngine for CrazyEights<P> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, seat: Seat) -> Vec<Action> {
        match state.status() {
            Status::WaitingForSuit if seat == Seat::Player => self
                .config
                .suits
                .iter()
                .map(|&suit| Action::ChooseSuit(suit))
                .collect(),
            Status::Playing if state.current_turn() == seat => {
                let mut actions: Vec<Action> = playable_cards(state, seat)
                    .iter()
                    .map(|card| Action::Play(card.id))
                    .collect();
                actions.push(Action::Draw);
                actions
            }
            _ => Vec::new(),
        }
    }

    fn apply_action(
        &mut self,
        state: &mut GameState,
        seat: Seat,
        action: Action,
    ) -> Result<Events, Rejected> {
        match action {
            Action::Play(card) => self.play_card(state, seat, card),
            Action::Draw => self.draw_card(state, seat),
            Action::ChooseSuit(suit) if seat == Seat::Player => self.choose_suit(state, suit),
            Action::ChooseSuit(_) => reject(seat, action, Rejected::WrongTurn),
        }
    }
}

fn check_turn(state: &GameState, seat: Seat, action: Action) -> Result<(), Rejected> {
    if state.status() != Status::Playing {
        return reject(seat, action, Rejected::WrongStatus);
    }
    if state.current_turn() != seat {
        return reject(seat, action, Rejected::WrongTurn);
    }
    Ok(())
}

fn reject<T>(seat: Seat, action: Action, reason: Rejected) -> Result<T, Rejected> {
    trace!("rejected {:?} from {}: {}", action, seat, reason);
    Err(reason)
}

fn finish(state: &mut GameState, winner: Seat, events: &mut Events) {
    state.set_status(Status::won_by(winner));
    debug!("{} emptied their hand", winner);
    events.push(GameEvent::RoundOver { winner });
}
