//! The session aggregate.
//!
//! `GameSession` is the only writer of a round's state, the star wallet and
//! the inventory. Every accepted operation bumps `version` and re-evaluates
//! the AI schedule; rejected ones change nothing.

use std::time::Duration;

use log::{debug, info};

use super::scheduler::{AiScheduler, PendingMove};
use super::snapshot::Snapshot;
use crate::core::{
    Card, CardId, ConfigError, Events, GameConfig, GameEvent, GameRng, GameState, Rejected, Seat,
    Status, Suit,
};
use crate::policy::{AiPolicy, GreedyPolicy};
use crate::rules::{self, CrazyEights, RulesEngine};
use crate::shop::{apply_power_up, round_reward, Catalog, Inventory, PowerUp, Wallet};

/// One player's session: the current round plus persistent currency.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use crazy_eights::core::{GameConfig, Seat};
/// use crazy_eights::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(session.state().hand_size(Seat::Player), 8);
///
/// session.draw_card().unwrap();
/// assert_eq!(session.state().current_turn(), Seat::Ai);
///
/// // The AI moves once its delay has elapsed
/// session.advance(Duration::from_millis(1000));
/// assert_eq!(session.state().current_turn(), Seat::Player);
/// ```
#[derive(Debug)]
pub struct GameSession<P = GreedyPolicy> {
    engine: CrazyEights<P>,
    state: GameState,
    wallet: Wallet,
    inventory: Inventory,
    catalog: Catalog,
    scheduler: AiScheduler,
    rng: GameRng,
    version: u64,
    round: u32,
    /// Whether this round's stars have been paid.
    settled: bool,
}

impl GameSession<GreedyPolicy> {
    /// Start a session against the default heuristic opponent.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config, GreedyPolicy)
    }
}

impl<P: AiPolicy> GameSession<P> {
    /// Start a session and deal the first round.
    pub fn with_policy(config: GameConfig, policy: P) -> Result<Self, ConfigError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let scheduler = AiScheduler::new(Duration::from_millis(config.ai_delay_ms));
        let catalog = Catalog::from_config(&config.shop);
        let engine = CrazyEights::with_policy(config, policy)?;
        let state = engine.init_game(&mut rng.fork())?;
        info!("session started (seed {})", rng.seed());

        Ok(Self {
            engine,
            state,
            wallet: Wallet::default(),
            inventory: Inventory::new(),
            catalog,
            scheduler,
            rng,
            version: 0,
            round: 1,
            settled: false,
        })
    }

    /// Swap in an arranged round, e.g. a replayed or hand-built position.
    ///
    /// The round counts as unsettled and the AI is armed if it is to move.
    #[must_use]
    pub fn with_round(mut self, state: GameState) -> Self {
        self.state = state;
        self.settled = false;
        self.commit();
        self
    }

    // === Observation ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn stars(&self) -> u32 {
        self.wallet.balance()
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Counter bumped by every accepted operation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Rounds dealt so far, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn pending_ai_move(&self) -> Option<PendingMove> {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn scheduler(&self) -> &AiScheduler {
        &self.scheduler
    }

    /// Legality of a card against the table, regardless of whose turn it is.
    #[must_use]
    pub fn is_card_playable(&self, card: &Card) -> bool {
        rules::is_card_playable(card, &self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.state,
            self.version,
            self.round,
            self.wallet.balance(),
            self.inventory.snapshot(),
        )
    }

    // === Round lifecycle ===

    /// Replace the round with a fresh deal. Stars and inventory carry over,
    /// and any pending AI move is dropped.
    pub fn new_round(&mut self) -> Result<(), ConfigError> {
        self.state = self.engine.init_game(&mut self.rng.fork())?;
        self.round += 1;
        self.settled = false;
        info!("round {} dealt", self.round);
        self.commit();
        Ok(())
    }

    // === Player operations ===

    pub fn play_card(&mut self, card: CardId) -> Result<Events, Rejected> {
        let events = self.engine.play_card(&mut self.state, Seat::Player, card)?;
        Ok(self.after_turn(events))
    }

    pub fn draw_card(&mut self) -> Result<Events, Rejected> {
        let events = self.engine.draw_card(&mut self.state, Seat::Player)?;
        Ok(self.after_turn(events))
    }

    pub fn choose_suit(&mut self, suit: Suit) -> Result<Events, Rejected> {
        let events = self.engine.choose_suit(&mut self.state, suit)?;
        Ok(self.after_turn(events))
    }

    /// Spend one unit of a power-up on the current round.
    ///
    /// A power-up that wins the round (p3 emptying the hand, or p4) pays
    /// `power_up_win_stars` and settles the round. That award replaces the
    /// standard round reward; the two are never both paid.
    pub fn use_item(&mut self, item: PowerUp) -> Result<Events, Rejected> {
        if !item.is_activatable() {
            return Err(Rejected::NotActivatable);
        }
        if !self.inventory.holds(item) {
            return Err(Rejected::EmptyInventory);
        }

        let effects = apply_power_up(&mut self.state, item, &self.engine.config().rewards)?;
        let left = self.inventory.consume(item)?;
        info!("used {} ({} left)", item, left);

        let mut events = Events::new();
        events.push(GameEvent::PowerUpUsed { item });
        events.extend(effects);
        if self.state.status().is_terminal() && !self.settled {
            let amount = self.engine.config().rewards.power_up_win_stars;
            self.pay(amount, &mut events);
        }
        self.commit();
        Ok(events)
    }

    /// Buy one unit of a power-up.
    pub fn redeem(&mut self, item: PowerUp) -> Result<Events, Rejected> {
        let cost = self.catalog.cost(item);
        let balance = self.wallet.spend(cost)?;
        let count = self.inventory.add(item);
        info!("redeemed {} for {} stars ({} left, {} owned)", item, cost, balance, count);

        self.commit();
        let mut events = Events::new();
        events.push(GameEvent::Redeemed { item, cost });
        Ok(events)
    }

    // === Time ===

    /// Move the session clock forward, firing the AI move if it came due.
    ///
    /// Returns the AI's events, or an empty batch if nothing fired.
    pub fn advance(&mut self, dt: Duration) -> Events {
        let Some(pending) = self.scheduler.advance(dt) else {
            return Events::new();
        };
        if pending.version != self.version
            || self.state.current_turn() != Seat::Ai
            || self.state.status() != Status::Playing
        {
            debug!(
                "dropped stale ai move (armed v{}, now v{})",
                pending.version, self.version
            );
            return Events::new();
        }

        let action = self.engine.choose_action(&self.state, Seat::Ai);
        debug!("ai chose {:?}", action);
        match self.engine.apply_action(&mut self.state, Seat::Ai, action) {
            Ok(events) => self.after_turn(events),
            Err(reason) => {
                // A well-behaved policy never gets here; draw so the round moves on
                debug!("ai action {:?} rejected: {}", action, reason);
                match self.engine.draw_card(&mut self.state, Seat::Ai) {
                    Ok(events) => self.after_turn(events),
                    Err(_) => Events::new(),
                }
            }
        }
    }

    // === Internals ===

    /// Pay the round reward on the first move into a terminal status.
    fn after_turn(&mut self, mut events: Events) -> Events {
        if let Some(winner) = self.state.status().winner() {
            if !self.settled {
                info!("round {} won by {}", self.round, winner);
                let amount = round_reward(winner, &self.inventory, &self.engine.config().rewards);
                self.pay(amount, &mut events);
            }
        }
        self.commit();
        events
    }

    fn pay(&mut self, amount: u32, events: &mut Events) {
        let balance = self.wallet.grant(amount);
        self.settled = true;
        info!("granted {} stars (balance {})", amount, balance);
        events.push(GameEvent::StarsGranted { amount, balance });
    }

    /// Bump the version and re-arm the AI if it is now to move.
    fn commit(&mut self) {
        self.version += 1;
        self.scheduler.cancel();
        if self.state.current_turn() == Seat::Ai && self.state.status() == Status::Playing {
            self.scheduler.arm(self.version);
        }
    }
}
