//! # crazy-eights
//!
//! A turn-based Crazy Eights engine: one human seat against an AI seat,
//! plus a star currency and a shop of power-ups that bend the round.
//!
//! ## Design Principles
//!
//! 1. **Closed types**: ranks, suits, seats and power-ups are enums, so
//!    legality and the AI heuristic match exhaustively.
//!
//! 2. **Rejections are values**: every operation either applies fully and
//!    returns its events, or returns a `Rejected` reason and changes nothing.
//!
//! 3. **Single writer**: `GameSession` owns the round, the wallet and the
//!    inventory. The AI moves on a logical clock keyed by a state version,
//!    so a stale move never fires.
//!
//! ## Modules
//!
//! - `core`: cards, seats, state, actions, events, RNG, configuration
//! - `zones`: card locations (deck, discard pile, hands)
//! - `cards`: deck building and the opening deal
//! - `rules`: legality and the `RulesEngine` transitions
//! - `policy`: AI move selection
//! - `shop`: stars, inventory, power-up effects
//! - `session`: the aggregate, AI scheduling, UI snapshots

pub mod cards;
pub mod core;
pub mod policy;
pub mod rules;
pub mod session;
pub mod shop;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, CardId, ConfigError, Events, GameConfig, GameEvent, GameRng,
    GameState, Rank, Rejected, RewardConfig, Seat, SeatMap, ShopConfig, Status, Suit,
};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::cards::{create_deck, deal};

pub use crate::rules::{current_suit, is_card_playable, CrazyEights, RulesEngine};

pub use crate::policy::{AiPolicy, GreedyPolicy, RandomPolicy};

pub use crate::shop::{Catalog, Inventory, PowerUp, Wallet};

pub use crate::session::{AiScheduler, GameSession, PendingMove, Snapshot};
