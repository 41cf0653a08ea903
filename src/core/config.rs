//! Game configuration types.
//!
//! A session is configured once at startup:
//! - `GameConfig`: card universe, deal size, seed, AI pacing
//! - `RewardConfig`: stars granted at round end and power-up magnitudes
//! - `ShopConfig`: prize costs
//!
//! Every field has a default, so a partial JSON document is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Rank, Suit};

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rank set is empty")]
    NoRanks,
    #[error("suit set is empty")]
    NoSuits,
    #[error("rank {0} listed more than once")]
    DuplicateRank(Rank),
    #[error("suit {0} listed more than once")]
    DuplicateSuit(Suit),
    #[error("hand size must be at least 1")]
    ZeroHandSize,
    #[error("deck has {available} cards but the deal needs {required}")]
    DeckTooSmall { available: usize, required: usize },
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Stars and power-up magnitudes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Stars for a round the player wins, or any round while holding p2.
    pub win_stars: u32,
    /// Stars for a round the AI wins.
    pub loss_stars: u32,
    /// Stars granted directly by a power-up that ends the round.
    pub power_up_win_stars: u32,
    /// Cards p1 pushes into the AI hand.
    pub extra_cards: usize,
    /// Cards p3 strips from the front of the player hand.
    pub discard_count: usize,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win_stars: 2,
            loss_stars: 1,
            power_up_win_stars: 2,
            extra_cards: 5,
            discard_count: 2,
        }
    }
}

/// Prize costs in stars, one per power-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub extra_cards_cost: u32,
    pub star_guarantee_cost: u32,
    pub discard_cost: u32,
    pub instant_win_cost: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            extra_cards_cost: 3,
            star_guarantee_cost: 5,
            discard_cost: 4,
            instant_win_cost: 10,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ranks in the deck (one card per rank per suit).
    pub ranks: Vec<Rank>,

    /// Suits in the deck.
    pub suits: Vec<Suit>,

    /// Cards dealt to each seat at round start.
    pub hand_size: usize,

    /// Session seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Visible delay before the AI moves, in milliseconds.
    pub ai_delay_ms: u64,

    pub rewards: RewardConfig,

    pub shop: ShopConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ranks: Rank::ALL.to_vec(),
            suits: Suit::ALL.to_vec(),
            hand_size: 8,
            seed: None,
            ai_delay_ms: 1000,
            rewards: RewardConfig::default(),
            shop: ShopConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_ranks(mut self, ranks: impl Into<Vec<Rank>>) -> Self {
        self.ranks = ranks.into();
        self
    }

    #[must_use]
    pub fn with_suits(mut self, suits: impl Into<Vec<Suit>>) -> Self {
        self.suits = suits.into();
        self
    }

    #[must_use]
    pub fn with_ai_delay_ms(mut self, delay: u64) -> Self {
        self.ai_delay_ms = delay;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    #[must_use]
    pub fn with_shop(mut self, shop: ShopConfig) -> Self {
        self.shop = shop;
        self
    }

    /// Number of cards in one deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }

    /// Cards consumed by the opening deal: two hands and one discard.
    ///
    /// Saturates at `usize::MAX` for hand sizes no deck can cover.
    #[must_use]
    pub fn cards_required(&self) -> usize {
        self.hand_size
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .unwrap_or(usize::MAX)
    }

    /// Check the card universe is well formed and large enough to deal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranks.is_empty() {
            return Err(ConfigError::NoRanks);
        }
        if self.suits.is_empty() {
            return Err(ConfigError::NoSuits);
        }
        for (i, rank) in self.ranks.iter().enumerate() {
            if self.ranks[..i].contains(rank) {
                return Err(ConfigError::DuplicateRank(*rank));
            }
        }
        for (i, suit) in self.suits.iter().enumerate() {
            if self.suits[..i].contains(suit) {
                return Err(ConfigError::DuplicateSuit(*suit));
            }
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }

        let available = self.deck_size();
        if self.hand_size > available {
            return Err(ConfigError::DeckTooSmall {
                available,
                required: self.cards_required(),
            });
        }
        let required = self.cards_required();
        if available < required {
            return Err(ConfigError::DeckTooSmall {
                available,
                required,
            });
        }
        Ok(())
    }
}
