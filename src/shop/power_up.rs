//! Power-up identifiers and the prize catalog.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::core::ShopConfig;

/// A purchasable power-up. Wire ids are `p1`..`p4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerUp {
    /// p1: the AI draws extra cards.
    #[serde(rename = "p1")]
    ExtraCards,
    /// p2: passive; every finished round pays the winner's stars.
    #[serde(rename = "p2")]
    StarGuarantee,
    /// p3: strip the first cards from the player's hand.
    #[serde(rename = "p3")]
    Discard,
    /// p4: win the round outright.
    #[serde(rename = "p4")]
    InstantWin,
}

impl PowerUp {
    pub const ALL: [PowerUp; 4] = [
        PowerUp::ExtraCards,
        PowerUp::StarGuarantee,
        PowerUp::Discard,
        PowerUp::InstantWin,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            PowerUp::ExtraCards => "p1",
            PowerUp::StarGuarantee => "p2",
            PowerUp::Discard => "p3",
            PowerUp::InstantWin => "p4",
        }
    }

    /// Whether `use_item` can spend it. p2 only ever sits in inventory.
    #[must_use]
    pub const fn is_activatable(self) -> bool {
        !matches!(self, PowerUp::StarGuarantee)
    }
}

impl std::fmt::Display for PowerUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown power-up `{0}`")]
pub struct UnknownPowerUp(pub String);

impl FromStr for PowerUp {
    type Err = UnknownPowerUp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowerUp::ALL
            .into_iter()
            .find(|item| item.id() == s)
            .ok_or_else(|| UnknownPowerUp(s.to_string()))
    }
}

/// Prize costs in stars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    costs: [u32; 4],
}

impl Catalog {
    #[must_use]
    pub fn from_config(config: &ShopConfig) -> Self {
        Self {
            costs: [
                config.extra_cards_cost,
                config.star_guarantee_cost,
                config.discard_cost,
                config.instant_win_cost,
            ],
        }
    }

    #[must_use]
    pub fn cost(&self, item: PowerUp) -> u32 {
        self.costs[item as usize]
    }

    /// Every prize with its cost, in id order.
    pub fn items(&self) -> impl Iterator<Item = (PowerUp, u32)> + '_ {
        PowerUp::ALL.into_iter().map(|item| (item, self.cost(item)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_config(&ShopConfig::default())
    }
}
