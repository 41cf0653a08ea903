//! Star balance and owned power-ups.
//!
//! Both outlive individual rounds; a new deal never touches them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::power_up::PowerUp;
use crate::core::Rejected;

/// Non-negative star balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    stars: u32,
}

impl Wallet {
    #[must_use]
    pub fn new(stars: u32) -> Self {
        Self { stars }
    }

    #[must_use]
    pub fn balance(&self) -> u32 {
        self.stars
    }

    /// Add stars and return the new balance.
    pub fn grant(&mut self, amount: u32) -> u32 {
        self.stars = self.stars.saturating_add(amount);
        self.stars
    }

    /// Remove stars, refusing if the balance would go negative.
    pub fn spend(&mut self, amount: u32) -> Result<u32, Rejected> {
        self.stars = self
            .stars
            .checked_sub(amount)
            .ok_or(Rejected::InsufficientFunds)?;
        Ok(self.stars)
    }
}

/// Count of each power-up owned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: FxHashMap<PowerUp, u32>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self, item: PowerUp) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn holds(&self, item: PowerUp) -> bool {
        self.count(item) > 0
    }

    pub fn add(&mut self, item: PowerUp) -> u32 {
        let count = self.counts.entry(item).or_insert(0);
        *count += 1;
        *count
    }

    /// Use up one unit.
    pub fn consume(&mut self, item: PowerUp) -> Result<u32, Rejected> {
        match self.counts.get_mut(&item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(*count)
            }
            _ => Err(Rejected::EmptyInventory),
        }
    }

    /// Counts for every power-up, in id order, including zeros.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(PowerUp, u32)> {
        PowerUp::ALL
            .into_iter()
            .map(|item| (item, self.count(item)))
            .collect()
    }
}
