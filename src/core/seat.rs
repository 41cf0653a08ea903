//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The game always has exactly two seats: the human `Player` and the `Ai`.
//!
//! ## SeatMap
//!
//! Per-seat storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player,
    Ai,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Ai];

    /// The seat that is not this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Ai,
            Seat::Ai => Seat::Player,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => f.write_str("player"),
            Seat::Ai => f.write_str("ai"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::{Seat, SeatMap};
///
/// let mut draws: SeatMap<u32> = SeatMap::with_value(0);
/// draws[Seat::Ai] += 2;
///
/// assert_eq!(draws[Seat::Player], 0);
/// assert_eq!(draws[Seat::Ai], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    player: T,
    ai: T,
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            player: factory(Seat::Player),
            ai: factory(Seat::Ai),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            ai: value,
        }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Player => &self.player,
            Seat::Ai => &self.ai,
        }
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Ai => &mut self.ai,
        }
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [(Seat::Player, &self.player), (Seat::Ai, &self.ai)].into_iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
