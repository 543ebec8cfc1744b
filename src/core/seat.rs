//! Seat identification around the table.
//!
//! Seats are numbered clockwise relative to the deciding player:
//!
//! - seat 0: the player the engine is deciding for
//! - seat 1: opponent to the left
//! - seat 2: partner
//! - seat 3: opponent to the right
//!
//! Seats 0 and 2 form team 0, seats 1 and 3 form team 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of seats at a euchre table.
pub const SEAT_COUNT: usize = 4;

/// Raw seat number outside `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("seat {0} is out of range 0..4")]
pub struct InvalidSeat(pub u8);

/// A seat index in `0..4`.
///
/// Deserializes from a bare number and rejects anything out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seat(u8);

impl Seat {
    /// Create a seat.
    ///
    /// Panics if `id >= 4`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < SEAT_COUNT, "seat out of range");
        Self(id)
    }

    /// Raw index, usable for per-seat arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, who plays next.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Seat {
        Seat((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// The seat across the table.
    #[inline]
    #[must_use]
    pub const fn partner(self) -> Seat {
        Seat((self.0 + 2) % SEAT_COUNT as u8)
    }

    /// Team number, 0 or 1.
    #[inline]
    #[must_use]
    pub const fn team(self) -> u8 {
        self.0 % 2
    }

    /// Iterate over all four seats starting at seat 0.
    ///
    /// ```
    /// use euchre_search::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[2], Seat::new(2));
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

impl TryFrom<u8> for Seat {
    type Error = InvalidSeat;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < SEAT_COUNT {
            Ok(Self(id))
        } else {
            Err(InvalidSeat(id))
        }
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}
