//! Euchre cards.
//!
//! ## Key Types
//!
//! - `Suit`: the four suits, with the same-colour `left()` pairing
//! - `Value`: nine through ace, totally ordered
//! - `Card`: an immutable suit/value pair with a stable deck index
//! - `CardSet`: bit set over the 24-card deck

pub mod card;
pub mod set;

pub use card::{Card, Suit, Value, DECK_SIZE};
pub use set::CardSet;
