//! Core building blocks shared by the search engines and the euchre model.
//!
//! - `seat`: table positions and teams
//! - `heap`: indexed max-heap with stable handles
//! - `rng`: seedable RNG with per-sample streams

pub mod heap;
pub mod rng;
pub mod seat;

pub use heap::{Handle, IndexedHeap};
pub use rng::GameRng;
pub use seat::{InvalidSeat, Seat, SEAT_COUNT};
