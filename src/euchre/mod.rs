//! The euchre card-play phase: setup, state, determinization, and the
//! adapters that expose it to the search engines.
//!
//! Seats are relative to the player the engine decides for, who is always
//! seat 0. Team 0 is seats 0 and 2.

pub mod determinize;
pub mod engine;
pub mod error;
pub mod setup;
pub mod state;

pub use determinize::{Determinizer, HiddenInfo};
pub use engine::EuchreEngine;
pub use error::DeterminizeError;
pub use setup::{current_leader, Setup, Trick};
pub use state::{Deal, Hand, PartialState, Pile, State, HAND_SIZE, TRICKS_PER_HAND};
