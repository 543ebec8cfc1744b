//! Euchre card rules shared by both search engines.
//!
//! - `beats`: head-to-head comparison with the leader known
//! - `trick_winner`: winning seat, going-alone aware
//! - `legal_moves`: follow-suit enforcement
//! - `seat_order`: who plays in a trick and in what order

pub mod trick;

pub use trick::{
    beats, card_strength, legal_moves, next_to_play, seat_order, trick_size, trick_winner,
    MoveList,
};
