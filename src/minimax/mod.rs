//! Exhaustive alpha-beta search for small, fully observed game trees.
//!
//! Deterministic given a deterministic successor order. Meant for endgames,
//! where the branching factor has collapsed.

pub mod engine;
pub mod search;

pub use engine::{MinimaxEngine, Move};
pub use search::{minimax, Minimax, MinimaxStats};
