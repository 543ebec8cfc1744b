//! # euchre-search
//!
//! A euchre decision engine: card rules, sampling of hidden hands, and two
//! search engines over the resulting fully observed deals.
//!
//! ## Design Principles
//!
//! 1. **Seat-Relative**: the player being advised is always seat 0. Scores
//!    are from team 0's perspective.
//!
//! 2. **Determinize, Then Search**: the engines only ever see fully observed
//!    states. Hidden information is handled by sampling many deals and
//!    aggregating the per-deal answers.
//!
//! 3. **Engine-Agnostic Search**: MCTS and minimax are generic over small
//!    adapter traits; euchre is one implementation of them.
//!
//! ## Architecture
//!
//! - **Arena MCTS**: nodes in a flat vector, children ranked by UCB1 in an
//!   indexed heap that is updated in place.
//!
//! - **Persistent Data Structures**: trick history shared between successor
//!   states via `im-rs`.
//!
//! - **Reproducible**: every random choice flows from a seeded ChaCha RNG, and
//!   parallel samples each derive their own stream.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, indexed heap
//! - `cards`: suits, values, cards, card sets
//! - `rules`: trick winner, legal plays, seat order
//! - `euchre`: setup, states, determinization, engine adapters
//! - `mcts`: Monte Carlo Tree Search
//! - `minimax`: alpha-beta search
//! - `advisor`: card play and bidding decisions under hidden information

pub mod core;
pub mod cards;
pub mod rules;
pub mod euchre;
pub mod mcts;
pub mod minimax;
pub mod advisor;

// Re-export commonly used types
pub use crate::core::{GameRng, Handle, IndexedHeap, Seat, SEAT_COUNT};

pub use crate::cards::{Card, CardSet, Suit, Value, DECK_SIZE};

pub use crate::rules::{beats, legal_moves, trick_winner, MoveList};

pub use crate::euchre::{
    Deal, DeterminizeError, Determinizer, EuchreEngine, PartialState, Setup, State, Trick,
};

pub use crate::mcts::{MCTSConfig, MCTSEngine, MCTSOutcome, MCTSSearch, MCTSTree, NodeId};

pub use crate::minimax::{Minimax, MinimaxEngine, Move};

pub use crate::advisor::{Advisor, AdvisorConfig, AdvisorError, Decision};
