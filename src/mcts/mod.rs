//! Monte Carlo Tree Search over fully observed states.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes refer to parents and children by [`NodeId`]
//! - **UCB1 heaps**: each node ranks its children in an indexed max-heap,
//!   refreshed in place after every playout
//! - **Lazy successors**: a node lists its successor states once and expands
//!   them one playout at a time, in random order
//! - **Fixed budget**: a search runs a set number of playouts
//!
//! ## Usage
//!
//! ```rust
//! use euchre_search::cards::Suit;
//! use euchre_search::core::{GameRng, Seat};
//! use euchre_search::euchre::{Deal, EuchreEngine, Setup, State};
//! use euchre_search::mcts::{MCTSConfig, MCTSSearch};
//!
//! let mut rng = GameRng::new(3);
//! let deal = Deal::random(&mut rng);
//! let setup = Setup::called(Seat::new(3), Seat::new(0), deal.top(), Suit::Spades);
//! let state = State::from_deal(setup, &deal);
//!
//! let mut search = MCTSSearch::new(EuchreEngine, MCTSConfig::default().with_playouts(200));
//! let outcome = search.search(state);
//! assert!(outcome.state.last_move.is_some());
//! ```

pub mod config;
pub mod engine;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use engine::MCTSEngine;
pub use node::{ucb1, MCTSNode, NodeId, NodePhase};
pub use search::{mcts, MCTSOutcome, MCTSSearch};
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
