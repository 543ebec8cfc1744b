//! Decisions for seat 0 under hidden information.
//!
//! Each decision samples many full deals consistent with the public record,
//! searches every deal independently, and aggregates: a majority vote for
//! MCTS, the best mean value for exhaustive minimax.
//!
//! ```rust
//! use euchre_search::advisor::{Advisor, AdvisorConfig};
//! use euchre_search::cards::{Card, Suit, Value};
//! use euchre_search::core::Seat;
//! use euchre_search::euchre::{PartialState, Setup};
//!
//! let hand = [
//!     Card::new(Suit::Spades, Value::Jack),
//!     Card::new(Suit::Clubs, Value::Jack),
//!     Card::new(Suit::Spades, Value::Ace),
//!     Card::new(Suit::Hearts, Value::Ace),
//!     Card::new(Suit::Diamonds, Value::King),
//! ];
//! let top = Card::new(Suit::Hearts, Value::Nine);
//! let setup = Setup::called(Seat::new(3), Seat::new(0), top, Suit::Spades);
//! let partial = PartialState::new(setup, Seat::new(0), &hand, &[], []);
//!
//! let config = AdvisorConfig::default().with_determinizations(4).with_playouts(200);
//! let decision = Advisor::new(config).choose_card(&partial).unwrap();
//! assert!(hand.contains(&decision.card));
//! ```

pub mod bidding;
pub mod config;
pub mod error;
pub mod play;

pub use bidding::choose_discard;
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use play::{Advisor, Decision};
