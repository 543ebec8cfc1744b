//! Choosing a card under hidden information.
//!
//! Every decision samples `determinizations` full deals consistent with what
//! seat 0 has seen, searches each one independently on the rayon pool, and
//! merges the per-sample answers in sample order.

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::AdvisorConfig;
use super::error::{AdvisorError, Result};
use crate::cards::Card;
use crate::core::{GameRng, Seat};
use crate::euchre::{Determinizer, EuchreEngine, PartialState, State};
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::minimax::Minimax;

/// A recommended card and how strongly the samples backed it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub card: Card,

    /// Samples whose search preferred this card.
    pub votes: usize,

    /// Mean value to team 0.
    pub value: f64,
}

/// Determinize-and-search decision maker for seat 0.
#[derive(Clone, Debug)]
pub struct Advisor {
    config: AdvisorConfig,
    determinizer: Determinizer,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        let determinizer = Determinizer::new().with_void_inference(config.infer_voids);
        Self {
            config,
            determinizer,
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Card to play by majority vote of per-sample MCTS.
    ///
    /// Ties go to the higher mean value, then to the lower card index.
    pub fn choose_card(&self, partial: &PartialState) -> Result<Decision> {
        check_turn(partial)?;
        let config = self.search_config()?;

        let picks = self.sample(partial, |state, rng| {
            let outcome = MCTSSearch::new(EuchreEngine, config.clone())
                .with_rng(rng)
                .search(state);
            let card = outcome.state.last_move.ok_or(AdvisorError::NoLegalMoves)?;
            Ok((card, outcome.mean))
        })?;

        let mut tally: FxHashMap<Card, (usize, f64)> = FxHashMap::default();
        for &(card, mean) in &picks {
            let entry = tally.entry(card).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += mean;
        }
        debug!("card votes over {} samples: {:?}", picks.len(), tally);

        tally
            .into_iter()
            .map(|(card, (votes, total))| Decision {
                card,
                votes,
                value: total / votes as f64,
            })
            .max_by(|a, b| {
                a.votes
                    .cmp(&b.votes)
                    .then(a.value.total_cmp(&b.value))
                    .then(b.card.index().cmp(&a.card.index()))
            })
            .ok_or(AdvisorError::NoLegalMoves)
    }

    /// Card with the highest mean minimax value across samples.
    ///
    /// Exhaustive, so only practical once a few tricks have been played.
    /// Ties go to the card earlier in hand order.
    pub fn choose_card_exact(&self, partial: &PartialState) -> Result<Decision> {
        check_turn(partial)?;

        let scored = self.sample(partial, |state, _| {
            let values: Vec<(Card, f64)> = state
                .successors()
                .into_iter()
                .map(|(card, next)| (card, Minimax::new(EuchreEngine).search(&next).0))
                .collect();
            Ok(values)
        })?;

        // Seat 0's legal cards, and their order, are the same in every sample.
        let cards: Vec<Card> = match scored.first() {
            Some(first) if !first.is_empty() => first.iter().map(|&(card, _)| card).collect(),
            _ => return Err(AdvisorError::NoLegalMoves),
        };

        let mut totals = vec![0.0; cards.len()];
        let mut votes = vec![0; cards.len()];
        for sample in &scored {
            let mut best = 0;
            for (i, &(_, value)) in sample.iter().enumerate() {
                totals[i] += value;
                if value > sample[best].1 {
                    best = i;
                }
            }
            votes[best] += 1;
        }

        let samples = scored.len() as f64;
        let mut best = 0;
        for i in 1..cards.len() {
            if totals[i] > totals[best] {
                best = i;
            }
        }
        debug!("exact values over {} samples: {:?}", scored.len(), totals);

        Ok(Decision {
            card: cards[best],
            votes: votes[best],
            value: totals[best] / samples,
        })
    }

    /// Expected points for team 0 from this position, averaged over samples.
    pub fn estimate(&self, partial: &PartialState) -> Result<f64> {
        let config = self.search_config()?;

        let values = self.sample(partial, |state, rng| {
            if state.is_terminal() {
                return Ok(f64::from(state.score()));
            }
            let team = state.player.team();
            let outcome = MCTSSearch::new(EuchreEngine, config.clone())
                .with_rng(rng)
                .search(state);
            Ok(if team == 0 { outcome.mean } else { -outcome.mean })
        })?;

        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    fn search_config(&self) -> Result<MCTSConfig> {
        if self.config.playouts == 0 {
            return Err(AdvisorError::NoPlayouts);
        }
        Ok(self.config.mcts())
    }

    /// Determinize `partial` once per sample and run `search` on each deal,
    /// in parallel. Sample `i` always gets the same RNG stream.
    fn sample<T, F>(&self, partial: &PartialState, search: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(State, GameRng) -> Result<T> + Sync,
    {
        if self.config.determinizations == 0 {
            return Err(AdvisorError::NoSamples);
        }
        // Bad input fails once, before fanning out.
        self.determinizer.account(partial)?;

        let base = GameRng::new(self.config.seed);
        (0..self.config.determinizations)
            .into_par_iter()
            .map(|i| {
                let mut rng = base.stream(i as u64);
                let state = self.determinizer.determinize(partial, &mut rng)?;
                search(state, rng)
            })
            .collect()
    }
}

fn check_turn(partial: &PartialState) -> Result<()> {
    if partial.player != Seat::new(0) {
        return Err(AdvisorError::NotOurTurn(partial.player));
    }
    if partial.hand.is_empty() {
        return Err(AdvisorError::NoLegalMoves);
    }
    Ok(())
}
