//! Whack-a-mole: a grid of holes, one target per round.
//!
//! Each `spawn_moles` call starts a round with `count` occupied holes, exactly
//! one of which holds the target. The round is resolved by the first tap
//! (hit, wrong mole, or empty hole) or, if the player does nothing in time,
//! by the caller invoking [`Whack::expire_round`]. The engine keeps no clock.

use log::{debug, trace, warn};
use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::drill_engine::{
    config::WhackConfig,
    error::{EngineError, Result},
    models::WhackOutcome,
};

pub const DEFAULT_HOLES: usize = 9;
pub const DEFAULT_MAX_ROUNDS: u32 = 10;
pub const POINTS_PER_HIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct Whack<T> {
    items: Vec<T>,
    holes: Vec<Option<T>>,
    target: Option<T>,
    score: u32,
    round: u32,
    max_rounds: u32,
    points_per_hit: u32,
    round_resolved: bool,
    hits: u32,
    wrong_hits: u32,
    misses: u32,
    timeouts: u32,
}

impl<T: Clone + PartialEq> Whack<T> {
    /// Empty board of `hole_count` holes with the default round limit.
    pub fn new(items: &[T], hole_count: usize) -> Self {
        Whack {
            items: items.to_vec(),
            holes: vec![None; hole_count],
            target: None,
            score: 0,
            round: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            points_per_hit: POINTS_PER_HIT,
            round_resolved: true,
            hits: 0,
            wrong_hits: 0,
            misses: 0,
            timeouts: 0,
        }
    }

    pub fn with_config(items: &[T], config: &WhackConfig) -> Self {
        let mut whack = Self::new(items, config.hole_count);
        whack.max_rounds = config.max_rounds;
        whack.points_per_hit = config.points_per_hit;
        whack
    }

    /// Start the next round and return the hole holding the target.
    pub fn spawn_moles<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<usize> {
        if self.round >= self.max_rounds {
            return Err(EngineError::RoundsExhausted { max_rounds: self.max_rounds });
        }
        if count == 0 || count > self.holes.len() {
            warn!("spawn_moles({count}) rejected: {} holes", self.holes.len());
            return Err(EngineError::TooManyMoles { count, holes: self.holes.len() });
        }
        let target = self
            .items
            .choose(rng)
            .cloned()
            .ok_or(EngineError::NotEnoughItems { needed: 1, available: 0 })?;
        let decoys: Vec<T> = self.items.iter().filter(|v| **v != target).cloned().collect();
        if count > 1 && decoys.is_empty() {
            return Err(EngineError::NotEnoughItems { needed: 2, available: 1 });
        }

        // a round nobody tapped still counts as timed out
        self.expire_round();
        let positions = index::sample(rng, self.holes.len(), count).into_vec();
        self.holes.iter_mut().for_each(|h| *h = None);
        self.holes[positions[0]] = Some(target.clone());
        for &pos in &positions[1..] {
            self.holes[pos] = decoys.choose(rng).cloned();
        }

        self.target = Some(target);
        self.round += 1;
        self.round_resolved = false;
        debug!("whack round {}/{}: {count} moles, target at {}", self.round, self.max_rounds, positions[0]);
        Ok(positions[0])
    }

    /// Tap hole `position`. Only the first tap of a live round counts.
    pub fn whack(&mut self, position: usize) -> Result<WhackOutcome> {
        if position >= self.holes.len() {
            warn!("whack({position}) rejected: {} holes", self.holes.len());
            return Err(EngineError::IndexOutOfRange { index: position, len: self.holes.len() });
        }
        if self.round_resolved {
            trace!("whack({position}) ignored: no live round");
            return Ok(WhackOutcome::Ignore);
        }
        self.round_resolved = true;

        let outcome = match &self.holes[position] {
            Some(v) if self.target.as_ref() == Some(v) => {
                self.score = self.score.saturating_add(self.points_per_hit);
                self.hits += 1;
                WhackOutcome::Hit { position }
            }
            Some(_) => {
                self.wrong_hits += 1;
                WhackOutcome::WrongHit { position }
            }
            None => {
                self.misses += 1;
                WhackOutcome::Miss { position }
            }
        };
        trace!("whack({position}) -> {outcome:?}");
        Ok(outcome)
    }

    /// Time ran out on the current round.
    ///
    /// Clears the board and returns `Timeout` if the round was still live,
    /// `None` if there was nothing to expire.
    pub fn expire_round(&mut self) -> Option<WhackOutcome> {
        if self.round_resolved {
            return None;
        }
        self.round_resolved = true;
        self.timeouts += 1;
        self.holes.iter_mut().for_each(|h| *h = None);
        self.target = None;
        debug!("whack round {} expired", self.round);
        Some(WhackOutcome::Timeout)
    }

    /// All rounds played and the last one resolved.
    pub fn is_over(&self) -> bool {
        self.round >= self.max_rounds && self.round_resolved
    }

    pub fn is_round_live(&self) -> bool {
        !self.round_resolved
    }

    pub fn holes(&self) -> &[Option<T>] {
        &self.holes
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn wrong_hits(&self) -> u32 {
        self.wrong_hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn timeouts(&self) -> u32 {
        self.timeouts
    }
}
