//! Memory flip: a doubled deck, two flips per attempt.
//!
//! The first flip of an attempt is held in `first_flip`; the second resolves
//! it. Mismatched cards stay revealed until the caller hides them with
//! [`MemoryFlip::hide_cards`]; further flips are ignored in the meantime.

use log::{debug, trace, warn};
use rand::Rng;

use crate::drill_engine::{
    deck::doubled_deck,
    error::{EngineError, Result},
    models::MemoryOutcome,
};

#[derive(Debug, Clone)]
pub struct MemoryFlip<T> {
    cards: Vec<T>,
    revealed: Vec<bool>,
    matched: Vec<bool>,
    first_flip: Option<usize>,
    pending_hide: Option<[usize; 2]>,
    matched_pairs: u32,
    total_pairs: u32,
    attempts: u32,
}

impl<T: Clone + PartialEq> MemoryFlip<T> {
    pub fn new<R: Rng + ?Sized>(items: &[T], pairs: usize, rng: &mut R) -> Result<Self> {
        let cards = doubled_deck(items, pairs, rng)?;
        debug!("memory deck dealt: {} pairs", pairs);
        Ok(MemoryFlip {
            revealed: vec![false; cards.len()],
            matched: vec![false; cards.len()],
            cards,
            first_flip: None,
            pending_hide: None,
            matched_pairs: 0,
            total_pairs: pairs as u32,
            attempts: 0,
        })
    }

    pub fn flip(&mut self, index: usize) -> Result<MemoryOutcome<T>> {
        self.check_index(index)?;
        if self.pending_hide.is_some() || self.revealed[index] {
            trace!("flip({index}) ignored");
            return Ok(MemoryOutcome::Ignore);
        }
        self.revealed[index] = true;

        let Some(first) = self.first_flip.take() else {
            self.first_flip = Some(index);
            return Ok(MemoryOutcome::FirstFlip { index, value: self.cards[index].clone() });
        };

        self.attempts += 1;
        if self.cards[first] == self.cards[index] {
            self.matched[first] = true;
            self.matched[index] = true;
            self.matched_pairs += 1;
            debug!("memory pair found ({}/{})", self.matched_pairs, self.total_pairs);
            Ok(MemoryOutcome::Match { indices: [first, index], complete: self.is_complete() })
        } else {
            self.pending_hide = Some([first, index]);
            Ok(MemoryOutcome::NoMatch { indices: [first, index] })
        }
    }

    /// Turn `indices` face down.
    ///
    /// Rejects the whole call, changing nothing, if any index is out of range
    /// or belongs to a confirmed pair.
    pub fn hide_cards(&mut self, indices: &[usize]) -> Result<()> {
        for &i in indices {
            self.check_index(i)?;
            if self.matched[i] {
                warn!("hide_cards rejected: card {i} is matched");
                return Err(EngineError::AlreadyMatched { index: i });
            }
        }
        for &i in indices {
            self.revealed[i] = false;
            if self.first_flip == Some(i) {
                self.first_flip = None;
            }
        }
        if let Some(pair) = self.pending_hide {
            if pair.iter().all(|&i| !self.revealed[i]) {
                self.pending_hide = None;
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.cards.len() {
            warn!("memory index {index} rejected: deck has {} cards", self.cards.len());
            return Err(EngineError::IndexOutOfRange { index, len: self.cards.len() });
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs >= self.total_pairs
    }

    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn first_flip(&self) -> Option<usize> {
        self.first_flip
    }

    pub fn pending_hide(&self) -> Option<[usize; 2]> {
        self.pending_hide
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(seed: u64) -> MemoryFlip<&'static str> {
        let mut rng = StdRng::seed_from_u64(seed);
        MemoryFlip::new(&["🚗", "🚌", "🚲", "🚀", "🚂", "🚁"], 4, &mut rng).unwrap()
    }

    fn twin_of(g: &MemoryFlip<&str>, index: usize) -> usize {
        (0..g.cards().len())
            .find(|&i| i != index && g.cards()[i] == g.cards()[index])
            .unwrap()
    }

    fn other_than(g: &MemoryFlip<&str>, index: usize) -> usize {
        (0..g.cards().len()).find(|&i| g.cards()[i] != g.cards()[index]).unwrap()
    }

    #[test]
    fn deck_is_doubled() {
        let g = game(1);
        assert_eq!(g.cards().len(), 8);
        for c in g.cards() {
            assert_eq!(g.cards().iter().filter(|x| *x == c).count(), 2);
        }
        assert!(g.revealed().iter().all(|r| !r));
    }

    #[test]
    fn two_phase_resolution() {
        let mut g = game(2);
        let value = g.cards()[0];
        assert_eq!(g.flip(0).unwrap(), MemoryOutcome::FirstFlip { index: 0, value });
        let other = other_than(&g, 0);
        assert_eq!(g.flip(other).unwrap(), MemoryOutcome::NoMatch { indices: [0, other] });
        assert_eq!(g.first_flip(), None);
        assert_eq!(g.attempts(), 1);
    }

    #[test]
    fn mismatch_blocks_until_hidden() {
        let mut g = game(3);
        let other = other_than(&g, 0);
        g.flip(0).unwrap();
        g.flip(other).unwrap();
        let spare = (0..8).find(|&i| i != 0 && i != other).unwrap();
        assert_eq!(g.flip(spare).unwrap(), MemoryOutcome::Ignore);

        g.hide_cards(&[0, other]).unwrap();
        assert!(!g.revealed()[0] && !g.revealed()[other]);
        assert_eq!(g.pending_hide(), None);
        assert!(matches!(g.flip(spare).unwrap(), MemoryOutcome::FirstFlip { .. }));
    }

    #[test]
    fn revealed_card_is_ignored() {
        let mut g = game(4);
        g.flip(5).unwrap();
        assert_eq!(g.flip(5).unwrap(), MemoryOutcome::Ignore);
        assert_eq!(g.first_flip(), Some(5));
        assert_eq!(g.attempts(), 0);
    }

    #[test]
    fn hiding_a_matched_card_is_rejected() {
        let mut g = game(5);
        let twin = twin_of(&g, 0);
        g.flip(0).unwrap();
        assert!(matches!(g.flip(twin).unwrap(), MemoryOutcome::Match { complete: false, .. }));
        let err = g.hide_cards(&[twin]).unwrap_err();
        assert!(matches!(err, EngineError::AlreadyMatched { index } if index == twin));
        assert!(g.revealed()[0] && g.revealed()[twin]);
        assert!(g.is_matched(0));
    }

    #[test]
    fn finding_every_pair_completes() {
        let mut g = game(6);
        let mut last = MemoryOutcome::Ignore;
        for i in 0..8 {
            if g.is_matched(i) {
                continue;
            }
            let twin = twin_of(&g, i);
            g.flip(i).unwrap();
            last = g.flip(twin).unwrap();
        }
        assert_eq!(g.matched_pairs(), 4);
        assert!(matches!(last, MemoryOutcome::Match { complete: true, .. }));
        assert_eq!(g.attempts(), 4);
    }

    #[test]
    fn out_of_range_flip_is_an_error() {
        let mut g = game(7);
        assert!(matches!(g.flip(8), Err(EngineError::IndexOutOfRange { index: 8, len: 8 })));
        assert!(g.hide_cards(&[0, 99]).is_err());
    }
}
