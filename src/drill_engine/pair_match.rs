//! Pair matching: find the two cards that belong together.
//!
//! The deck holds exactly two cards per id. A two-card reveal resolves into a
//! match (both cards settle) or a mismatch, which stays face up until the
//! caller calls [`PairMatch::reset_flipped`] after its display delay.

use log::{debug, trace, warn};
use rand::Rng;

use crate::drill_engine::{
    deck::pair_deck,
    error::{EngineError, Result},
    models::{CardFace, MatchCard, PairOutcome},
};

#[derive(Debug, Clone)]
pub struct PairMatch<T> {
    cards: Vec<MatchCard<T>>,
    flipped: Vec<usize>,
    matched_pairs: u32,
    total_pairs: u32,
    moves: u32,
}

impl<T: Clone + PartialEq> PairMatch<T> {
    /// Deal `pairs` items as symbol/picture pairs.
    pub fn new<R: Rng + ?Sized>(items: &[T], pairs: usize, rng: &mut R) -> Result<Self> {
        Self::deal(items, pairs, [CardFace::Symbol, CardFace::Picture], rng)
    }

    /// Deal `pairs` items as identical twins.
    pub fn twins<R: Rng + ?Sized>(items: &[T], pairs: usize, rng: &mut R) -> Result<Self> {
        Self::deal(items, pairs, [CardFace::Twin, CardFace::Twin], rng)
    }

    fn deal<R: Rng + ?Sized>(
        items: &[T],
        pairs: usize,
        faces: [CardFace; 2],
        rng: &mut R,
    ) -> Result<Self> {
        let cards = pair_deck(items, pairs, faces, rng)?;
        debug!("pair-match deck dealt: {} pairs, {} cards", pairs, cards.len());
        Ok(PairMatch {
            cards,
            flipped: Vec::with_capacity(2),
            matched_pairs: 0,
            total_pairs: pairs as u32,
            moves: 0,
        })
    }

    /// Reveal the card at `index`.
    ///
    /// Settled cards, cards already face up, and taps while a mismatch is
    /// still showing are ignored.
    pub fn flip_card(&mut self, index: usize) -> Result<PairOutcome> {
        if index >= self.cards.len() {
            warn!("flip_card({index}) rejected: deck has {} cards", self.cards.len());
            return Err(EngineError::IndexOutOfRange { index, len: self.cards.len() });
        }
        if self.flipped.len() >= 2
            || self.cards[index].matched
            || self.flipped.contains(&index)
        {
            trace!("flip_card({index}) ignored");
            return Ok(PairOutcome::Ignore);
        }

        self.flipped.push(index);
        self.cards[index].revealed = true;

        let (a, b) = match self.flipped[..] {
            [a, b] => (a, b),
            _ => return Ok(PairOutcome::Flip { index }),
        };

        self.moves += 1;
        if a != b && self.cards[a].id == self.cards[b].id {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            self.matched_pairs += 1;
            self.flipped.clear();
            let complete = self.is_complete();
            debug!("pair {} matched ({}/{})", self.cards[a].id, self.matched_pairs, self.total_pairs);
            Ok(PairOutcome::Match { indices: [a, b], complete })
        } else {
            Ok(PairOutcome::NoMatch { indices: [a, b] })
        }
    }

    /// Turn the pending unmatched cards face down again; returns their indices.
    pub fn reset_flipped(&mut self) -> Vec<usize> {
        let hidden: Vec<usize> = self.flipped.drain(..).collect();
        for &i in &hidden {
            if !self.cards[i].matched {
                self.cards[i].revealed = false;
            }
        }
        hidden
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs >= self.total_pairs
    }

    pub fn cards(&self) -> &[MatchCard<T>] {
        &self.cards
    }

    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(seed: u64) -> PairMatch<char> {
        let mut rng = StdRng::seed_from_u64(seed);
        PairMatch::new(&['A', 'B', 'C'], 3, &mut rng).unwrap()
    }

    fn partner(g: &PairMatch<char>, index: usize) -> usize {
        let id = g.cards()[index].id;
        (0..g.cards().len()).find(|&i| i != index && g.cards()[i].id == id).unwrap()
    }

    fn stranger(g: &PairMatch<char>, index: usize) -> usize {
        let id = g.cards()[index].id;
        (0..g.cards().len()).find(|&i| g.cards()[i].id != id).unwrap()
    }

    #[test]
    fn first_flip_then_match() {
        let mut g = game(1);
        let other = partner(&g, 0);
        assert_eq!(g.flip_card(0).unwrap(), PairOutcome::Flip { index: 0 });
        let out = g.flip_card(other).unwrap();
        assert_eq!(out, PairOutcome::Match { indices: [0, other], complete: false });
        assert_eq!(g.matched_pairs(), 1);
        assert!(g.flipped().is_empty());
    }

    #[test]
    fn tapping_the_same_card_twice_is_ignored() {
        let mut g = game(2);
        g.flip_card(3).unwrap();
        assert_eq!(g.flip_card(3).unwrap(), PairOutcome::Ignore);
        assert_eq!(g.flipped(), &[3]);
        assert_eq!(g.matched_pairs(), 0);
    }

    #[test]
    fn matched_cards_never_double_count() {
        let mut g = game(3);
        let other = partner(&g, 0);
        g.flip_card(0).unwrap();
        g.flip_card(other).unwrap();
        for _ in 0..3 {
            assert_eq!(g.flip_card(0).unwrap(), PairOutcome::Ignore);
            assert_eq!(g.flip_card(other).unwrap(), PairOutcome::Ignore);
        }
        assert_eq!(g.matched_pairs(), 1);
    }

    #[test]
    fn mismatch_waits_for_reset() {
        let mut g = game(4);
        let odd = stranger(&g, 0);
        g.flip_card(0).unwrap();
        let third = (0..6).find(|&i| i != 0 && i != odd).unwrap();
        assert_eq!(g.flip_card(odd).unwrap(), PairOutcome::NoMatch { indices: [0, odd] });
        assert_eq!(g.flip_card(third).unwrap(), PairOutcome::Ignore);
        assert!(g.cards()[0].revealed);

        let mut hidden = g.reset_flipped();
        hidden.sort_unstable();
        let mut expected = vec![0, odd];
        expected.sort_unstable();
        assert_eq!(hidden, expected);
        assert!(!g.cards()[0].revealed && !g.cards()[odd].revealed);
        assert_eq!(g.flip_card(third).unwrap(), PairOutcome::Flip { index: third });
    }

    #[test]
    fn clearing_every_pair_completes() {
        let mut g = game(5);
        let mut last = PairOutcome::Ignore;
        for i in 0..6 {
            if g.cards()[i].matched {
                continue;
            }
            let other = partner(&g, i);
            g.flip_card(i).unwrap();
            last = g.flip_card(other).unwrap();
        }
        assert!(matches!(last, PairOutcome::Match { complete: true, .. }));
        assert!(g.is_complete());
        assert_eq!(g.moves(), 3);
    }

    #[test]
    fn twins_share_a_face() {
        let mut rng = StdRng::seed_from_u64(6);
        let g = PairMatch::twins(&[1, 2], 2, &mut rng).unwrap();
        assert!(g.cards().iter().all(|c| c.face == CardFace::Twin));
    }

    #[test]
    fn out_of_range_leaves_state_alone() {
        let mut g = game(7);
        g.flip_card(1).unwrap();
        assert!(matches!(g.flip_card(6), Err(EngineError::IndexOutOfRange { index: 6, len: 6 })));
        assert_eq!(g.flipped(), &[1]);
    }
}
