use rand::seq::SliceRandom;
use rand::Rng;

use crate::drill_engine::{
    error::{EngineError, Result},
    models::{CardFace, MatchCard},
};

/// Keep the first occurrence of every value, preserving order.
pub fn distinct_values<T: Clone + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Draw `n` distinct values from `items` uniformly, without replacement.
pub fn sample_distinct<T, R>(items: &[T], n: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    if n == 0 {
        return Err(EngineError::InvalidConfig("pairs must be at least 1".into()));
    }
    let distinct = distinct_values(items);
    if distinct.len() < n {
        return Err(EngineError::NotEnoughItems { needed: n, available: distinct.len() });
    }
    Ok(distinct.choose_multiple(rng, n).cloned().collect())
}

/// Two cards per sampled item, one per face, shuffled together.
pub fn pair_deck<T, R>(
    items: &[T],
    pairs: usize,
    faces: [CardFace; 2],
    rng: &mut R,
) -> Result<Vec<MatchCard<T>>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let picked = sample_distinct(items, pairs, rng)?;
    let mut cards: Vec<MatchCard<T>> = picked
        .into_iter()
        .enumerate()
        .flat_map(|(id, value)| {
            faces.map(|face| MatchCard {
                id,
                face,
                value: value.clone(),
                revealed: false,
                matched: false,
            })
        })
        .collect();
    cards.shuffle(rng);
    Ok(cards)
}

/// Each sampled value twice, shuffled.
pub fn doubled_deck<T, R>(items: &[T], pairs: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let picked = sample_distinct(items, pairs, rng)?;
    let mut cards: Vec<T> = picked.iter().chain(picked.iter()).cloned().collect();
    cards.shuffle(rng);
    Ok(cards)
}
