//! Multiple-choice option sets.
//!
//! `generate_options` always returns the correct answer exactly once,
//! surrounded by up to `count - 1` distractors drawn from the pool. Small
//! pools yield fewer options; the set is never padded with repeats.

use rand::seq::SliceRandom;
use rand::Rng;

/// Build a shuffled option set of at most `count` values containing `correct`.
///
/// Distractors are every pool value not equal to `correct`, sampled without
/// replacement. A `count` of 0 or 1 yields just the correct answer.
pub fn generate_options<T, R>(correct: &T, pool: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let others: Vec<&T> = pool.iter().filter(|v| *v != correct).collect();
    let wanted = count.saturating_sub(1).min(others.len());

    let mut options = Vec::with_capacity(wanted + 1);
    options.push(correct.clone());
    options.extend(others.choose_multiple(rng, wanted).map(|v| (*v).clone()));
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

    #[test]
    fn correct_answer_appears_exactly_once() {
        let pool = ["日", "月", "山", "水", "火", "木"];
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            for correct in &pool {
                for k in 1..=8 {
                    let opts = generate_options(correct, &pool, k, &mut rng);
                    assert_eq!(opts.iter().filter(|o| *o == correct).count(), 1);
                    assert_eq!(opts.len(), k.min(pool.len()), "k={k} seed={seed}");
                }
            }
        }
    }

    #[test]
    fn distractors_are_distinct_pool_members() {
        let pool: Vec<u32> = (1..=20).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let opts = generate_options(&7, &pool, 4, &mut rng);
        let mut sorted = opts.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        assert!(opts.iter().all(|o| pool.contains(o)));
    }

    #[test]
    fn correct_missing_from_pool_still_included() {
        let mut rng = StdRng::seed_from_u64(8);
        let opts = generate_options(&'Z', &['A', 'B'], 4, &mut rng);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts.iter().filter(|o| **o == 'Z').count(), 1);
    }

    #[test]
    fn zero_count_yields_only_the_answer() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(generate_options(&'A', &['A', 'B', 'C'], 0, &mut rng), vec!['A']);
    }

    #[test]
    fn order_varies_across_draws() {
        let pool = ['A', 'B', 'C', 'D'];
        let mut rng = StdRng::seed_from_u64(21);
        let first_positions: std::collections::HashSet<usize> = (0..40)
            .map(|_| {
                let opts = generate_options(&'A', &pool, 4, &mut rng);
                opts.iter().position(|o| *o == 'A').unwrap()
            })
            .collect();
        assert!(first_positions.len() > 1, "correct answer never moved");
    }
}
