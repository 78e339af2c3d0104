use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform random indexes, injected wherever balancing needs randomness.
pub trait RandomSource {
    /// Uniform index in `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

impl RandomSource for StdRng {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Fisher–Yates shuffle, walking from the last element down to the second.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_up_to(i);
        items.swap(i, j);
    }
}

/// Replays fixed swap targets; once exhausted every draw is `upper`, which is a no-op swap.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    draws: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    /// Shuffle leaves the order untouched.
    pub fn identity() -> Self {
        ScriptedSource::default()
    }

    pub fn with_draws(draws: &[usize]) -> Self {
        ScriptedSource {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.draws.pop_front().map(|d| d.min(upper)).unwrap_or(upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_identity_source_keeps_order() {
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &mut ScriptedSource::identity());

        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scripted_swaps() {
        // i=3 swaps with 0, i=2 with 2, i=1 with 0
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut ScriptedSource::with_draws(&[0, 2, 0]));

        assert_eq!(items, vec!['b', 'd', 'c', 'a']);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible_permutation() {
        let mut first: Vec<u32> = (0..20).collect();
        let mut second: Vec<u32> = (0..20).collect();

        shuffle(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle(&mut second, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_short_slices() {
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut ScriptedSource::identity());
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut ScriptedSource::with_draws(&[5]));
        assert_eq!(single, vec![9]);
    }
}
