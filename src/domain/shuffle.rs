//! Permutation strategies for the initial domain ordering.
//!
//! The list is shuffled once per session so no ordering reads as a ranking.
//! The strategy is passed into [`DomainBrowser::initialize`] rather than pulled
//! from ambient state, which keeps initialization deterministic under test.
//!
//! [`DomainBrowser::initialize`]: super::browser::DomainBrowser::initialize

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Produces a permutation of the domain list in place.
///
/// Implementations must keep every element exactly once.
pub trait Shuffler {
    /// Permutes `domains` in place.
    fn shuffle(&mut self, domains: &mut [String]);
}

impl<F> Shuffler for F
where
    F: FnMut(&mut [String]),
{
    fn shuffle(&mut self, domains: &mut [String]) {
        self(domains);
    }
}

/// Uniform Fisher-Yates shuffle driven by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomShuffler<R> {
    rng: R,
}

impl<R: Rng> RandomShuffler<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShuffler<ThreadRng> {
    /// A shuffler seeded from the operating system, independent across sessions.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, domains: &mut [String]) {
        SliceRandom::shuffle(domains, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("app-{i}.vercel.app")).collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn random_shuffle_is_a_permutation() {
        let original = sample(1_000);
        let mut shuffled = original.clone();
        RandomShuffler::new(StdRng::seed_from_u64(7)).shuffle(&mut shuffled);

        assert_eq!(shuffled.len(), original.len());
        assert_eq!(sorted(shuffled.clone()), sorted(original.clone()));
        assert_ne!(shuffled, original);
    }

    #[test]
    fn permutation_keeps_duplicates() {
        let original = vec!["a".to_string(), "a".to_string(), "b".to_string()];
        let mut shuffled = original.clone();
        RandomShuffler::new(StdRng::seed_from_u64(1)).shuffle(&mut shuffled);
        assert_eq!(sorted(shuffled), sorted(original));
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a = sample(100);
        let mut b = sample(100);
        RandomShuffler::new(StdRng::seed_from_u64(42)).shuffle(&mut a);
        RandomShuffler::new(StdRng::seed_from_u64(42)).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn closures_are_shufflers() {
        let mut domains = sample(3);
        let mut reverse = |d: &mut [String]| d.reverse();
        reverse.shuffle(&mut domains);
        assert_eq!(domains[0], "app-2.vercel.app");
    }
}
