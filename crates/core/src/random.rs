use rand::rngs::{StdRng, ThreadRng};
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Source of randomness for the generators.
///
/// Every draw the generators make goes through this trait so that tests and
/// reproducible runs can substitute a deterministic source.
pub trait RandomSource {
    /// Index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// `amount` distinct indices in `0..len`, in random order.
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize>;

    /// Uniform float in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Random permutation of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        self.sample(len, len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (**self).sample(len, amount)
    }

    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (**self).permutation(len)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }

    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

pub(crate) fn choose<'a, S: RandomSource + ?Sized>(rng: &mut S, items: &[&'a str]) -> &'a str {
    items[rng.pick(items.len())]
}
