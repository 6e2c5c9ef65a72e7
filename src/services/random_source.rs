// Randomness Source
// The humanizer draws all randomness through this trait so callers can seed or script it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;
    /// Uniform index in `0..len`; `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
    /// Up to `k` distinct indices from `0..len`, in draw order.
    fn sample_indices(&mut self, len: usize, k: usize) -> Vec<usize>;
}

/// Pick one item uniformly; `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.choose_index(items.len()))
}

/// Sample up to `k` items without replacement, in draw order.
pub fn sample<T: Copy>(rng: &mut dyn RandomSource, items: &[T], k: usize) -> Vec<T> {
    let k = k.min(items.len());
    if k == 0 {
        return Vec::new();
    }
    rng.sample_indices(items.len(), k)
        .into_iter()
        .filter_map(|i| items.get(i).copied())
        .collect()
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }

    fn sample_indices(&mut self, len: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, k.min(len)).into_vec()
    }
}

/// Fully deterministic source: uniforms come from a script (then `fallback`),
/// choices always take index 0 and samples take the first `k` indices.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedSource {
    pub fn new(uniforms: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            uniforms: uniforms.into_iter().collect(),
            fallback,
        }
    }

    /// Every probabilistic draw succeeds.
    pub fn always() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Every probabilistic draw fails.
    pub fn never() -> Self {
        Self::new(Vec::new(), 0.999_999)
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(self.fallback)
    }

    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }

    fn sample_indices(&mut self, len: usize, k: usize) -> Vec<usize> {
        (0..k.min(len)).collect()
    }
}
