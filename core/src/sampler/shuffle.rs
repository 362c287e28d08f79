use super::*;
use alloc::vec::Vec;

/// Uniform sampling without replacement: partially Fisher-Yates-shuffles the
/// pool with a seeded RNG and keeps the first `k` entries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffleSampler {
    seed: u64,
}

impl ShuffleSampler {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CategorySampler for ShuffleSampler {
    fn sample(self, pool: &[CategorySummary], k: usize) -> Result<Vec<CategoryId>> {
        use rand::prelude::*;

        if pool.len() < k {
            return Err(BoardError::InsufficientPool {
                available: pool.len(),
                requested: k,
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut ids: Vec<CategoryId> = pool.iter().map(|summary| summary.id).collect();
        let (sampled, _rest) = ids.partial_shuffle(&mut rng, k);
        log::debug!("sampled {} of {} pool categories", k, pool.len());
        Ok(sampled.to_vec())
    }
}
