use crate::*;
use alloc::vec::Vec;

pub use shuffle::*;

mod shuffle;

/// Strategy for picking which categories make up a round.
pub trait CategorySampler {
    /// Select exactly `k` distinct category ids from `pool`.
    ///
    /// Fails with [`BoardError::InsufficientPool`] when the pool is smaller
    /// than `k`. The pool is only borrowed, never retained.
    fn sample(self, pool: &[CategorySummary], k: usize) -> Result<Vec<CategoryId>>;
}
