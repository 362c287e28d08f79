#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use builder::*;
pub use clue::*;
pub use error::*;
pub use round::*;
pub use sampler::*;
pub use source::*;
pub use types::*;

mod builder;
mod clue;
mod error;
mod round;
mod sampler;
mod source;
mod types;

/// Shape of one round: how many categories, how many clues each, and how
/// many pool candidates to request from the remote source before sampling.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: usize,
    pub clues_per_category: usize,
    pub pool_size: usize,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(
        categories: usize,
        clues_per_category: usize,
        pool_size: usize,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            pool_size,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize, pool_size: usize) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        if pool_size < categories {
            log::warn!(
                "pool size {} smaller than {} categories, clamped",
                pool_size,
                categories
            );
        }
        let pool_size = pool_size.max(categories);
        Self::new_unchecked(categories, clues_per_category, pool_size)
    }
}

impl Default for BoardConfig {
    /// Classic 6 categories x 5 clues, sampled from a pool of 100.
    fn default() -> Self {
        Self::new_unchecked(6, 5, 100)
    }
}

/// A named group of clues shown as one column.
///
/// Title and clue membership are fixed at build time; only the clues'
/// reveal states change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub(crate) fn new(title: String, clues: Vec<Clue>) -> Self {
        Self { title, clues }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The full set of categories for one round.
///
/// Built once by [`BoardBuilder`], discarded wholesale on restart. The only
/// mutation it allows is advancing a clue's reveal state through
/// [`Board::activate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub(crate) fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn clues_per_category(&self) -> usize {
        self.categories
            .first()
            .map_or(0, |category| category.clues.len())
    }

    pub fn clue_at(&self, (col, row): Slot) -> Option<&Clue> {
        self.categories.get(col)?.clues.get(row)
    }

    /// Advance the reveal state of the clue at `slot`, returning the new
    /// state and whether anything changed. Out-of-range slots are rejected;
    /// no other clue is ever touched.
    pub fn activate(&mut self, (col, row): Slot) -> Result<(RevealState, ActivateOutcome)> {
        let clue = self
            .categories
            .get_mut(col)
            .and_then(|category| category.clues.get_mut(row))
            .ok_or(BoardError::InvalidSlot)?;
        let before = clue.reveal();
        let after = clue.activate();
        Ok((after, ActivateOutcome::from_transition(before, after)))
    }
}
