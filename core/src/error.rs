use crate::CategoryId;
use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("pool has {available} categories, cannot sample {requested}")]
    InsufficientPool { available: usize, requested: usize },
    #[error("category pool could not be fetched: {reason}")]
    PoolFetch { reason: String },
    #[error("category {id} could not be fetched: {reason}")]
    Fetch { id: CategoryId, reason: String },
    #[error("category {id} returned {got} clues, need {need}")]
    ShortCategory { id: CategoryId, got: usize, need: usize },
    #[error("no board is installed for the current round")]
    NoBoard,
    #[error("slot out of range")]
    InvalidSlot,
}

impl BoardError {
    /// The category that made the round build fail, if any.
    pub fn failing_category(&self) -> Option<CategoryId> {
        match self {
            Self::Fetch { id, .. } | Self::ShortCategory { id, .. } => Some(*id),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, BoardError>;
