use crate::CategoryId;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;
use thiserror::Error;

/// One candidate from the remote pool listing.
///
/// The listing carries more metadata than this; only the id matters for
/// sampling and unknown fields are ignored on deserialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawClue {
    pub question: String,
    pub answer: String,
}

/// Payload of a single-category fetch, before normalization into a
/// [`Category`](crate::Category).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawCategory {
    pub title: String,
    pub clues: Vec<RawClue>,
}

/// Transport-level failure reported by a [`TriviaSource`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SourceError(pub String);

impl SourceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Read-only remote trivia source.
///
/// Implementations live outside this crate (the web app talks HTTP, tests
/// use an in-memory mock). Transient failures propagate to the caller;
/// retrying is not a core concern.
pub trait TriviaSource {
    /// List at least `sample_size` candidate categories, metadata only.
    async fn list_category_pool(
        &self,
        sample_size: usize,
    ) -> core::result::Result<Vec<CategorySummary>, SourceError>;

    /// Fetch the full data for one category.
    async fn fetch_category(
        &self,
        id: CategoryId,
    ) -> core::result::Result<RawCategory, SourceError>;
}
