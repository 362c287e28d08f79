use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a category by the remote trivia source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Board position `(category index, clue index)`.
///
/// The presentation layer addresses clues only through this pair, resolved
/// by the board itself.
pub type Slot = (usize, usize);
