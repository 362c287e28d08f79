use crate::*;
use futures_util::future::try_join_all;

/// Fetches sampled categories and assembles them into a [`Board`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardBuilder {
    config: BoardConfig,
}

impl BoardBuilder {
    pub const fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Fetch every category in `ids` and build the board.
    ///
    /// Fetches run concurrently, but the resulting category order always
    /// matches the order of `ids` regardless of completion order. The first
    /// failure aborts the whole build; no partial board is ever returned.
    pub async fn build<S: TriviaSource>(&self, source: &S, ids: &[CategoryId]) -> Result<Board> {
        let categories =
            try_join_all(ids.iter().map(|&id| self.fetch_category(source, id))).await?;
        log::debug!("board built with {} categories", categories.len());
        Ok(Board::from_categories(categories))
    }

    async fn fetch_category<S: TriviaSource>(&self, source: &S, id: CategoryId) -> Result<Category> {
        let raw = source
            .fetch_category(id)
            .await
            .map_err(|err| BoardError::Fetch { id, reason: err.0 })?;
        self.normalize(id, raw)
    }

    /// Turn a raw payload into a category of exactly `clues_per_category`
    /// hidden clues. Extra clues are dropped, too few is a build failure.
    fn normalize(&self, id: CategoryId, raw: RawCategory) -> Result<Category> {
        let need = self.config.clues_per_category;
        if raw.clues.len() < need {
            return Err(BoardError::ShortCategory {
                id,
                got: raw.clues.len(),
                need,
            });
        }
        let clues = raw
            .clues
            .into_iter()
            .take(need)
            .map(|clue| Clue::new(clue.question, clue.answer))
            .collect();
        Ok(Category::new(raw.title, clues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use futures_executor::block_on;
    use std::collections::{BTreeSet, HashMap};

    struct MockSource {
        categories: HashMap<CategoryId, RawCategory>,
        failing: BTreeSet<CategoryId>,
    }

    impl MockSource {
        fn with_uniform_categories(ids: &[CategoryId], clue_count: usize) -> Self {
            let categories = ids
                .iter()
                .map(|&id| {
                    let clues = (0..clue_count)
                        .map(|n| RawClue {
                            question: format!("q{}-{}", id, n),
                            answer: format!("a{}-{}", id, n),
                        })
                        .collect();
                    let raw = RawCategory {
                        title: format!("category {id}"),
                        clues,
                    };
                    (id, raw)
                })
                .collect();
            Self {
                categories,
                failing: BTreeSet::new(),
            }
        }

        fn failing_on(mut self, id: CategoryId) -> Self {
            self.failing.insert(id);
            self
        }
    }

    impl TriviaSource for MockSource {
        async fn list_category_pool(
            &self,
            sample_size: usize,
        ) -> core::result::Result<Vec<CategorySummary>, SourceError> {
            let mut pool: Vec<_> = self
                .categories
                .keys()
                .map(|&id| CategorySummary { id })
                .collect();
            pool.sort_by_key(|summary| summary.id);
            pool.truncate(sample_size);
            Ok(pool)
        }

        async fn fetch_category(
            &self,
            id: CategoryId,
        ) -> core::result::Result<RawCategory, SourceError> {
            if self.failing.contains(&id) {
                return Err(SourceError::new("connection reset"));
            }
            self.categories
                .get(&id)
                .cloned()
                .ok_or_else(|| SourceError::new(format!("unknown category {id}")))
        }
    }

    fn ids(raw: &[u32]) -> Vec<CategoryId> {
        raw.iter().copied().map(CategoryId).collect()
    }

    #[test]
    fn build_preserves_input_id_order() {
        let ids = ids(&[9, 2, 31, 4, 17, 5]);
        let source = MockSource::with_uniform_categories(&ids, 5);
        let builder = BoardBuilder::new(BoardConfig::default());

        let board = block_on(builder.build(&source, &ids)).unwrap();

        let titles: Vec<_> = board
            .categories()
            .iter()
            .map(|category| category.title().to_string())
            .collect();
        let expected: Vec<_> = ids.iter().map(|id| format!("category {id}")).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn build_seeds_every_clue_hidden() {
        let ids = ids(&[1, 2, 3, 4, 5, 6]);
        let source = MockSource::with_uniform_categories(&ids, 5);
        let builder = BoardBuilder::new(BoardConfig::default());

        let board = block_on(builder.build(&source, &ids)).unwrap();

        assert_eq!(board.category_count(), 6);
        for category in board.categories() {
            assert_eq!(category.clues().len(), 5);
            for clue in category.clues() {
                assert_eq!(clue.reveal(), RevealState::Hidden);
            }
        }
    }

    #[test]
    fn build_truncates_oversized_clue_lists() {
        let ids = ids(&[1]);
        let source = MockSource::with_uniform_categories(&ids, 9);
        let config = BoardConfig::new(1, 5, 100);

        let board = block_on(BoardBuilder::new(config).build(&source, &ids)).unwrap();

        assert_eq!(board.categories()[0].clues().len(), 5);
    }

    #[test]
    fn failed_fetch_aborts_the_whole_build() {
        let ids = ids(&[1, 2, 3, 4, 5, 6]);
        let source = MockSource::with_uniform_categories(&ids, 5).failing_on(CategoryId(4));
        let builder = BoardBuilder::new(BoardConfig::default());

        let err = block_on(builder.build(&source, &ids)).unwrap_err();

        // the 4th id is the one that failed
        assert_eq!(err.failing_category(), Some(ids[3]));
        assert!(matches!(err, BoardError::Fetch { .. }));
    }

    #[test]
    fn short_category_aborts_the_whole_build() {
        let ids = ids(&[1, 2, 3]);
        let mut source = MockSource::with_uniform_categories(&ids, 5);
        source
            .categories
            .get_mut(&CategoryId(2))
            .unwrap()
            .clues
            .truncate(3);
        let config = BoardConfig::new(3, 5, 100);

        let err = block_on(BoardBuilder::new(config).build(&source, &ids)).unwrap_err();

        assert_eq!(
            err,
            BoardError::ShortCategory {
                id: CategoryId(2),
                got: 3,
                need: 5,
            }
        );
    }
}
