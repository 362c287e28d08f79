use crate::*;

/// Identifies one round attempt.
///
/// Build results are tagged with the token of the round that started them;
/// the controller discards results carrying a stale token instead of merging
/// them into a newer round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundToken(u64);

/// Owns the board across the round lifecycle.
///
/// A round begins by discarding the previous board, so a failed or
/// superseded build never leaves a half-filled grid behind.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundController {
    config: BoardConfig,
    board: Option<Board>,
    epoch: u64,
}

impl RoundController {
    pub const fn new(config: BoardConfig) -> Self {
        Self {
            config,
            board: None,
            epoch: 0,
        }
    }

    pub const fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Discard the current board and start a new round attempt.
    pub fn begin_round(&mut self) -> RoundToken {
        self.board = None;
        self.epoch += 1;
        log::debug!("round {} started", self.epoch);
        RoundToken(self.epoch)
    }

    /// Discard the current board and invalidate outstanding tokens.
    pub fn reset_round(&mut self) {
        self.board = None;
        self.epoch += 1;
        log::debug!("round reset");
    }

    /// Whether `token` still belongs to the current round attempt.
    pub const fn is_current(&self, token: RoundToken) -> bool {
        token.0 == self.epoch
    }

    /// Install a built board. Returns `false` when `token` belongs to a
    /// superseded round, in which case the board is dropped.
    pub fn install_board(&mut self, token: RoundToken, board: Board) -> bool {
        if !self.is_current(token) {
            log::debug!("discarding stale board for round {}", token.0);
            return false;
        }
        self.board = Some(board);
        true
    }

    /// Advance the reveal state of the clue at `slot` on the installed board.
    pub fn activate(&mut self, slot: Slot) -> Result<(RevealState, ActivateOutcome)> {
        let board = self.board.as_mut().ok_or(BoardError::NoBoard)?;
        board.activate(slot)
    }
}

/// One full round build: list the pool, sample ids, fetch and assemble.
///
/// This is the `start round` entry point; callers pair it with a token from
/// [`RoundController::begin_round`] and feed the result back through
/// [`RoundController::install_board`].
pub async fn run_round<S, G>(config: BoardConfig, source: &S, sampler: G) -> Result<Board>
where
    S: TriviaSource,
    G: CategorySampler,
{
    let pool = source
        .list_category_pool(config.pool_size)
        .await
        .map_err(|err| BoardError::PoolFetch { reason: err.0 })?;
    let ids = sampler.sample(&pool, config.categories)?;
    BoardBuilder::new(config).build(source, &ids).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use futures_executor::block_on;

    struct FixedSource {
        clue_count: usize,
    }

    impl TriviaSource for FixedSource {
        async fn list_category_pool(
            &self,
            sample_size: usize,
        ) -> core::result::Result<Vec<CategorySummary>, SourceError> {
            Ok((0..sample_size as u32)
                .map(|n| CategorySummary { id: CategoryId(n) })
                .collect())
        }

        async fn fetch_category(
            &self,
            id: CategoryId,
        ) -> core::result::Result<RawCategory, SourceError> {
            let clues = (0..self.clue_count)
                .map(|n| RawClue {
                    question: format!("q{}-{}", id, n),
                    answer: format!("a{}-{}", id, n),
                })
                .collect();
            Ok(RawCategory {
                title: format!("category {id}"),
                clues,
            })
        }
    }

    fn built_board(clue_count: usize) -> Board {
        let source = FixedSource { clue_count };
        block_on(run_round(
            BoardConfig::default(),
            &source,
            ShuffleSampler::new(1),
        ))
        .unwrap()
    }

    #[test]
    fn run_round_builds_a_full_board() {
        let board = built_board(5);

        assert_eq!(board.category_count(), 6);
        assert_eq!(board.clues_per_category(), 5);
    }

    #[test]
    fn run_round_surfaces_short_categories() {
        let source = FixedSource { clue_count: 3 };

        let err = block_on(run_round(
            BoardConfig::default(),
            &source,
            ShuffleSampler::new(1),
        ))
        .unwrap_err();

        assert!(matches!(err, BoardError::ShortCategory { need: 5, .. }));
    }

    #[test]
    fn begin_round_discards_the_previous_board() {
        let mut controller = RoundController::new(BoardConfig::default());
        let token = controller.begin_round();
        assert!(controller.install_board(token, built_board(5)));
        assert!(controller.board().is_some());

        controller.begin_round();

        assert!(controller.board().is_none());
    }

    #[test]
    fn stale_build_results_are_discarded() {
        let mut controller = RoundController::new(BoardConfig::default());
        let stale = controller.begin_round();
        let current = controller.begin_round();

        assert!(!controller.install_board(stale, built_board(5)));
        assert!(controller.board().is_none());
        assert!(!controller.is_current(stale));

        assert!(controller.install_board(current, built_board(5)));
        assert!(controller.board().is_some());
    }

    #[test]
    fn reset_round_invalidates_outstanding_tokens() {
        let mut controller = RoundController::new(BoardConfig::default());
        let token = controller.begin_round();

        controller.reset_round();

        assert!(!controller.install_board(token, built_board(5)));
        assert!(controller.board().is_none());
    }

    #[test]
    fn activate_without_a_board_is_rejected() {
        let mut controller = RoundController::new(BoardConfig::default());

        assert_eq!(controller.activate((0, 0)), Err(BoardError::NoBoard));
    }

    #[test]
    fn activate_delegates_to_the_installed_board() {
        let mut controller = RoundController::new(BoardConfig::default());
        let token = controller.begin_round();
        controller.install_board(token, built_board(5));

        let (state, outcome) = controller.activate((2, 3)).unwrap();

        assert_eq!(state, RevealState::ShowingQuestion);
        assert!(outcome.has_update());
    }
}
