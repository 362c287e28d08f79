use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Reveal lifecycle of a single clue.
///
/// Valid transitions:
/// - Hidden -> ShowingQuestion
/// - ShowingQuestion -> ShowingAnswer
/// - ShowingAnswer -> ShowingAnswer (terminal no-op)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    /// Initial state, the cell shows a placeholder
    Hidden,
    /// The question text is visible
    ShowingQuestion,
    /// The answer text is visible, no further transitions happen
    ShowingAnswer,
}

impl RevealState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ShowingAnswer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Outcome of activating a clue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActivateOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
}

impl ActivateOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::QuestionShown => true,
            Self::AnswerShown => true,
        }
    }

    pub(crate) const fn from_transition(before: RevealState, after: RevealState) -> Self {
        use RevealState::*;
        match (before, after) {
            (Hidden, ShowingQuestion) => Self::QuestionShown,
            (ShowingQuestion, ShowingAnswer) => Self::AnswerShown,
            _ => Self::NoChange,
        }
    }
}

/// A single question/answer pair with an independent reveal state.
///
/// Question and answer text never change after construction; the reveal
/// state advances only through [`Clue::activate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal: RevealState,
}

impl Clue {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            reveal: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    /// Advance the reveal state by one step, returning the new state.
    ///
    /// Activation after `ShowingAnswer` is a safe no-op, never an error.
    pub fn activate(&mut self) -> RevealState {
        use RevealState::*;
        self.reveal = match self.reveal {
            Hidden => ShowingQuestion,
            ShowingQuestion => ShowingAnswer,
            ShowingAnswer => ShowingAnswer,
        };
        self.reveal
    }
}
