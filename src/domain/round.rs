/// Round: one question-and-answers unit, generated fresh for each level.
///
/// A round is ephemeral. The session controller owns it for the duration of
/// one level and throws it away on advance or restart — nothing here is
/// persisted or shared.

use thiserror::Error;

/// One candidate answer. `correct` is the factual labeling; whether picking
/// it is the *right move* depends on the session mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub correct: bool,
    pub label: String,
}

impl Answer {
    pub fn new(correct: bool, label: impl Into<String>) -> Self {
        Answer { correct, label: label.into() }
    }
}

/// Two display lines shown on the failure cover.
pub type FailMessage = (String, String);

#[derive(Clone, Debug)]
pub struct Round {
    /// Question text. May contain '\n' for multi-line questions.
    pub question: String,
    /// Presentation order. Generators emit these in an arbitrary fixed
    /// order; the controller shuffles before display.
    pub answers: Vec<Answer>,
    /// Custom failure message, overriding the pool (except on timeout).
    pub fail_message: Option<FailMessage>,
}

impl Round {
    pub fn new(question: impl Into<String>, answers: Vec<Answer>) -> Self {
        Round { question: question.into(), answers, fail_message: None }
    }

    pub fn with_message(mut self, line0: impl Into<String>, line1: impl Into<String>) -> Self {
        self.fail_message = Some((line0.into(), line1.into()));
        self
    }

    /// Reject malformed content before it reaches the screen.
    ///
    /// A round that can't be both followed and violated is a content
    /// authoring defect, not a recoverable play-time condition.
    pub fn validate(&self) -> Result<(), ContentError> {
        if !self.answers.iter().any(|a| a.correct) {
            return Err(ContentError::NoCorrectAnswer { question: self.question.clone() });
        }
        if !self.answers.iter().any(|a| !a.correct) {
            return Err(ContentError::NoIncorrectAnswer { question: self.question.clone() });
        }
        if self.answers.iter().any(|a| a.label.trim().is_empty()) {
            return Err(ContentError::EmptyLabel { question: self.question.clone() });
        }
        Ok(())
    }
}

/// Fatal content-authoring defects. The catalog is static, so these should
/// only ever surface from the content test suite, never mid-game.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("round has no correct answer (question: {question:?})")]
    NoCorrectAnswer { question: String },
    #[error("round has no incorrect answer (question: {question:?})")]
    NoIncorrectAnswer { question: String },
    #[error("round has an empty answer label (question: {question:?})")]
    EmptyLabel { question: String },
}
