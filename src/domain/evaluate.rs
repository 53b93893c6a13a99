/// Mode-aware answer evaluation.
///
/// The twist of the game: Easy mode rewards picking a correct answer, Hard
/// mode rewards picking an incorrect one. The evaluator is a pure function
/// over (mode, selection, round) — no session state, no randomness.

use super::round::Round;

/// Session mode, fixed for the whole run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Easy,
    Hard,
}

impl Mode {
    /// Which answer labeling the player is instructed to pick.
    #[inline]
    pub fn wants_correct(self) -> bool {
        self == Mode::Easy
    }
}

/// Outcome of evaluating one selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Verdict {
    pub followed_instruction: bool,
    pub selected_was_correct: bool,
}

/// Why a round failed. Named after what the player actually did, not
/// whether they "won" — picking a correct answer in Hard mode is itself
/// the failure, and each reason has its own feedback message pool.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FailReason {
    Incorrect,
    Correct,
    Timeout,
}

impl FailReason {
    pub fn from_selection(selected_was_correct: bool) -> Self {
        if selected_was_correct { FailReason::Correct } else { FailReason::Incorrect }
    }
}

/// Evaluate a selection against the mode's instruction.
/// Returns None for an out-of-range index; the caller drops those silently.
pub fn evaluate(mode: Mode, selection: usize, round: &Round) -> Option<Verdict> {
    let answer = round.answers.get(selection)?;
    Some(Verdict {
        followed_instruction: answer.correct == mode.wants_correct(),
        selected_was_correct: answer.correct,
    })
}
