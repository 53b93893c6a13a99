/// Events emitted by the session controller.
/// The presentation layer consumes these for sound and feedback; tests
/// assert on them directly.

use crate::domain::evaluate::{FailReason, Mode};
use crate::domain::round::{FailMessage, Round};

#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// Pre-round countdown step (3, 2, 1).
    CountdownTick { value: u8 },
    /// A round is now accepting selections.
    RoundStarted { level_index: usize, round: Round, remaining_ms: u64 },
    /// Periodic countdown sample for progress-bar rendering.
    TimerTick { remaining_ms: u64 },
    /// The player followed the instruction.
    LevelAdvanced { new_index: usize },
    /// The round was violated (wrong pick for the mode, or timeout).
    RoundFailed { reason: FailReason, message: FailMessage, penalty: usize },
    /// Terminal state: the whole sequence was cleared.
    SessionWon { mode: Mode },
}
