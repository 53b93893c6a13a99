/// Session controller: the quiz state machine.
///
/// ```text
/// Idle → Countdown → RoundActive → { advance | RoundFailed }
///                         ↑              |            |
///                         └── next round ┘            └→ acknowledge →
///                              (or SessionWon)            RoundActive
/// ```
///
/// All mutation is funneled through the methods below; each runs to
/// completion against a single `now`, so the machine is race-free as long
/// as the host calls it from one thread (the frame loop). Events that
/// arrive in a phase that cannot accept them are dropped silently — a
/// selection landing a frame after the timeout fired must not resolve the
/// round twice.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::TimingConfig;
use crate::content::{self, messages};
use crate::domain::evaluate::{self, FailReason, Mode};
use crate::domain::round::{ContentError, FailMessage, Round};

use super::event::SessionEvent;
use super::timer::{RoundTimer, TimerHandle};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Countdown,
    RoundActive,
    RoundFailed,
    SessionWon,
}

/// What the failure cover needs to show, kept until acknowledged.
#[derive(Clone, Debug)]
pub struct FailureInfo {
    pub reason: FailReason,
    pub message: FailMessage,
    pub penalty: usize,
}

pub struct Session {
    tuning: TimingConfig,
    rng: StdRng,

    phase: Phase,
    mode: Mode,
    level_index: usize,

    // Hard-mode penalty alternation. Reset at start_session; one run's
    // failures must not change the next run's penalties.
    semi_penalty_armed: bool,
    pending_penalty: usize,

    round: Option<Round>,
    timer: RoundTimer,
    timer_handle: Option<TimerHandle>,

    countdown_value: u8,
    countdown_deadline: Option<Instant>,

    failure: Option<FailureInfo>,
}

impl Session {
    pub fn new(tuning: TimingConfig) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_rng(tuning: TimingConfig, rng: StdRng) -> Self {
        Session {
            tuning,
            rng,
            phase: Phase::Idle,
            mode: Mode::Easy,
            level_index: 0,
            semi_penalty_armed: false,
            pending_penalty: 0,
            round: None,
            timer: RoundTimer::new(),
            timer_handle: None,
            countdown_value: 0,
            countdown_deadline: None,
            failure: None,
        }
    }

    // ── Observers ──

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn total_levels(&self) -> usize {
        content::sequence(self.mode).len()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn failure(&self) -> Option<&FailureInfo> {
        self.failure.as_ref()
    }

    pub fn countdown_value(&self) -> u8 {
        self.countdown_value
    }

    pub fn remaining_ms(&self, now: Instant) -> u64 {
        self.timer.remaining_ms(now)
    }

    pub fn time_limit_ms(&self) -> u64 {
        match self.mode {
            Mode::Easy => self.tuning.easy_time_limit_ms,
            Mode::Hard => self.tuning.hard_time_limit_ms,
        }
    }

    // ── External surface ──

    /// Begin a run. Clears all progress and penalty state, then enters the
    /// pre-round countdown.
    pub fn start_session(&mut self, mode: Mode, now: Instant) -> Vec<SessionEvent> {
        self.cancel_timer();
        self.mode = mode;
        self.level_index = 0;
        self.semi_penalty_armed = false;
        self.pending_penalty = 0;
        self.round = None;
        self.failure = None;
        self.phase = Phase::Countdown;
        self.countdown_value = self.tuning.countdown_steps;
        self.countdown_deadline =
            Some(now + Duration::from_millis(self.tuning.countdown_step_ms));
        vec![SessionEvent::CountdownTick { value: self.countdown_value }]
    }

    /// Advance time-driven state: countdown steps and the round timeout.
    /// Call once per frame with the current instant.
    pub fn tick(&mut self, now: Instant) -> Result<Vec<SessionEvent>, ContentError> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Countdown => {
                while self.phase == Phase::Countdown {
                    let deadline = match self.countdown_deadline {
                        Some(d) if now >= d => d,
                        _ => break,
                    };
                    self.countdown_value -= 1;
                    if self.countdown_value == 0 {
                        self.countdown_deadline = None;
                        self.begin_round(now, &mut events)?;
                    } else {
                        events.push(SessionEvent::CountdownTick {
                            value: self.countdown_value,
                        });
                        self.countdown_deadline = Some(
                            deadline + Duration::from_millis(self.tuning.countdown_step_ms),
                        );
                    }
                }
            }
            Phase::RoundActive => {
                if self.timer.poll_timeout(now) {
                    self.timer_handle = None;
                    self.fail_round(FailReason::Timeout, &mut events);
                } else if self.timer.is_running() {
                    events.push(SessionEvent::TimerTick {
                        remaining_ms: self.timer.remaining_ms(now),
                    });
                }
            }
            _ => {}
        }
        Ok(events)
    }

    /// Player picked answer `index`. Valid only while a round is active;
    /// out-of-range or out-of-phase selections are dropped without effect.
    pub fn submit_selection(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<Vec<SessionEvent>, ContentError> {
        let mut events = Vec::new();
        if self.phase != Phase::RoundActive {
            return Ok(events);
        }
        let round = match &self.round {
            Some(r) => r,
            None => return Ok(events),
        };
        let verdict = match evaluate::evaluate(self.mode, index, round) {
            Some(v) => v,
            None => return Ok(events), // out of range: keep the round running
        };

        self.cancel_timer();

        if verdict.followed_instruction {
            self.level_index += 1;
            events.push(SessionEvent::LevelAdvanced { new_index: self.level_index });
            if self.level_index == self.total_levels() {
                self.round = None;
                self.phase = Phase::SessionWon;
                events.push(SessionEvent::SessionWon { mode: self.mode });
            } else {
                self.begin_round(now, &mut events)?;
            }
        } else {
            self.fail_round(
                FailReason::from_selection(verdict.selected_was_correct),
                &mut events,
            );
        }
        Ok(events)
    }

    /// Player dismissed the failure cover. Applies the pending rollback and
    /// restarts the (possibly earlier) round. Valid only in RoundFailed.
    pub fn acknowledge_failure(
        &mut self,
        now: Instant,
    ) -> Result<Vec<SessionEvent>, ContentError> {
        let mut events = Vec::new();
        if self.phase != Phase::RoundFailed {
            return Ok(events);
        }
        self.level_index -= self.pending_penalty;
        self.pending_penalty = 0;
        self.failure = None;
        self.begin_round(now, &mut events)?;
        Ok(events)
    }

    /// Return to the menu, discarding the run.
    pub fn abort(&mut self) {
        self.cancel_timer();
        self.round = None;
        self.failure = None;
        self.countdown_deadline = None;
        self.phase = Phase::Idle;
    }

    // ── Internals ──

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer_handle.take() {
            self.timer.cancel(handle);
        }
    }

    /// Generate, shuffle, validate, and arm the timer for the current
    /// level's round.
    fn begin_round(
        &mut self,
        now: Instant,
        events: &mut Vec<SessionEvent>,
    ) -> Result<(), ContentError> {
        let id = content::sequence(self.mode)[self.level_index];
        let mut round = id.generate(&mut self.rng);
        round.answers.shuffle(&mut self.rng);
        round.validate()?;

        let limit = Duration::from_millis(self.time_limit_ms());
        self.timer_handle = Some(self.timer.start(limit, now));
        self.phase = Phase::RoundActive;
        self.round = Some(round.clone());
        events.push(SessionEvent::RoundStarted {
            level_index: self.level_index,
            round,
            remaining_ms: limit.as_millis() as u64,
        });
        Ok(())
    }

    /// Resolve a violated round: compute the penalty, pick the feedback
    /// message, and wait for acknowledgment.
    ///
    /// Penalty alternation (Hard only, never on level 0): the first
    /// qualifying failure arms the flag without rollback, the next one
    /// rolls back one level and disarms, and so on — 0, 1, 0, 1, …
    fn fail_round(&mut self, reason: FailReason, events: &mut Vec<SessionEvent>) {
        let round = match self.round.clone() {
            Some(r) => r,
            None => return,
        };
        self.cancel_timer();

        let mut penalty = 0;
        if self.mode == Mode::Hard && self.level_index != 0 {
            if self.semi_penalty_armed {
                penalty = 1;
                self.semi_penalty_armed = false;
            } else {
                self.semi_penalty_armed = true;
            }
        }

        let message = messages::failure_message(&mut self.rng, reason, &round);
        self.pending_penalty = penalty;
        self.failure = Some(FailureInfo { reason, message: message.clone(), penalty });
        self.phase = Phase::RoundFailed;
        events.push(SessionEvent::RoundFailed { reason, message, penalty });
    }
}
