/// Input state tracker.
///
/// Drains all pending terminal events once per frame and exposes
/// edge-triggered presses. The quiz has no held-key actions, so only
/// Press events count — key repeat must not fire a second selection or
/// skip through the failure cover.

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub struct InputState {
    /// Key codes pressed during the most recent drain_events() call.
    pressed: Vec<KeyCode>,
    /// Raw key events collected during drain, for modifier checks.
    raw_events: Vec<KeyEvent>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            pressed: Vec::with_capacity(8),
            raw_events: Vec::with_capacity(8),
        }
    }

    /// Drain all available events without blocking.
    /// Call once per frame, before driving the session.
    pub fn drain_events(&mut self) {
        self.pressed.clear();
        self.raw_events.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press {
                    self.raw_events.push(key);
                    self.pressed.push(key.code);
                }
            }
        }
    }

    /// Was this key pressed this frame? (edge trigger)
    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Convenience: was any of these keys pressed?
    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    /// Digit row maps to answer slots: '1' → 0, '2' → 1, '3' → 2.
    pub fn answer_pressed(&self, max_answers: usize) -> Option<usize> {
        self.pressed.iter().find_map(|code| match code {
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (*c as usize) - ('1' as usize);
                (idx < max_answers).then_some(idx)
            }
            _ => None,
        })
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }
}
