/// Entry point and frame loop.

mod config;
mod content;
mod domain;
mod quiz;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::GameConfig;
use domain::evaluate::{FailReason, Mode};
use quiz::event::SessionEvent;
use quiz::session::{Phase, Session};
use ui::input::InputState;
use ui::renderer::Renderer;
use ui::sound::SoundEngine;

fn main() {
    let config = GameConfig::load();

    let mut session = Session::new(config.timing.clone());
    let mut renderer = Renderer::new();

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let sound = if config.sound_enabled {
        SoundEngine::new()
    } else {
        None
    };

    let result = game_loop(&mut session, &mut renderer, sound.as_ref(), &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("ขอบคุณที่เล่น ตอบผิด!");
}

// ── Key Constants ──

const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];
const KEYS_HARD: &[KeyCode] = &[KeyCode::Char('h'), KeyCode::Char('H')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q')];

fn game_loop(
    session: &mut Session,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let frame_sleep = Duration::from_millis(config.frame_sleep_ms);

    // Mode toggle shown on the menu; becomes the session mode at start.
    let mut menu_hard = false;

    loop {
        kb.drain_events();
        let now = Instant::now();

        if kb.ctrl_c_pressed() {
            break;
        }

        let mut events = Vec::new();

        match session.phase() {
            Phase::Idle => {
                if kb.any_pressed(KEYS_QUIT) || kb.was_pressed(KeyCode::Esc) {
                    break;
                }
                if kb.any_pressed(KEYS_HARD) {
                    menu_hard = !menu_hard;
                }
                if kb.any_pressed(KEYS_CONFIRM) {
                    let mode = if menu_hard { Mode::Hard } else { Mode::Easy };
                    events.extend(session.start_session(mode, now));
                }
            }
            Phase::Countdown => {
                if kb.was_pressed(KeyCode::Esc) {
                    session.abort();
                }
            }
            Phase::RoundActive => {
                if kb.was_pressed(KeyCode::Esc) {
                    session.abort();
                } else {
                    let answers = session.round().map_or(0, |r| r.answers.len());
                    if let Some(idx) = kb.answer_pressed(answers) {
                        events.extend(session.submit_selection(idx, now)?);
                    }
                }
            }
            Phase::RoundFailed => {
                if kb.was_pressed(KeyCode::Esc) {
                    session.abort();
                } else if kb.any_pressed(KEYS_CONFIRM) {
                    events.extend(session.acknowledge_failure(now)?);
                }
            }
            Phase::SessionWon => {
                if kb.any_pressed(KEYS_CONFIRM) || kb.was_pressed(KeyCode::Esc) {
                    session.abort();
                }
            }
        }

        events.extend(session.tick(now)?);
        process_sound_events(sound, &events, config.timing.countdown_steps);

        renderer.render(session, menu_hard, Instant::now())?;
        std::thread::sleep(frame_sleep);
    }

    Ok(())
}

fn process_sound_events(
    sound: Option<&SoundEngine>,
    events: &[SessionEvent],
    countdown_steps: u8,
) {
    let sfx = match sound {
        Some(s) => s,
        None => return,
    };
    for event in events {
        match event {
            SessionEvent::CountdownTick { value } => {
                sfx.play_countdown_blip(*value, countdown_steps)
            }
            SessionEvent::LevelAdvanced { .. } => sfx.play_advance(),
            SessionEvent::RoundFailed { reason, .. } => match reason {
                FailReason::Timeout => sfx.play_timeout(),
                _ => sfx.play_fail(),
            },
            SessionEvent::SessionWon { .. } => sfx.play_win(),
            _ => {}
        }
    }
}
