/// Presentation layer: double-buffered, line-diff terminal renderer.
///
/// How it works:
///   1. Compose the next frame as a list of styled lines
///   2. Compare each line with the previous frame's line
///   3. Only redraw rows that changed (the timer bar redraws every frame,
///      everything else stays put)
///   4. All commands are batched with `queue!`, flushed once at the end
///
/// Diffing happens at line granularity rather than per cell: Thai text
/// mixes combining vowel/tone marks into the stream, and per-cell width
/// bookkeeping for those is not worth the trouble for a screen this
/// static.

use std::io::{self, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::domain::evaluate::{FailReason, Mode};
use crate::quiz::session::{Phase, Session};
use std::time::Instant;

const BAR_WIDTH: usize = 40;

// ── Line: the unit of the back-buffer ──

#[derive(Clone, PartialEq, Eq)]
struct Line {
    text: String,
    fg: Color,
    bold: bool,
}

impl Line {
    fn blank() -> Self {
        Line { text: String::new(), fg: Color::Reset, bold: false }
    }

    fn plain(text: impl Into<String>) -> Self {
        Line { text: text.into(), fg: Color::Reset, bold: false }
    }

    fn colored(text: impl Into<String>, fg: Color) -> Self {
        Line { text: text.into(), fg, bold: false }
    }

    fn strong(text: impl Into<String>, fg: Color) -> Self {
        Line { text: text.into(), fg, bold: true }
    }
}

/// Terminal columns a string occupies, approximately: Thai combining
/// vowel and tone marks take no column of their own.
fn display_width(s: &str) -> usize {
    s.chars().filter(|&c| !is_thai_combining(c)).count()
}

fn is_thai_combining(c: char) -> bool {
    matches!(c,
        '\u{0E31}' | '\u{0E34}'..='\u{0E3A}' | '\u{0E47}'..='\u{0E4E}')
}

// ── Renderer ──

pub struct Renderer {
    back: Vec<Line>,
    width: u16,
    height: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { back: Vec::new(), width: 0, height: 0 }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All),
        )
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    pub fn render(
        &mut self,
        session: &Session,
        menu_hard: bool,
        now: Instant,
    ) -> io::Result<()> {
        let (w, h) = terminal::size()?;
        let mut out = io::stdout();

        // Resize invalidates the whole back buffer.
        if (w, h) != (self.width, self.height) {
            self.width = w;
            self.height = h;
            self.back.clear();
            queue!(out, Clear(ClearType::All))?;
        }

        let lines = self.compose(session, menu_hard, now);

        let rows = lines.len().max(self.back.len()).min(h as usize);
        for row in 0..rows {
            let next = lines.get(row).cloned().unwrap_or_else(Line::blank);
            if self.back.get(row) == Some(&next) {
                continue;
            }
            queue!(out, MoveTo(0, row as u16), Clear(ClearType::CurrentLine))?;
            if !next.text.is_empty() {
                // Center each line; Thai widths are approximate, which is
                // fine at this text density.
                let pad = (w as usize).saturating_sub(display_width(&next.text)) / 2;
                queue!(out, MoveTo(pad as u16, row as u16), SetForegroundColor(next.fg))?;
                if next.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, Print(&next.text), SetAttribute(Attribute::Reset), ResetColor)?;
            }
            if self.back.len() <= row {
                self.back.resize(row + 1, Line::blank());
            }
            self.back[row] = next;
        }
        self.back.truncate(rows);

        out.flush()
    }

    // ── Frame composition ──

    fn compose(&self, session: &Session, menu_hard: bool, now: Instant) -> Vec<Line> {
        match session.phase() {
            Phase::Idle => compose_menu(menu_hard),
            Phase::Countdown => compose_countdown(session.countdown_value()),
            Phase::RoundActive => compose_round(session, now),
            Phase::RoundFailed => compose_failure(session),
            Phase::SessionWon => compose_win(session.mode()),
        }
    }
}

fn compose_menu(hard: bool) -> Vec<Line> {
    let mut lines = vec![
        Line::blank(),
        Line::strong("ต อ บ ผิ ด", Color::Yellow),
        Line::colored("เกมทายปัญหาตอบกลับ", Color::DarkYellow),
        Line::blank(),
    ];
    if hard {
        lines.push(Line::colored("โหมดยาก: จงเลือกคำตอบที่ผิด", Color::Red));
        lines.push(Line::plain("27 ข้อ ข้อละ 2 วินาที มีบทลงโทษ"));
    } else {
        lines.push(Line::colored("โหมดง่าย: จงเลือกคำตอบที่ถูก", Color::Green));
        lines.push(Line::plain("20 ข้อ ข้อละ 3 วินาที"));
    }
    lines.push(Line::blank());
    lines.push(Line::plain("[Enter] เริ่มเกม"));
    lines.push(Line::plain(format!(
        "[H] สลับโหมดยาก ({})",
        if hard { "เปิด" } else { "ปิด" }
    )));
    lines.push(Line::plain("[Q] ออก"));
    lines
}

fn compose_countdown(value: u8) -> Vec<Line> {
    vec![
        Line::blank(),
        Line::blank(),
        Line::blank(),
        Line::strong(format!("{}", value), Color::Yellow),
        Line::blank(),
        Line::colored("เตรียมตัว...", Color::DarkGrey),
    ]
}

fn compose_round(session: &Session, now: Instant) -> Vec<Line> {
    let mut lines = Vec::new();

    let total = session.total_levels();
    lines.push(Line::colored(
        format!("ข้อ {} / {}", session.level_index() + 1, total),
        Color::DarkGrey,
    ));
    let instruction = match session.mode() {
        Mode::Easy => Line::colored("จงเลือกคำตอบที่ถูก", Color::Green),
        Mode::Hard => Line::colored("จงเลือกคำตอบที่ผิด", Color::Red),
    };
    lines.push(instruction);
    lines.push(timer_bar(session, now));
    lines.push(Line::blank());

    if let Some(round) = session.round() {
        for part in round.question.split('\n') {
            lines.push(Line::strong(part, Color::White));
        }
        lines.push(Line::blank());
        for (i, answer) in round.answers.iter().enumerate() {
            lines.push(Line::plain(format!("[{}]  {}", i + 1, answer.label)));
        }
    }
    lines
}

fn timer_bar(session: &Session, now: Instant) -> Line {
    let remaining = session.remaining_ms(now);
    let limit = session.time_limit_ms().max(1);
    let filled = (remaining as usize * BAR_WIDTH) / limit as usize;
    let filled = filled.min(BAR_WIDTH);

    let fg = match remaining * 3 {
        r if r > limit * 2 => Color::Green,
        r if r > limit => Color::Yellow,
        _ => Color::Red,
    };
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    Line::colored(bar, fg)
}

fn compose_failure(session: &Session) -> Vec<Line> {
    let mut lines = vec![Line::blank(), Line::blank()];
    if let Some(failure) = session.failure() {
        let (marker, fg) = match failure.reason {
            FailReason::Incorrect => ("✗", Color::Red),
            FailReason::Correct => ("✓", Color::Green),
            FailReason::Timeout => ("⏱", Color::Yellow),
        };
        lines.push(Line::strong(marker, fg));
        lines.push(Line::blank());
        lines.push(Line::strong(failure.message.0.clone(), Color::White));
        lines.push(Line::plain(failure.message.1.clone()));
        if failure.penalty > 0 {
            lines.push(Line::blank());
            lines.push(Line::colored(
                format!("ลงโทษ! ถอยหลัง {} ข้อ", failure.penalty),
                Color::Red,
            ));
        }
    }
    lines.push(Line::blank());
    lines.push(Line::colored("[Enter] ไปต่อ", Color::DarkGrey));
    lines
}

fn compose_win(mode: Mode) -> Vec<Line> {
    let mut lines = vec![Line::blank(), Line::blank()];
    match mode {
        Mode::Easy => {
            lines.push(Line::strong("คุณชนะโหมดง่าย!", Color::Green));
            lines.push(Line::plain("ตอบถูกครบทุกข้อ เก่งมาก"));
            lines.push(Line::blank());
            lines.push(Line::plain("ลองโหมดยากดูสิ: คราวนี้ต้องตอบผิด"));
        }
        Mode::Hard => {
            lines.push(Line::strong("คุณพิชิตโหมดยาก!", Color::Red));
            lines.push(Line::plain("ตอบผิดได้อย่างไร้ที่ติทั้ง 27 ข้อ"));
        }
    }
    lines.push(Line::blank());
    lines.push(Line::colored("[Enter] กลับเมนู", Color::DarkGrey));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_take_no_width() {
        assert_eq!(display_width("กา"), 2);
        assert_eq!(display_width("กิ"), 1);
        assert_eq!(display_width("ปู"), 1);
        assert_eq!(display_width("น้ำ"), 2);
    }

    #[test]
    fn menu_mentions_the_active_mode() {
        let easy = compose_menu(false);
        assert!(easy.iter().any(|l| l.text.contains("โหมดง่าย")));
        let hard = compose_menu(true);
        assert!(hard.iter().any(|l| l.text.contains("โหมดยาก")));
    }
}
