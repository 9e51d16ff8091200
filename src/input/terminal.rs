//! crossterm-backed [`Platform`]

use super::{FrameInput, Key, Platform};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// Reads keys from the terminal and paces frames to a fixed rate.
///
/// Key presses are queued and handed out one per frame. Terminals that report
/// key releases keep an accurate held set; on the rest a key counts as held
/// only during the frame its press arrived.
pub struct TerminalPlatform {
    frame_period: Duration,
    last_frame: Instant,
    pressed: VecDeque<Key>,
    held: FxHashSet<Key>,
    reports_release: bool,
    close_requested: bool,
}

impl TerminalPlatform {
    pub fn new(fps: u32, reports_release: bool) -> Self {
        TerminalPlatform {
            frame_period: Duration::from_secs(1) / fps.max(1),
            last_frame: Instant::now(),
            pressed: VecDeque::new(),
            held: FxHashSet::default(),
            reports_release,
            close_requested: false,
        }
    }

    /// Fold one terminal event into the pending input
    pub fn handle_event(&mut self, event: Event) {
        let key_event = match event {
            Event::Key(key_event) => key_event,
            // Releases are not reported while unfocused
            Event::FocusLost => {
                self.held.clear();
                return;
            }
            _ => return,
        };
        if is_interrupt(&key_event) {
            self.close_requested = true;
            return;
        }

        let key = key_from_code(key_event.code);
        match key_event.kind {
            KeyEventKind::Press => {
                self.pressed.push_back(key);
                self.held.insert(key);
            }
            KeyEventKind::Repeat => {
                self.held.insert(key);
            }
            KeyEventKind::Release => {
                self.held.remove(&key);
            }
        }
    }

    /// Hand out the input gathered since the previous frame
    fn take_frame(&mut self, now: Instant) -> FrameInput {
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let input = FrameInput {
            key: self.pressed.pop_front(),
            held: self.held.clone(),
            dt,
        };
        if !self.reports_release {
            self.held.clear();
        }
        input
    }
}

impl Platform for TerminalPlatform {
    fn poll_frame(&mut self) -> io::Result<FrameInput> {
        let deadline = self.last_frame + self.frame_period;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(self.take_frame(Instant::now()))
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.kind == KeyEventKind::Press
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(c) => Key::char(c),
        _ => Key::Other,
    }
}
