//! Input collection and the platform seam
//!
//! The game never talks to the terminal directly. Each frame the driver asks a
//! [`Platform`] for a [`FrameInput`]: at most one discrete key press, the set
//! of keys currently held, and the time since the previous frame.
//!
//! - [`keymap`] — which keys perform which [`keymap::Action`]
//! - [`terminal`] — the crossterm-backed [`Platform`]

pub mod keymap;
pub mod terminal;

use rustc_hash::FxHashSet;
use std::io;

/// A key, independent of the terminal library.
///
/// Letters are stored lowercase so bindings are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
    Other,
}

impl Key {
    /// Build a character key, folding letters to lowercase
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }
}

/// Everything the game needs to know about one frame of input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// The discrete key press for this frame, if any (no auto-repeat)
    pub key: Option<Key>,
    /// Keys held down during this frame
    pub held: FxHashSet<Key>,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl FrameInput {
    /// A frame with no key activity
    pub fn idle(dt: f32) -> Self {
        FrameInput {
            dt,
            ..Default::default()
        }
    }

    /// A frame where `key` was pressed (and is therefore held)
    pub fn pressed(key: Key, dt: f32) -> Self {
        let mut held = FxHashSet::default();
        held.insert(key);
        FrameInput {
            key: Some(key),
            held,
            dt,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// The host environment: input, frame pacing and close requests
pub trait Platform {
    /// Wait for the next frame slot and report the input gathered for it
    fn poll_frame(&mut self) -> io::Result<FrameInput>;

    /// Whether the host has asked the game to stop
    fn should_close(&self) -> bool;
}
