//! Key bindings

use super::Key;
use crate::game::grid::Direction;
use rustc_hash::FxHashMap;

/// What a key does during play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Restart,
    Continue,
    Quit,
}

/// Lookup table from keys to actions
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: FxHashMap<Key, Action>,
}

impl KeyMap {
    /// Movement keys in the order they are checked when several are held
    pub const MOVEMENT_PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    pub fn new() -> Self {
        KeyMap {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding
    pub fn bind(&mut self, key: Key, action: Action) -> &mut Self {
        self.bindings.insert(key, action);
        self
    }

    pub fn action(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Direction bound to `key`, if it is a movement key
    pub fn direction(&self, key: Key) -> Option<Direction> {
        match self.action(key)? {
            Action::Move(dir) => Some(dir),
            _ => None,
        }
    }

    /// Every key that moves the snake in `dir`
    pub fn keys_for(&self, dir: Direction) -> impl Iterator<Item = Key> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, action)| **action == Action::Move(dir))
            .map(|(key, _)| *key)
    }
}

impl Default for KeyMap {
    /// Arrows and WASD to steer, `r` restart, space continue, `q`/Esc quit
    fn default() -> Self {
        let mut map = KeyMap::new();
        map.bind(Key::Up, Action::Move(Direction::Up))
            .bind(Key::char('w'), Action::Move(Direction::Up))
            .bind(Key::Down, Action::Move(Direction::Down))
            .bind(Key::char('s'), Action::Move(Direction::Down))
            .bind(Key::Left, Action::Move(Direction::Left))
            .bind(Key::char('a'), Action::Move(Direction::Left))
            .bind(Key::Right, Action::Move(Direction::Right))
            .bind(Key::char('d'), Action::Move(Direction::Right))
            .bind(Key::char('r'), Action::Restart)
            .bind(Key::char(' '), Action::Continue)
            .bind(Key::char('q'), Action::Quit)
            .bind(Key::Esc, Action::Quit);
        map
    }
}
