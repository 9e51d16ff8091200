//! Game state machine
//!
//! [`Game`] owns everything the simulation needs: the grid, the [`Snake`],
//! the food cell, the random source and the active [`GameState`]. The frame
//! loop feeds it one [`FrameInput`] per frame through [`Game::update`] and
//! then renders it read-only.
//!
//! ```text
//!            any key                collision / board full
//!   Title ───────────▶ Gameplay ─────────────────────────▶ GameOver
//!                       │    ▲  ◀───────────────────────────  │
//!                       └────┘           space                 │
//!                      restart (r)                             │
//! ```
//!
//! Quitting is not a state: `q` makes [`Game::update`] return [`Control::Quit`].

pub mod food;
pub mod grid;
pub mod snake;

use crate::error::GameError;
use crate::input::keymap::{Action, KeyMap};
use crate::input::FrameInput;
use grid::{Direction, Grid, Position};
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use snake::{Snake, TickOutcome};

/// Default movement cadence in cells per second
pub const DEFAULT_MOVES_PER_SECOND: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Title,
    Gameplay,
    GameOver,
}

/// Why the last round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    /// The snake covers every cell, so no food can be placed
    BoardFilled,
}

impl GameOverReason {
    pub fn describe(self) -> &'static str {
        match self {
            GameOverReason::HitWall => "You hit the wall",
            GameOverReason::HitSelf => "You bit yourself",
            GameOverReason::BoardFilled => "The board is full!",
        }
    }
}

/// Signal from [`Game::update`] to the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Game<R = ThreadRng> {
    grid: Grid,
    snake: Snake,
    food: Position,
    state: GameState,
    game_over_reason: Option<GameOverReason>,
    moves_per_second: f32,
    keymap: KeyMap,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(grid: Grid, moves_per_second: f32) -> Result<Self, GameError> {
        Game::with_rng(grid, moves_per_second, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Build a game on `grid` drawing food positions from `rng`.
    ///
    /// The grid needs room for the snake and one piece of food.
    pub fn with_rng(grid: Grid, moves_per_second: f32, mut rng: R) -> Result<Self, GameError> {
        let snake = Snake::new(grid)?;
        let food = food::place_food(snake.body(), grid, &mut rng).ok_or(
            GameError::DegenerateGrid {
                width: grid.width().into(),
                height: grid.height().into(),
            },
        )?;

        info!(
            "New game on a {} grid at {} moves/s, first food at {}",
            grid, moves_per_second, food
        );

        Ok(Game {
            grid,
            snake,
            food,
            state: GameState::Title,
            game_over_reason: None,
            moves_per_second,
            keymap: KeyMap::default(),
            rng,
        })
    }

    /// Replace the default key bindings
    pub fn set_keymap(&mut self, keymap: KeyMap) {
        self.keymap = keymap;
    }

    /// Advance the game by one frame
    pub fn update(&mut self, input: &FrameInput) -> Control {
        if self.action(input) == Some(Action::Quit) {
            info!("Quit requested from {:?}", self.state);
            return Control::Quit;
        }

        match self.state {
            GameState::Title => self.update_title(input),
            GameState::Gameplay => self.update_gameplay(input),
            GameState::GameOver => self.update_game_over(input),
        }

        Control::Continue
    }

    /// Put the snake back at the start and place fresh food
    pub fn reset(&mut self) {
        self.snake.reset();
        self.game_over_reason = None;
        self.respawn_food();
        debug!("Round reset, food at {}", self.food);
    }

    fn update_title(&mut self, input: &FrameInput) {
        if input.key.is_some() {
            self.transition(GameState::Gameplay);
        }
    }

    fn update_gameplay(&mut self, input: &FrameInput) {
        if self.action(input) == Some(Action::Restart) {
            self.reset();
            return;
        }

        if let Some(dir) = self.steering(input) {
            self.snake.request_direction(dir);
        }

        if let Some(outcome) = self.snake.advance(input.dt, self.moves_per_second) {
            match outcome {
                TickOutcome::Moved => {}
                TickOutcome::HitWall => return self.end_round(GameOverReason::HitWall),
                TickOutcome::HitSelf => return self.end_round(GameOverReason::HitSelf),
            }
        }

        if self.snake.check_food_collision(self.food) {
            self.snake.grow();
            debug!(
                "Food eaten at {}, length will be {}",
                self.food,
                self.snake.len() + 1
            );
            if !self.respawn_food() {
                self.end_round(GameOverReason::BoardFilled);
            }
        }
    }

    fn update_game_over(&mut self, input: &FrameInput) {
        if self.action(input) == Some(Action::Continue) {
            self.reset();
            self.transition(GameState::Gameplay);
        }
    }

    /// At most one direction per frame: the pressed key wins, then held keys
    /// in [`KeyMap::MOVEMENT_PRIORITY`] order.
    ///
    /// Held keys only count when they would turn the snake, so a key still
    /// held for the current heading cannot undo a turn pressed earlier in
    /// the same movement period.
    fn steering(&self, input: &FrameInput) -> Option<Direction> {
        if let Some(dir) = input.key.and_then(|key| self.keymap.direction(key)) {
            return Some(dir);
        }
        let heading = self.snake.direction();
        KeyMap::MOVEMENT_PRIORITY
            .into_iter()
            .filter(|&dir| dir != heading && dir != heading.opposite())
            .find(|&dir| self.keymap.keys_for(dir).any(|key| input.is_held(key)))
    }

    fn respawn_food(&mut self) -> bool {
        match food::place_food(self.snake.body(), self.grid, &mut self.rng) {
            Some(pos) => {
                self.food = pos;
                true
            }
            None => false,
        }
    }

    fn end_round(&mut self, reason: GameOverReason) {
        debug!(
            "Round over ({:?}) with head at {}, length {}",
            reason,
            self.snake.head(),
            self.snake.len()
        );
        self.game_over_reason = Some(reason);
        self.transition(GameState::GameOver);
    }
}

impl<R> Game<R> {
    fn action(&self, input: &FrameInput) -> Option<Action> {
        input.key.and_then(|key| self.keymap.action(key))
    }

    fn transition(&mut self, next: GameState) {
        info!("State {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn moves_per_second(&self) -> f32 {
        self.moves_per_second
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RNG_SEED: u64 = 0x0123_4567_89AB_CDEF;
    const TICK: f32 = 0.15;

    fn new_game(w: u16, h: u16) -> Game<StdRng> {
        let grid = Grid::new(w, h).unwrap();
        Game::with_rng(grid, DEFAULT_MOVES_PER_SECOND, StdRng::seed_from_u64(RNG_SEED)).unwrap()
    }

    fn playing(w: u16, h: u16) -> Game<StdRng> {
        let mut game = new_game(w, h);
        game.update(&FrameInput::pressed(Key::Enter, 0.0));
        assert_eq!(game.state(), GameState::Gameplay);
        game
    }

    #[test]
    fn test_starts_on_title() {
        let mut game = new_game(8, 6);
        assert_eq!(game.state(), GameState::Title);
        assert_ne!(game.food(), game.snake().head());

        // Time alone does not leave the title
        game.update(&FrameInput::idle(5.0));
        assert_eq!(game.state(), GameState::Title);
        assert_eq!(game.snake().head(), Position::ORIGIN);
    }

    #[test]
    fn test_quit_from_every_state() {
        let mut game = new_game(8, 6);
        assert_eq!(game.update(&FrameInput::pressed(Key::char('q'), 0.0)), Control::Quit);
        assert_eq!(game.state(), GameState::Title);

        let mut game = playing(8, 6);
        assert_eq!(game.update(&FrameInput::pressed(Key::Esc, 0.0)), Control::Quit);
    }

    #[test]
    fn test_frames_shorter_than_period_do_not_move() {
        let mut game = playing(8, 6);
        for _ in 0..5 {
            game.update(&FrameInput::idle(0.01));
        }
        assert_eq!(game.snake().head(), Position::ORIGIN);
        game.update(&FrameInput::idle(0.06));
        assert_eq!(game.snake().head(), Position::new(1, 0));
    }

    #[test]
    fn test_held_key_steers() {
        let mut game = playing(8, 6);
        let mut input = FrameInput::idle(TICK);
        input.held.insert(Key::char('s'));
        game.update(&input);
        assert_eq!(game.snake().direction(), Direction::Down);
        assert_eq!(game.snake().head(), Position::new(0, 1));
    }

    #[test]
    fn test_pressed_key_beats_held() {
        let mut game = playing(8, 6);
        let mut input = FrameInput::pressed(Key::Right, TICK);
        input.held.insert(Key::Down);
        game.update(&input);
        assert_eq!(game.snake().direction(), Direction::Right);
    }

    #[test]
    fn test_held_heading_keeps_pressed_turn() {
        let mut game = playing(8, 6);
        game.update(&FrameInput::pressed(Key::Down, TICK));
        assert_eq!(game.snake().head(), Position::new(0, 1));

        // Right pressed while Down is still held, inside the movement period
        let mut input = FrameInput::pressed(Key::Right, 0.01);
        input.held.insert(Key::Down);
        game.update(&input);
        assert_eq!(game.snake().buffered_direction(), Direction::Right);

        // Next frame both keys are still held and the period elapses
        let mut input = FrameInput::idle(TICK);
        input.held.insert(Key::Down);
        input.held.insert(Key::Right);
        game.update(&input);
        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.snake().head(), Position::new(1, 1));
    }

    #[test]
    fn test_held_heading_alone_keeps_pressed_turn() {
        let mut game = playing(8, 6);
        game.update(&FrameInput::pressed(Key::char('s'), TICK));
        game.update(&FrameInput::pressed(Key::char('d'), 0.01));

        let mut input = FrameInput::idle(TICK);
        input.held.insert(Key::char('s'));
        game.update(&input);
        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.snake().head(), Position::new(1, 1));
    }

    #[test]
    fn test_biting_self_ends_round() {
        let mut game = playing(8, 6);
        // Keep food out of the way so growth is driven by hand
        game.food = Position::new(7, 5);
        for _ in 0..5 {
            game.snake.grow();
            game.update(&FrameInput::idle(TICK));
        }
        assert_eq!(game.snake().len(), 6);
        assert_eq!(game.snake().head(), Position::new(5, 0));

        game.update(&FrameInput::pressed(Key::Down, TICK));
        game.update(&FrameInput::pressed(Key::Left, TICK));
        assert_eq!(game.state(), GameState::Gameplay);
        assert_eq!(game.snake().head(), Position::new(4, 1));

        // Turning up runs into the segment at (4, 0)
        game.update(&FrameInput::pressed(Key::Up, TICK));
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.game_over_reason(), Some(GameOverReason::HitSelf));
        assert_eq!(game.snake().head(), Position::new(4, 0));
        assert_eq!(game.snake().len(), 6);

        // Frozen until continue
        let body = game.snake().body().to_vec();
        game.update(&FrameInput::pressed(Key::Right, TICK));
        game.update(&FrameInput::idle(TICK));
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.snake().body(), body.as_slice());
    }

    #[test]
    fn test_wall_ends_round() {
        let mut game = playing(8, 6);
        for _ in 0..7 {
            game.update(&FrameInput::idle(TICK));
        }
        assert_eq!(game.snake().head(), Position::new(7, 0));
        assert_eq!(game.state(), GameState::Gameplay);

        game.update(&FrameInput::idle(TICK));
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.game_over_reason(), Some(GameOverReason::HitWall));
        assert_eq!(game.snake().head(), Position::new(7, 0));

        // Frozen until continue
        game.update(&FrameInput::pressed(Key::Down, TICK));
        assert_eq!(game.snake().head(), Position::new(7, 0));
    }

    #[test]
    fn test_continue_restarts_round() {
        let mut game = playing(3, 3);
        for _ in 0..3 {
            game.update(&FrameInput::idle(TICK));
        }
        assert_eq!(game.state(), GameState::GameOver);

        game.update(&FrameInput::pressed(Key::char(' '), 0.0));
        assert_eq!(game.state(), GameState::Gameplay);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Position::ORIGIN);
        assert_eq!(game.game_over_reason(), None);
        assert!(!game.snake().occupies(game.food()));
    }

    #[test]
    fn test_restart_skips_rest_of_frame() {
        let mut game = playing(8, 6);
        game.update(&FrameInput::idle(TICK));
        game.update(&FrameInput::idle(TICK));
        assert_eq!(game.snake().head(), Position::new(2, 0));

        game.update(&FrameInput::pressed(Key::char('r'), TICK));
        assert_eq!(game.state(), GameState::Gameplay);
        assert_eq!(game.snake().head(), Position::ORIGIN);
        assert_eq!(game.snake().move_accumulator(), 0.0);
    }

    #[test]
    fn test_eating_grows_on_next_tick() {
        // On a 2x1 board the only free cell is (1, 0)
        let mut game = playing(2, 1);
        assert_eq!(game.food(), Position::new(1, 0));

        game.update(&FrameInput::idle(TICK));
        assert_eq!(game.snake().head(), Position::new(1, 0));
        assert!(game.snake().is_growing());
        assert_eq!(game.food(), Position::new(0, 0));

        // The next tick grows into the old tail cell, then hits the wall
        game.update(&FrameInput::idle(TICK));
        assert_eq!(game.snake().len(), 2);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.game_over_reason(), Some(GameOverReason::HitWall));
    }
}
