// Frame loop tests: a scripted platform drives App::run against a test backend

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, Terminal};
use snaketty::game::grid::{Grid, Position};
use snaketty::game::{Game, GameState};
use snaketty::input::{FrameInput, Key, Platform};
use snaketty::ui::App;
use std::collections::VecDeque;
use std::io;

const TICK: f32 = 0.15;

/// Replays a fixed list of frames, then presses `q`
struct ScriptedPlatform {
    frames: VecDeque<FrameInput>,
    polled: usize,
    close_after: Option<usize>,
}

impl ScriptedPlatform {
    fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        ScriptedPlatform {
            frames: frames.into_iter().collect(),
            polled: 0,
            close_after: None,
        }
    }
}

impl Platform for ScriptedPlatform {
    fn poll_frame(&mut self) -> io::Result<FrameInput> {
        self.polled += 1;
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| FrameInput::pressed(Key::char('q'), 0.0)))
    }

    fn should_close(&self) -> bool {
        self.close_after.is_some_and(|n| self.polled >= n)
    }
}

fn new_app(width: u16, height: u16) -> App<StdRng> {
    let grid = Grid::new(width, height).expect("Grid creation failed");
    let game = Game::with_rng(grid, 10.0, StdRng::seed_from_u64(42)).expect("Game creation failed");
    App::new(game)
}

fn new_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("Terminal creation failed")
}

/// The rendered screen, one string per row
fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen_contains(terminal: &Terminal<TestBackend>, text: &str) -> bool {
    screen(terminal).iter().any(|row| row.contains(text))
}

#[test]
fn test_title_screen() {
    let mut app = new_app(16, 9);
    let mut terminal = new_terminal();
    let mut platform = ScriptedPlatform::new([FrameInput::idle(0.5)]);

    app.run(&mut terminal, &mut platform).expect("Frame loop failed");

    // The idle frame and the quit frame are both drawn
    assert_eq!(app.frames, 2);
    assert!(app.should_quit);
    assert_eq!(app.game.state(), GameState::Title);
    assert!(screen_contains(&terminal, "S N A K E T T Y"));
    assert!(screen_contains(&terminal, "Press any key to start"));
}

#[test]
fn test_gameplay_frames() {
    let mut app = new_app(16, 9);
    let mut terminal = new_terminal();
    let mut platform = ScriptedPlatform::new([
        FrameInput::pressed(Key::Enter, 0.0),
        FrameInput::idle(TICK),
        FrameInput::idle(TICK),
        FrameInput::idle(TICK),
    ]);

    app.run(&mut terminal, &mut platform).expect("Frame loop failed");

    assert_eq!(app.frames, 5);
    assert_eq!(app.game.state(), GameState::Gameplay);
    assert_eq!(app.game.snake().head(), Position::new(3, 0));
    assert!(screen_contains(&terminal, "PLAYING"));
    assert!(screen_contains(&terminal, "Grid 16x9"));
    assert!(screen_contains(&terminal, "██"));
    assert!(!screen_contains(&terminal, "Game Over"));
}

#[test]
fn test_one_tick_per_frame_at_most() {
    let mut app = new_app(16, 9);
    let mut terminal = new_terminal();
    // A long stall still moves the snake a single cell
    let mut platform = ScriptedPlatform::new([
        FrameInput::pressed(Key::Enter, 0.0),
        FrameInput::idle(2.0),
    ]);

    app.run(&mut terminal, &mut platform).expect("Frame loop failed");

    assert_eq!(app.game.snake().head(), Position::new(1, 0));
}

#[test]
fn test_game_over_overlay() {
    let mut app = new_app(8, 6);
    let mut terminal = new_terminal();
    let mut frames = vec![FrameInput::pressed(Key::Enter, 0.0)];
    frames.extend((0..8).map(|_| FrameInput::idle(TICK)));
    let mut platform = ScriptedPlatform::new(frames);

    app.run(&mut terminal, &mut platform).expect("Frame loop failed");

    assert_eq!(app.game.state(), GameState::GameOver);
    assert!(screen_contains(&terminal, "Game Over"));
    assert!(screen_contains(&terminal, "You hit the wall"));
    assert!(screen_contains(&terminal, "to continue"));
    assert!(screen_contains(&terminal, "GAME OVER"));
}

#[test]
fn test_close_request_stops_loop() {
    let mut app = new_app(16, 9);
    let mut terminal = new_terminal();
    let mut platform = ScriptedPlatform::new((0..100).map(|_| FrameInput::idle(0.016)));
    platform.close_after = Some(3);

    app.run(&mut terminal, &mut platform).expect("Frame loop failed");

    assert_eq!(platform.polled, 3);
    assert_eq!(app.frames, 3);
}
