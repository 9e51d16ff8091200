//! Frame loop driver and top-level rendering

use crate::game::{Control, Game, GameState};
use crate::input::Platform;
use log::info;
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// The main application state
pub struct App<R> {
    /// The game being played
    pub game: Game<R>,

    /// Whether the loop should stop after the current frame
    pub should_quit: bool,

    /// Frames rendered so far
    pub frames: u64,
}

impl<R: Rng> App<R> {
    pub fn new(game: Game<R>) -> Self {
        App {
            game,
            should_quit: false,
            frames: 0,
        }
    }

    /// Run the frame loop until a quit key or a close request.
    ///
    /// Every iteration polls input once, updates the game once and renders
    /// once, so the frame that asked to quit is still drawn.
    pub fn run<B: Backend, P: Platform>(
        &mut self,
        terminal: &mut Terminal<B>,
        platform: &mut P,
    ) -> io::Result<()> {
        while !self.should_quit {
            let input = platform.poll_frame()?;

            if self.game.update(&input) == Control::Quit || platform.should_close() {
                self.should_quit = true;
            }

            terminal.draw(|f| self.render(f))?;
            self.frames += 1;
        }

        info!("Frame loop finished after {} frames", self.frames);
        Ok(())
    }
}

impl<R> App<R> {
    /// Render the UI for the current state
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        if self.game.state() == GameState::Title {
            super::panes::render_title(frame, size);
            return;
        }

        // Board above, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let board_area = chunks[0];
        let status_area = chunks[1];
        let game_over = self.game.state() == GameState::GameOver;

        super::panes::render_board(
            frame,
            board_area,
            self.game.grid(),
            self.game.snake(),
            self.game.food(),
            game_over,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            self.game.grid(),
            self.game.snake().len(),
            self.game.state(),
        );

        if game_over {
            super::panes::render_game_over(
                frame,
                board_area,
                self.game.game_over_reason(),
                self.game.snake().len(),
            );
        }
    }
}
