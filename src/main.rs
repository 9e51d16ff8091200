// snaketty: Snake in the terminal

use std::fs::File;
use std::io;

use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::{info, warn, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::WriteLogger;

use snaketty::config::Config;
use snaketty::error::GameError;
use snaketty::game::Game;
use snaketty::input::terminal::TerminalPlatform;
use snaketty::ui::App;

fn main() {
    // clap prints usage and exits on bad flags or --help
    let config = Config::parse();

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), GameError> {
    if let Some(path) = &config.log_file {
        // The alternate screen owns stdout/stderr, so logs go to a file
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), File::create(path)?)
            .map_err(|e| GameError::Io(io::Error::other(e)))?;
    }

    // Validate geometry and allocate before touching the terminal
    let grid = config.grid(crossterm::terminal::size)?;
    let game = Game::new(grid, config.moves_per_second)?;
    info!("Starting with {:?}", config);

    enable_raw_mode()?;
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    let res = play(game, config.fps, reports_release);

    // Restore terminal, also when setup failed part way
    if reports_release {
        if let Err(e) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
            warn!("Failed to pop keyboard enhancement flags: {}", e);
        }
    }
    disable_raw_mode()?;
    execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen, Show)?;

    res
}

/// Enter the alternate screen and run the frame loop until quit
fn play(game: Game, fps: u32, reports_release: bool) -> Result<(), GameError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut platform = TerminalPlatform::new(fps, reports_release);
    let mut app = App::new(game);
    app.run(&mut terminal, &mut platform)?;

    info!(
        "Exited after {} frames, final length {}",
        app.frames,
        app.game.snake().len()
    );
    Ok(())
}
