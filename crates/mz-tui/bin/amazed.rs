//! Bee a-maze'd in the terminal
//!
//! Main entry point for the game.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use mz_core::{GameRng, MazeConfig, Session};
use mz_save::{default_progress_path, load_or_default, save_progress};
use mz_tui::{App, Theme};

/// Time between frames
const TICK: Duration = Duration::from_millis(16);

/// Random mazes, one level after another
#[derive(Parser, Debug)]
#[command(name = "amazed")]
#[command(author, version, about = "Bee a-maze'd - find the flower!", long_about = None)]
struct Args {
    /// Seed for the maze sequence (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with maze settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Do not read or write the progress file
    #[arg(long = "no-save")]
    no_save: bool,

    /// Use colors for a light terminal background
    #[arg(long = "light")]
    light: bool,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("amazed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => MazeConfig::load(path)?,
        None => MazeConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let session = Session::new(config, rng)?;

    let mut progress_path = (!args.no_save).then(default_progress_path);
    let progress = match &progress_path {
        Some(path) => match load_or_default(path) {
            Ok(progress) => Some(progress),
            Err(e) => {
                // Leave the unreadable file alone
                eprintln!("Could not read progress, it will not be saved: {}", e);
                None
            }
        },
        None => None,
    };
    if progress.is_none() {
        progress_path = None;
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    let mut app = App::new(session, theme, progress);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, progress_path.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    progress_path: Option<&PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let started = Instant::now();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Gather every key that arrived during this frame
        if event::poll(TICK)? {
            app.handle_event(event::read()?);
            while event::poll(Duration::ZERO)? {
                app.handle_event(event::read()?);
            }
        }
        if app.should_quit() {
            break;
        }

        let ticks = started.elapsed().as_millis() as u64;
        if app.tick(ticks)?
            && let (Some(path), Some(progress)) = (progress_path, app.progress())
            && let Err(e) = save_progress(progress, path)
        {
            app.message(format!("Could not save progress: {}", e));
        }
    }

    Ok(())
}
