use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use gridle::config::{Config, ConfigStore, FileConfigStore, Theme};
use gridle::engine::{GameEngine, GameMode};
use gridle::runtime::{spawn_event_funnel, GameEvent};
use gridle::words::WordStore;
use gridle::TICK_RATE_MS;

mod ui;

/// terminal word-guessing game with a timed mode and per-mode streaks
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the hidden five-letter word in six tries. Scored tiles and the on-screen keyboard remember what each guess taught you; timed mode grants sixty seconds per round, and win streaks are tracked independently per mode."
)]
pub struct Cli {
    /// start in timed mode (sixty seconds per round)
    #[clap(short, long)]
    timed: bool,

    /// game mode to start in, overriding the saved preference
    #[clap(short, long, value_enum)]
    mode: Option<GameMode>,

    /// newline-delimited solution list replacing the built-in one
    #[clap(long, value_name = "FILE", requires = "guesses")]
    solutions: Option<PathBuf>,

    /// newline-delimited allowed-guess list replacing the built-in one
    #[clap(long, value_name = "FILE", requires = "solutions")]
    guesses: Option<PathBuf>,
}

pub struct App {
    pub engine: GameEngine,
    pub theme: Theme,
}

fn starting_mode(cli: &Cli, config: &Config) -> GameMode {
    if let Some(mode) = cli.mode {
        mode
    } else if cli.timed {
        GameMode::Timed
    } else {
        config.mode()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let words = match (&cli.solutions, &cli.guesses) {
        (Some(solutions), Some(guesses)) => WordStore::from_files(solutions, guesses)?,
        _ => WordStore::embedded(),
    };

    let store = FileConfigStore::new();
    let config = store.load();
    let mode = starting_mode(&cli, &config);

    // An empty word list is refused here, before the terminal goes raw,
    // so the error is actually readable.
    let engine = match GameEngine::new(words, mode) {
        Ok(engine) => engine,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::Io, e.to_string()).exit();
        }
    };
    let mut app = App {
        engine,
        theme: config.theme,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = store.save(&Config {
        timed: app.engine.mode() == GameMode::Timed,
        theme: app.theme,
    });

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let events = spawn_event_funnel(Duration::from_millis(TICK_RATE_MS));

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        // Capture the token before blocking: a reset or mode switch below
        // bumps the timer generation, so a tick that raced it carries a
        // dead token and is dropped inside the engine.
        let token = app.engine.timer_token();

        match events.recv()? {
            GameEvent::Tick => app.engine.on_timer_tick(token),
            GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if handle_key(app, key)? {
                    break;
                }
            }
        }

        // the UI reads snapshots; keep the notification queue drained
        app.engine.take_events();
    }

    Ok(())
}

/// Returns Ok(true) when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool, Box<dyn Error>> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.engine.reset_game()?;
        }
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.theme = app.theme.toggled();
        }
        KeyCode::Tab => app.engine.toggle_mode()?,
        KeyCode::Backspace => app.engine.remove_letter(),
        KeyCode::Enter => {
            if app.engine.is_round_over() {
                app.engine.reset_game()?;
            } else {
                app.engine.submit_guess();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.engine.add_letter(c);
        }
        _ => {}
    }
    Ok(false)
}
