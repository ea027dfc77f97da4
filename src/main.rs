mod app;
mod event;
mod ui;

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use event::{Event, EventHandler};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn init_logging() -> anyhow::Result<()> {
    // The terminal belongs to the renderer, so logs go to a file.
    let path = std::env::temp_dir().join("invaders.log");
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let key_releases = matches!(supports_keyboard_enhancement(), Ok(true));
    if key_releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("requesting key release events")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;
    info!(key_releases, "terminal ready");

    let result = run(&mut terminal, key_releases);

    // Restore terminal even when the loop failed.
    if key_releases {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run(terminal: &mut Term, key_releases: bool) -> anyhow::Result<()> {
    terminal.clear()?;

    let mut app = App::new(key_releases);
    let event_handler = EventHandler::new(16); // ~60 FPS

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next().context("input thread stopped")? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            info!(score = app.state.session.score, "quitting");
            return Ok(());
        }
    }
}
