mod app;
mod event;
mod games;
mod settings;
mod ui;

use std::fs::File;
use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler};
use settings::Settings;

fn main() -> io::Result<()> {
    let (settings, settings_err) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logger(&settings);
    if let Some(e) = settings_err {
        log::warn!("ignoring invalid settings file: {}", e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();
    let event_handler = EventHandler::new(settings.tick_rate());
    let result = run(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    if let Some(message) = app.final_message() {
        println!("{}", message);
    }
    Ok(())
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        handle_events(app, events)?;
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Wait for one event, then apply everything already queued so a slow draw
/// never leaves ticks behind.
fn handle_events(app: &mut App, events: &EventHandler) -> io::Result<()> {
    let mut event = events.next()?;
    loop {
        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }
        if app.should_quit {
            return Ok(());
        }
        match events.try_next() {
            Some(next) => event = next,
            None => return Ok(()),
        }
    }
}

/// Logs go to a file; the terminal belongs to the game.
fn init_logger(settings: &Settings) {
    let path = settings.log_path();
    let Ok(file) = File::create(&path) else { return };
    let env = env_logger::Env::default().default_filter_or(settings.log_level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
