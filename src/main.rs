use std::io::{self, stdout};

use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod cli;
mod disclosure;
mod models;
mod summary;
mod theme;
mod ui;
mod utils;
mod watcher;

use app::App;
use cli::DataSource;
use models::Page;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    let mut app = App::new(config)?;

    // Watch the data file for live reload; sample data has nothing to watch
    let _watcher = match &app.source {
        DataSource::File(path) => {
            watcher::setup_data_watcher(path.clone(), app.needs_reload.clone())
        }
        DataSource::Embedded => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_if_needed();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Tab => app.next_page(),
                    KeyCode::BackTab => app.prev_page(),
                    KeyCode::Char('1') => app.page = Page::Dashboard,
                    KeyCode::Char('2') => app.page = Page::Predictions,
                    KeyCode::Char('3') => app.page = Page::Finance,
                    KeyCode::Char('4') => app.page = Page::Analytics,
                    KeyCode::Up | KeyCode::Left => app.select_prev(),
                    KeyCode::Down | KeyCode::Right => app.select_next(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
