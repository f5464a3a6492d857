//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. It returns the record the
//! user picked with `Enter`, if any.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results::{ResultsList, ResultsState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use laylife_core::{config::Config, SearchIndex, SearchRecord};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub index: SearchIndex,
    pub query: QueryBarState,
    pub results: ResultsState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
    /// Record chosen with `Enter`; handed back by [`App::run`].
    pub picked: Option<SearchRecord>,
}

impl AppState {
    /// Re-run the search for the current query text.
    pub fn refresh(&mut self) {
        let found: Vec<SearchRecord> = self
            .index
            .search_with_limit(&self.query.query, self.config.search.max_results)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(query = %self.query.query, results = found.len(), "refresh");
        self.results.set(&self.query.query, found);
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(index: SearchIndex, config: Config, theme: Theme) -> Self {
        let state = AppState {
            index,
            query: QueryBarState::default(),
            results: ResultsState::default(),
            focus: Focus::Query,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
            picked: None,
        };
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<Option<SearchRecord>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.picked)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind != crossterm::event::KeyEventKind::Press => {}
                    raw => {
                        if let Some(ev) = event::to_app_event(raw) {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = Focus::Query;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = Focus::Query;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input, just close
                            s.command_bar.clear();
                            s.focus = Focus::Query;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Clear first, close on a second press
            AppEvent::Escape => {
                if s.query.query.is_empty() {
                    tracing::debug!("escape on empty query, closing");
                    s.quit = true;
                } else {
                    s.query.clear();
                    s.refresh();
                }
            }

            AppEvent::Enter => {
                if let Some(record) = s.results.selected_record() {
                    tracing::debug!(url = %record.url, "result picked");
                    s.picked = Some(record.clone());
                    s.quit = true;
                }
            }

            // `:` only opens the command line while there is nothing to search
            AppEvent::Char(':') if s.query.query.is_empty() => {
                tracing::debug!("entering command mode");
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Nav(Direction::Up) | AppEvent::Nav(Direction::Down) => {
                s.results.handle(&event);
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => {
                if s.query.handle(&other) {
                    s.refresh();
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line query bar | results | 1-line footer
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        QueryBar::new(&state.query, state.focus == Focus::Query, &state.theme),
        vert[0],
    );
    frame.render_widget(
        ResultsList::new(&state.results, state.config.ui.show_descriptions, &state.theme),
        vert[1],
    );
    frame.render_widget(StatusBar::new(state.results.results.len(), &state.theme), vert[2]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the footer row
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    let qb = QueryBar::new(&state.query, true, &state.theme);
    frame.set_cursor_position(qb.cursor_position(vert[0]));
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
