use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;

use super::app::{Action, App, Tab};
use super::widgets;
use crate::api::ApiClient;
use crate::detail::ClientDetail;

/// DetailView manages the TUI lifecycle for one client
pub struct DetailView {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl DetailView {
    /// Create new detail view instance
    pub fn new(detail: ClientDetail) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self {
            terminal,
            app: App::new(detail),
        })
    }

    /// Run the detail view event loop
    pub async fn run(&mut self, api: &ApiClient) -> Result<()> {
        loop {
            let app = &self.app;
            self.terminal.draw(|f| ui(f, app))?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == event::KeyEventKind::Press {
                        if self.app.handle_key(key.code) == Action::Refresh {
                            self.app.refresh_current(api).await;
                        }
                    }
                }
            }

            if self.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Cleanup terminal on exit
    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to restore terminal")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;

        Ok(())
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the UI
fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    // Main layout: tab bar + content + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    widgets::render_tab_bar(chunks[0], f.buffer_mut(), app);

    match app.tab {
        Tab::Overview => widgets::render_overview(chunks[1], f.buffer_mut(), &app.detail),
        Tab::Goals => widgets::render_goals(chunks[1], f.buffer_mut(), app),
        Tab::Workouts => widgets::render_workouts(chunks[1], f.buffer_mut(), app),
        Tab::Sessions => widgets::render_sessions(chunks[1], f.buffer_mut(), app),
        Tab::Payments => widgets::render_payments(chunks[1], f.buffer_mut(), app),
        Tab::Progress => widgets::render_progress(chunks[1], f.buffer_mut(), app),
    }

    widgets::render_status_bar(chunks[2], f.buffer_mut(), app);

    // Render help overlay if active
    if app.show_help {
        let help_area = centered_rect(60, 70, size);
        widgets::render_help_overlay(help_area, f.buffer_mut());
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
