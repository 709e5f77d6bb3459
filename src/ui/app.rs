use anyhow::Result;

use crate::api::ApiClient;
use crate::detail::ClientDetail;

/// Tabs of the client detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Goals,
    Workouts,
    Sessions,
    Payments,
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Goals,
        Tab::Workouts,
        Tab::Sessions,
        Tab::Payments,
        Tab::Progress,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Goals => "Goals",
            Tab::Workouts => "Workouts",
            Tab::Sessions => "Sessions",
            Tab::Payments => "Payments",
            Tab::Progress => "Progress",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Refresh,
}

/// Application state for the client detail view
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Currently selected tab
    pub tab: Tab,
    /// Selected row in the current tab
    pub selected_index: usize,
    /// Show help overlay
    pub show_help: bool,
    /// Aggregated client data
    pub detail: ClientDetail,
    /// Transient status message shown in the bottom bar
    pub status: Option<String>,
}

impl App {
    pub fn new(detail: ClientDetail) -> Self {
        Self {
            should_quit: false,
            tab: Tab::Overview,
            selected_index: 0,
            show_help: false,
            detail,
            status: None,
        }
    }

    /// Rows in the currently visible list
    pub fn current_len(&self) -> usize {
        match self.tab {
            Tab::Overview => 0,
            Tab::Goals => self.detail.goals.len(),
            Tab::Workouts => self.detail.workouts.len(),
            Tab::Sessions => self.detail.logs.len(),
            Tab::Payments => self.detail.payments.len(),
            Tab::Progress => self.detail.measurements.len(),
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> Action {
        use crossterm::event::KeyCode;

        // Help overlay takes precedence
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return Action::None;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            KeyCode::Char('?') => {
                self.show_help = true;
            }

            KeyCode::Char('r') | KeyCode::Char('R') => {
                return Action::Refresh;
            }

            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.next_tab();
            }

            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.prev_tab();
            }

            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }

            KeyCode::Down | KeyCode::Char('j') => {
                let max_index = self.current_len().saturating_sub(1);
                if self.selected_index < max_index {
                    self.selected_index += 1;
                }
            }

            _ => {}
        }

        Action::None
    }

    fn next_tab(&mut self) {
        let next = (self.tab.index() + 1) % Tab::ALL.len();
        self.tab = Tab::ALL[next];
        self.selected_index = 0;
        self.status = None;
    }

    fn prev_tab(&mut self) {
        let prev = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.tab = Tab::ALL[prev];
        self.selected_index = 0;
        self.status = None;
    }

    /// Re-fetch the resource behind the current tab
    pub async fn refresh_current(&mut self, api: &ApiClient) {
        let result: Result<&str> = match self.tab {
            Tab::Overview => self.refresh_all(api).await.map(|_| "overview"),
            Tab::Goals => self.detail.refresh_goals(api).await.map(|_| "goals"),
            Tab::Workouts => self.detail.refresh_workouts(api).await.map(|_| "workouts"),
            Tab::Sessions => self.detail.refresh_logs(api).await.map(|_| "sessions"),
            Tab::Payments => self.detail.refresh_payments(api).await.map(|_| "payments"),
            Tab::Progress => self
                .detail
                .refresh_measurements(api)
                .await
                .map(|_| "measurements"),
        };

        self.status = Some(match result {
            Ok(what) => format!("Refreshed {}", what),
            Err(e) => format!("Refresh failed: {}", e),
        });

        let max_index = self.current_len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max_index);
    }

    async fn refresh_all(&mut self, api: &ApiClient) -> Result<()> {
        self.detail.refresh_goals(api).await?;
        self.detail.refresh_workouts(api).await?;
        self.detail.refresh_logs(api).await?;
        self.detail.refresh_payments(api).await?;
        self.detail.refresh_measurements(api).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, ClientStatus};
    use chrono::Utc;
    use crossterm::event::KeyCode;
    use uuid::Uuid;

    fn test_app() -> App {
        App::new(ClientDetail {
            client: Client {
                id: Uuid::new_v4(),
                name: "Test".to_string(),
                email: None,
                phone: None,
                status: ClientStatus::Active,
                membership_start: None,
                membership_end: None,
                notes: None,
                created_at: Utc::now(),
            },
            goals: Vec::new(),
            workouts: Vec::new(),
            logs: Vec::new(),
            payments: Vec::new(),
            measurements: Vec::new(),
        })
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut app = test_app();
        assert_eq!(app.tab, Tab::Overview);

        for _ in 0..Tab::ALL.len() {
            app.handle_key(KeyCode::Tab);
        }

        assert_eq!(app.tab, Tab::Overview);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('?'));
        assert!(app.show_help);

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_refresh_key_returns_action() {
        let mut app = test_app();
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::Refresh);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = test_app();
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_index, 0);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_index, 0);
    }
}
