use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Widget},
};

use super::app::{App, Tab};
use crate::detail::ClientDetail;
use crate::models::{GoalStatus, PaymentStatus};

/// Render the tab bar with the client name as title
pub fn render_tab_bar(area: Rect, buf: &mut Buffer, app: &App) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.detail.client.name)),
        )
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    tabs.render(area, buf);
}

/// Render the overview tab
pub fn render_overview(area: Rect, buf: &mut Buffer, detail: &ClientDetail) {
    let block = Block::default().borders(Borders::ALL).title(" Overview ");
    let inner = block.inner(area);
    block.render(area, buf);

    let client = &detail.client;

    let pending: f64 = detail
        .payments
        .iter()
        .filter(|p| p.is_pending())
        .map(|p| p.amount)
        .sum();

    let active_goals = detail
        .goals
        .iter()
        .filter(|g| g.status == GoalStatus::Active)
        .count();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(
                client.status.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Email:  ", Style::default().fg(Color::Gray)),
            Span::raw(client.email.as_deref().unwrap_or("-").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Phone:  ", Style::default().fg(Color::Gray)),
            Span::raw(client.phone.as_deref().unwrap_or("-").to_string()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Active goals:   ", Style::default().fg(Color::Gray)),
            Span::styled(
                active_goals.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Workout plans:  ", Style::default().fg(Color::Gray)),
            Span::raw(detail.workouts.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Logged sessions: ", Style::default().fg(Color::Gray)),
            Span::raw(detail.logs.len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Pending amount: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2}", pending),
                Style::default()
                    .fg(if pending > 0.0 { Color::Red } else { Color::Green })
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(notes) = &client.notes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notes.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Paragraph::new(lines).render(inner, buf);
}

fn render_list(area: Rect, buf: &mut Buffer, title: &str, items: Vec<String>, selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    block.render(area, buf);

    if items.is_empty() {
        Paragraph::new("Nothing here yet.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = items
        .into_iter()
        .enumerate()
        .map(|(idx, content)| {
            let style = if idx == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    List::new(items).render(inner, buf);
}

pub fn render_goals(area: Rect, buf: &mut Buffer, app: &App) {
    let items = app
        .detail
        .goals
        .iter()
        .map(|g| {
            let marker = match g.status {
                GoalStatus::Completed => "✓",
                GoalStatus::Abandoned => "✗",
                GoalStatus::Active => " ",
            };
            let target = g
                .target_date
                .map(|d| format!(" (by {})", d))
                .unwrap_or_default();

            format!("{} {}{}", marker, g.title, target)
        })
        .collect();

    render_list(area, buf, "Goals", items, app.selected_index);
}

pub fn render_workouts(area: Rect, buf: &mut Buffer, app: &App) {
    let items = app
        .detail
        .workouts
        .iter()
        .map(|p| format!("{} ({} exercises)", p.name, p.exercises.len()))
        .collect();

    render_list(area, buf, "Workout Plans", items, app.selected_index);
}

pub fn render_sessions(area: Rect, buf: &mut Buffer, app: &App) {
    let items = app
        .detail
        .logs
        .iter()
        .map(|l| {
            let duration = l
                .duration_minutes
                .map(|d| format!(" — {} min", d))
                .unwrap_or_default();

            format!("{}  {}{}", l.date, l.activity, duration)
        })
        .collect();

    render_list(area, buf, "Training Sessions", items, app.selected_index);
}

pub fn render_payments(area: Rect, buf: &mut Buffer, app: &App) {
    let items = app
        .detail
        .payments
        .iter()
        .map(|p| {
            let marker = match p.status {
                PaymentStatus::Completed => "✓",
                PaymentStatus::Pending => "…",
                PaymentStatus::Overdue => "!",
            };
            let due = p
                .due_date
                .map(|d| format!(" due {}", d))
                .unwrap_or_default();

            format!("{} {:>8.2} {}{}", marker, p.amount, p.status, due)
        })
        .collect();

    render_list(area, buf, "Payments", items, app.selected_index);
}

pub fn render_progress(area: Rect, buf: &mut Buffer, app: &App) {
    let items = app
        .detail
        .measurements
        .iter()
        .map(|m| {
            format!(
                "{}  {}: {:.1} {}",
                m.recorded_at.format("%Y-%m-%d"),
                m.measurement_type,
                m.value,
                m.unit
            )
        })
        .collect();

    render_list(area, buf, "Measurements", items, app.selected_index);
}

/// Render status bar at bottom
pub fn render_status_bar(area: Rect, buf: &mut Buffer, app: &App) {
    let mut spans = Vec::new();

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled(
        " r: refresh  ?: help  q: quit ",
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    ));

    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Render help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    block.render(area, buf);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Navigation:", Style::default().fg(Color::Cyan))),
        Line::from("  Tab/→/l   - Next tab"),
        Line::from("  S-Tab/←/h - Previous tab"),
        Line::from("  ↑/k       - Move up"),
        Line::from("  ↓/j       - Move down"),
        Line::from(""),
        Line::from(Span::styled("Actions:", Style::default().fg(Color::Cyan))),
        Line::from("  r         - Re-fetch the current tab"),
        Line::from(""),
        Line::from(Span::styled("Other:", Style::default().fg(Color::Cyan))),
        Line::from("  ?         - Toggle this help"),
        Line::from("  q/Esc     - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or ESC to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(help_text).render(inner, buf);
}
