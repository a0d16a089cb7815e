// UI module for rendering the TUI.
// Lays out the summary row, project list, toggle, and status bar.

mod list;
mod summary;

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::util::copyright;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Summary counters
            Constraint::Min(1),    // Project list
            Constraint::Length(1), // Toggle
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    summary::draw_summary(frame, &app.panel, chunks[0]);
    list::render_projects(frame, &mut app.panel, chunks[1]);
    summary::draw_toggle(frame, &app.panel, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

/// Draw the status bar with key hints and the footer.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(32)])
        .split(area);

    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Open", Style::default().fg(Color::DarkGray)),
        Span::raw("  o "),
        Span::styled("Profile", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];
    if app.fetching() {
        hints.push(Span::styled("  ⏳", Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[0]);

    let footer = Paragraph::new(copyright(&app.config.user, Utc::now()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}
