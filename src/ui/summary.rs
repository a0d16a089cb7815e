// Summary row with the two counters and the See More toggle.

use ratatui::{prelude::*, widgets::*};

use crate::state::PanelView;

/// Placeholder shown before a counter is populated.
const UNSET: &str = "…";

/// Draw the counters row above the project list.
pub fn draw_summary(frame: &mut Frame, panel: &PanelView, area: Rect) {
    let counter = |value: &Option<String>| {
        Span::styled(
            value.clone().unwrap_or_else(|| UNSET.to_string()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        Span::raw(" "),
        counter(&panel.projects),
        Span::styled(" Projects   ", Style::default().fg(Color::DarkGray)),
        counter(&panel.stars),
        Span::styled(" Stars", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" folio ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(widget, area);
}

/// Draw the toggle button; draws nothing when there is no hidden content.
pub fn draw_toggle(frame: &mut Frame, panel: &PanelView, area: Rect) {
    let Some(toggle) = panel.toggle else {
        return;
    };

    let arrow = if toggle.aria_expanded() { "▲" } else { "▼" };
    let button = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("[ {} {} ]", toggle.label(), arrow),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  space", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
