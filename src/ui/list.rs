// Project list rendering.
// Draws repository cards plus the loading, empty, and error placeholders.

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::state::{EMPTY_TEXT, ERROR_TEXT, LOADING_TEXT, PanelBody, PanelView};
use crate::util::format_relative_time;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, block: Block) {
    let text = Paragraph::new(format!("⏳ {}", LOADING_TEXT))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(block);
    frame.render_widget(text, area);
}

/// Render the fetch failure placeholder.
pub fn render_error(frame: &mut Frame, area: Rect, block: Block) {
    let text = Paragraph::new(format!("❌ {}", ERROR_TEXT))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .block(block);
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, block: Block) {
    let text = Paragraph::new(EMPTY_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

/// Render the projects panel body.
pub fn render_projects(frame: &mut Frame, panel: &mut PanelView, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Projects ");

    match &panel.body {
        PanelBody::Loading => render_loading(frame, area, block),
        PanelBody::Error => render_error(frame, area, block),
        PanelBody::Empty => render_empty(frame, area, block),
        PanelBody::List(_) => {
            let now = Utc::now();
            let items: Vec<ListItem> = panel
                .displayed()
                .into_iter()
                .map(|card| {
                    let mut title = vec![
                        Span::styled(
                            card.name.clone(),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  ★ {}", card.stars),
                            Style::default().fg(Color::Yellow),
                        ),
                    ];
                    if !card.language.is_empty() {
                        title.push(Span::styled(
                            format!("  {}", card.language),
                            Style::default().fg(Color::Magenta),
                        ));
                    }
                    title.push(Span::styled(
                        format!("  {}", format_relative_time(&card.updated_at, now)),
                        Style::default().fg(Color::DarkGray),
                    ));

                    let mut lines = vec![Line::from(title)];
                    if !card.description.is_empty() {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", card.description),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                    ListItem::new(lines)
                })
                .collect();

            let list_widget = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, &mut panel.list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::portfolio::{Display, RepoCard};
    use crate::portfolio::ranking::tests::repo;

    fn draw(panel: &mut PanelView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_projects(frame, panel, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_placeholders_drawn() {
        let mut panel = PanelView::new();
        assert!(draw(&mut panel).contains("Loading projects"));

        panel.show_empty();
        assert!(draw(&mut panel).contains("No projects found."));

        panel.show_error();
        assert!(draw(&mut panel).contains("Unable to load projects."));
    }

    #[test]
    fn test_hidden_cards_not_drawn() {
        let mut panel = PanelView::new();
        panel.show_list(vec![
            RepoCard::new(&repo("shown", 2, 1), false),
            RepoCard::new(&repo("tucked", 1, 1), true),
        ]);
        let screen = draw(&mut panel);
        assert!(screen.contains("shown"));
        assert!(!screen.contains("tucked"));

        panel.set_hidden_revealed(true);
        assert!(draw(&mut panel).contains("tucked"));
    }
}
