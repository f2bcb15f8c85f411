use crate::app::{App, FetchState};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the visible news cards, or the appropriate placeholder when
/// there is nothing to show.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let cards = app.page();

    if cards.is_empty() {
        // Distinct messages: still loading, genuinely empty, or broken
        let msg = match app.fetch_state {
            FetchState::Loading => "Fetching latest news...",
            FetchState::Ready => "No news items found. Please try again later.",
            FetchState::Failed => "Could not fetch the news feed. Press [r] to retry.",
        };
        let placeholder = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("News"));
        f.render_widget(placeholder, area);
        return;
    }

    // Borders eat two columns; one more each side for padding
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let title_style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![Line::from(Span::styled(
                truncate_to_width(&card.title, text_width).into_owned(),
                title_style,
            ))];

            if let Some(date) = &card.date {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(date, text_width).into_owned(),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            if let Some(desc) = &card.description {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(desc, text_width).into_owned(),
                    Style::default().fg(Color::Gray),
                )));
            }

            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("News"));

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}
