//! Render functions for the news page.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{cards, status};

/// Minimum terminal dimensions required for normal operation.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;

/// Main render pass: header, card list, pagination summary, status bar.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    cards::render(f, app, chunks[1]);
    render_pagination(f, app, chunks[2]);
    status::render(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Software Testing News Hub",
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  ·  {}", app.config.query),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// "Showing X of Y" line; the load-more hint disappears once the cursor
/// covers the whole list.
fn render_pagination(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.summary();
    if summary.total == 0 {
        return;
    }

    let mut text = format!("Showing {} of {} news items", summary.shown, summary.total);
    if summary.has_more() {
        text.push_str("  ·  [m] load more");
    }

    let line = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(line, area);
}
