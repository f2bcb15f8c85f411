use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

/// Render the status bar: in-flight fetch, transient messages, or
/// keybinding hints.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if app.fetching {
        Cow::Borrowed("Fetching latest news...")
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_str())
    } else {
        Cow::Borrowed("[r]efresh [m]ore [j/k]select [o]pen [q]uit")
    };

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);
    f.render_widget(Paragraph::new(text).style(style), area);
}
