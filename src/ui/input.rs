//! Key handling for the news page.

use crate::app::{App, AppEvent};
use anyhow::Result;
use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use super::loop_runner::Action;

/// Dispatch a key press.
///
/// `r` and `m` are the two triggers the core exposes: refresh (re-fetch,
/// cursor preserved) and load more (advance the cursor). Everything else
/// is local navigation.
pub fn handle_input(
    app: &mut App,
    key: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Action::Quit),

        KeyCode::Char('r') => {
            app.refresh(event_tx);
        }

        KeyCode::Char('m') | KeyCode::Enter => {
            app.load_more(event_tx);
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::Char('g') | KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::Char('G') | KeyCode::End => app.move_selection(isize::MAX),

        KeyCode::Char('o') => {
            if let Some(link) = app.selected_link() {
                let link = link.to_string();
                if let Err(e) = open::that(&link) {
                    tracing::warn!(error = %e, link = %link, "Failed to open browser");
                    app.set_status(format!("Failed to open browser: {}", e));
                } else {
                    app.set_status("Opened in browser");
                }
            }
        }

        _ => {}
    }

    Ok(Action::Continue)
}
