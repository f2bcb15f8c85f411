use crate::app::{App, AppEvent};

/// Fold a background task event into app state.
pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FetchCompleted { generation, result } => {
            app.apply_fetch(generation, result);
        }
    }
}
