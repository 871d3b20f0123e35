//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEventKind};

use super::app::App;

/// Handle all user input events. Returns whether the event was consumed.
pub fn handle_events(event: &Event, app: &mut App) -> bool {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            return handle_key(key.code, app);
        }
    }
    false
}

fn handle_key(code: KeyCode, app: &mut App) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            true
        }
        KeyCode::Char('r') => {
            app.refresh_tasks();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_task();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_task();
            true
        }
        KeyCode::Char('d') | KeyCode::Enter => {
            app.dismiss_selected_task();
            true
        }
        KeyCode::Char('C') => {
            app.clear_all_tasks();
            true
        }
        KeyCode::Char('a') => app.alerts.dismiss_oldest(),
        KeyCode::Char('A') => {
            app.alerts.clear_all();
            true
        }
        _ => false,
    }
}
