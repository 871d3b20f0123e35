//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::HELP_SHORTCUTS;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let running = app
            .tasks
            .iter()
            .filter(|t| !t.status.is_settled())
            .count();

        let status_text = if running > 0 {
            format!("🔄 {running} task(s) running • {HELP_SHORTCUTS}")
        } else {
            HELP_SHORTCUTS.to_string()
        };

        let status_color = if running > 0 { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
