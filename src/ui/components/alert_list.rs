//! Alert feed component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::alerts::Severity;

/// Alert feed component
pub struct AlertList;

impl AlertList {
    /// Render the alert feed
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let items: Vec<ListItem> = app
            .alerts
            .alerts()
            .iter()
            .map(|alert| {
                // Unrecognized severities render unstyled and without an icon.
                let line = match alert.severity {
                    Some(severity) => Line::from(vec![
                        Span::styled(
                            format!("{} ", app.icons.severity_icon(severity)),
                            Style::default().fg(severity_color(severity)),
                        ),
                        Span::styled(
                            alert.message.clone(),
                            Style::default().fg(severity_color(severity)),
                        ),
                    ]),
                    None => Line::from(alert.message.clone()),
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alerts (a: dismiss, A: clear) "),
        );
        f.render_widget(list, area);
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}
