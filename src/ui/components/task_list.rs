//! Task notification list component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::icons::IconService;
use crate::model::{TaskStatus, TaskView};

/// Task notification list component
pub struct TasksList;

impl TasksList {
    /// Render the task list
    pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
        let icons = app.icons.clone();
        let arrived = &app.arrived;

        let mut items: Vec<ListItem<'static>> = app
            .tasks
            .iter()
            .map(|view| {
                let mut style = Style::default().fg(status_color(&view.status));
                if arrived.contains_key(&view.id) {
                    // Fade-in stand-in: new entries arrive bold.
                    style = style.add_modifier(Modifier::BOLD);
                }
                task_item(&icons, view, style)
            })
            .collect();

        // Entries mid fade-out render dimmed below the live list.
        for (view, _) in &app.leaving {
            items.push(task_item(
                &icons,
                view,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let title = format!(" Background Tasks ({}) ", app.tasks.len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, area, &mut app.task_list_state);
    }
}

fn task_item(icons: &IconService, view: &TaskView, style: Style) -> ListItem<'static> {
    let icon = icons.task_icon(&view.status);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{icon} "), style),
        Span::styled(view.heading.clone(), style.add_modifier(Modifier::BOLD)),
    ])];

    if let Some(message) = &view.message {
        let text = match &view.link {
            Some(link) => format!("  {message} → {link}"),
            None => format!("  {message}"),
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Gray),
        )));
    }

    ListItem::new(lines)
}

/// List entry color for one task status; unrecognized statuses get the
/// generic in-progress treatment.
fn status_color(status: &TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Cyan,
        TaskStatus::Started => Color::Yellow,
        TaskStatus::Retry | TaskStatus::Failure => Color::Red,
        TaskStatus::Success => Color::Green,
        TaskStatus::Other(_) => Color::Yellow,
    }
}
