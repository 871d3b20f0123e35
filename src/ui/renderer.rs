//! Main UI rendering and coordination

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::app::App;
use super::components::{AlertList, StatusBar, TasksList};
use super::events::handle_events;
use crate::board::PollPacer;
use crate::client::HttpTaskApi;
use crate::config::Config;
use crate::icons::IconService;
use crate::reconciler::{Reconciler, UiEvent};

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire the reconciler to the UI through an event channel.
    let api = Arc::new(HttpTaskApi::new(
        config.server.task_url.clone(),
        config.server.csrf_token.clone(),
    ));
    let pacer = PollPacer::new(
        Duration::from_millis(config.polling.min_interval_ms),
        Duration::from_millis(config.polling.max_interval_ms),
        config.polling.backoff_multiplier as u32,
    );
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let board = Reconciler::spawn(api, pacer, events_tx);

    let mut app = App::new(board, IconService::new(config.ui.icon_theme));

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &mut events_rx).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<()> {
    loop {
        // Drain everything the reconciler produced since the last draw.
        while let Ok(ui_event) = events_rx.try_recv() {
            app.apply_ui_event(ui_event);
        }
        app.tick();

        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so reconciler events keep flowing even when
        // the keyboard is idle.
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match ev {
                Event::Key(_) => {
                    handle_events(&ev, app);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the complete UI
fn render_ui(f: &mut Frame, app: &mut App) {
    let alert_height = if app.alerts.alerts().is_empty() {
        0
    } else {
        (app.alerts.alerts().len().min(4) + 2) as u16
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(alert_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    if alert_height > 0 {
        AlertList::render(f, chunks[0], app);
    }
    TasksList::render(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app);
}
