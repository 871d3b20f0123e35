//! Polling reconciler: keeps the task board in sync with the server.
//!
//! The reconciler owns the [`TaskBoard`] and drives it from a single async
//! loop: sleep until the next poll deadline, or act on a command arriving on
//! the board channel. A refresh command supersedes the pending timer, so at
//! most one poll is ever scheduled.
//!
//! Policy, stated explicitly: only the *pending timer* is ever cancelled.
//! An HTTP request already in flight is never aborted; if responses overlap,
//! they apply to the board in arrival order and the last writer wins.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::alerts::Severity;
use crate::board::{PollPacer, TaskBoard, TaskEffect};
use crate::client::TaskApi;
use crate::model::TaskView;

/// Events the reconciler pushes to the presentation layer.
#[derive(Debug)]
pub enum UiEvent {
    /// Board contents changed: the effects to animate plus the full ordered
    /// set of view-models after the change.
    Tasks {
        effects: Vec<TaskEffect>,
        views: Vec<TaskView>,
    },
    /// A failure the user should see in the alert feed.
    Alert {
        severity: Severity,
        message: String,
    },
}

/// Commands accepted by the reconciler loop. Exposed so embedders can drive
/// a board without the bundled TUI; most callers use [`BoardHandle`].
#[derive(Debug)]
pub enum BoardCommand {
    /// Poll now instead of at the scheduled deadline. `reset` snaps the poll
    /// interval back to the minimum first (used right after a user action).
    Refresh { reset: bool },
    /// Acknowledge one task and drop it locally without waiting for the
    /// server or the next poll.
    ClearTask(String),
    /// Acknowledge every tracked task and drop them all locally.
    ClearAll,
    Shutdown,
}

/// Cloneable handle for poking the reconciler from anywhere in the app.
#[derive(Clone)]
pub struct BoardHandle {
    tx: mpsc::UnboundedSender<BoardCommand>,
}

impl BoardHandle {
    pub fn refresh(&self, reset: bool) {
        let _ = self.tx.send(BoardCommand::Refresh { reset });
    }

    pub fn clear_task(&self, id: impl Into<String>) {
        let _ = self.tx.send(BoardCommand::ClearTask(id.into()));
    }

    pub fn clear_all(&self) {
        let _ = self.tx.send(BoardCommand::ClearAll);
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(BoardCommand::Shutdown);
    }

    /// A handle with no reconciler behind it; the paired receiver exposes
    /// whatever commands were sent. Useful in tests and embedding scenarios.
    pub fn detached() -> (Self, mpsc::UnboundedReceiver<BoardCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

pub struct Reconciler {
    api: Arc<dyn TaskApi>,
    board: TaskBoard,
    pacer: PollPacer,
    events: mpsc::UnboundedSender<UiEvent>,
    commands: mpsc::UnboundedReceiver<BoardCommand>,
}

impl Reconciler {
    pub fn new(
        api: Arc<dyn TaskApi>,
        pacer: PollPacer,
        events: mpsc::UnboundedSender<UiEvent>,
    ) -> (Self, BoardHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                api,
                board: TaskBoard::new(),
                pacer,
                events,
                commands: rx,
            },
            BoardHandle { tx },
        )
    }

    /// Spawn a reconciler on the runtime and return its handle.
    pub fn spawn(
        api: Arc<dyn TaskApi>,
        pacer: PollPacer,
        events: mpsc::UnboundedSender<UiEvent>,
    ) -> BoardHandle {
        let (reconciler, handle) = Self::new(api, pacer, events);
        tokio::spawn(reconciler.run());
        handle
    }

    /// Run the poll loop until shutdown or until every handle is dropped.
    pub async fn run(mut self) {
        // First poll fires immediately so the dashboard fills in on startup.
        let mut deadline = Instant::now();
        loop {
            tokio::select! {
                _ = sleep_until(deadline) => {
                    self.check().await;
                    deadline = Instant::now() + self.pacer.current();
                }
                command = self.commands.recv() => match command {
                    None | Some(BoardCommand::Shutdown) => break,
                    Some(BoardCommand::Refresh { reset }) => {
                        if reset {
                            self.pacer.reset();
                        }
                        self.check().await;
                        deadline = Instant::now() + self.pacer.current();
                    }
                    // Clears don't reschedule; the pending deadline stands.
                    Some(BoardCommand::ClearTask(id)) => self.clear_one(id).await,
                    Some(BoardCommand::ClearAll) => self.clear_all().await,
                }
            }
        }
    }

    /// Fetch the task list and reconcile the board against it.
    async fn check(&mut self) {
        match self.api.fetch_tasks().await {
            Ok(records) => {
                debug!("task check returned {} records", records.len());
                let update = self.board.set_tasks(&records);
                self.pacer.after_update(update.has_running);
                self.send_views(update.effects);
            }
            Err(err) => {
                warn!("task check failed: {err}");
                self.pacer.after_update(false);
                let _ = self.events.send(UiEvent::Alert {
                    severity: Severity::Danger,
                    message: format!("Task check failed: {err}"),
                });
            }
        }
    }

    /// Acknowledge one task and drop it locally right away.
    async fn clear_one(&mut self, id: String) {
        self.ack_in_background(vec![id.clone()]);
        if let Some(effect) = self.board.remove(&id) {
            self.send_views(vec![effect]);
        }
    }

    /// Acknowledge every tracked task in one request and drop them all.
    async fn clear_all(&mut self) {
        self.ack_in_background(self.board.ids().to_vec());
        let effects = self.board.clear();
        if !effects.is_empty() {
            self.send_views(effects);
        }
    }

    /// Fire-and-forget acknowledgment; the response is never consumed, but
    /// failures are still logged instead of silently dropped.
    fn ack_in_background(&self, ids: Vec<String>) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(err) = api.ack_tasks(&ids).await {
                warn!("task acknowledgment failed: {err}");
            }
        });
    }

    fn send_views(&self, effects: Vec<TaskEffect>) {
        let _ = self.events.send(UiEvent::Tasks {
            effects,
            views: self.board.views(),
        });
    }
}
