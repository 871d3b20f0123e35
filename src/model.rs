//! Wire-format task records and the task entity they hydrate.
//!
//! The server reports background jobs as an ordered list of [`TaskRecord`]s.
//! Each record hydrates a [`Task`], which owns the job's UI state and produces
//! a [`TaskView`] on every update. Presentation binding (panels, fades) lives
//! in the `ui` module; nothing here touches the terminal.

use serde::Deserialize;
use serde_json::Value;

use crate::constants::{DESCR_DISPLAY_LEN, RESULTS_LINK_TEXT};

/// One background job as reported by the task endpoint.
///
/// Everything but `task_id` is optional on the wire: records with a missing
/// or null `task` object (or null `result`/`meta` inside it) are tolerated
/// and default to empty, matching what the server actually sends for jobs
/// that haven't been picked up by a worker yet.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub task_id: String,
    /// Server-side start time; kept verbatim, the UI does not interpret it.
    #[serde(default)]
    pub started: Value,
    #[serde(default)]
    pub descr: String,
    /// `[state, progress]` tuple; either element may be missing.
    #[serde(default)]
    pub status: Vec<Value>,
    #[serde(default)]
    pub task: Option<TaskInfo>,
}

/// The worker-reported side of a task record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInfo {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<TaskOutcome>,
    #[serde(default)]
    pub meta: Value,
}

/// Result payload attached to a finished (or progressing) task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskOutcome {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl TaskRecord {
    /// The canonical status string for this record.
    ///
    /// The nested `task.status` wins when the worker has reported one; the
    /// top-level tuple's first element is the fallback for jobs the queue
    /// knows about but no worker has touched. Progress, by contrast, only
    /// ever comes from the tuple (see [`TaskRecord::progress`]).
    pub fn status_str(&self) -> Option<&str> {
        self.task
            .as_ref()
            .and_then(|t| t.status.as_deref())
            .or_else(|| self.status.first().and_then(Value::as_str))
    }

    /// Progress indicator from the status tuple, if any.
    pub fn progress(&self) -> Option<&Value> {
        self.status.get(1).filter(|v| !v.is_null())
    }
}

/// Status of a tracked task.
///
/// Unrecognized server strings land in `Other` and get the generic
/// in-progress visual treatment rather than failing the update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Started,
    Retry,
    Failure,
    Success,
    Other(String),
}

impl TaskStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "PENDING" => Self::Pending,
            "STARTED" => Self::Started,
            "RETRY" => Self::Retry,
            "FAILURE" => Self::Failure,
            "SUCCESS" => Self::Success,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Started => "STARTED",
            Self::Retry => "RETRY",
            Self::Failure => "FAILURE",
            Self::Success => "SUCCESS",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Whether this status stops counting toward the fast poll rate.
    ///
    /// RETRY is settled for scheduling purposes even though it still gets the
    /// danger display treatment; the split is deliberate and matches the
    /// server operators' expectations for retrying jobs.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Failure | Self::Retry)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked background job and its display state.
///
/// The board owns the id→Task map; each `Task` owns only its own fields and
/// renders them into a [`TaskView`] for the presentation layer.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: String,
    pub status: TaskStatus,
    pub progress: Option<Value>,
    pub descr: String,
    pub started: Value,
    pub link: Option<String>,
    pub msg: Option<String>,
    pub meta: Value,
}

impl Task {
    pub fn new(record: &TaskRecord) -> Self {
        let mut task = Self {
            id: record.task_id.clone(),
            status: TaskStatus::Other(String::new()),
            progress: None,
            descr: String::new(),
            started: Value::Null,
            link: None,
            msg: None,
            meta: Value::Null,
        };
        task.update(record);
        task
    }

    /// Refresh this task's fields from a poll record and return the new view.
    pub fn update(&mut self, record: &TaskRecord) -> TaskView {
        self.started = record.started.clone();
        self.descr = record.descr.clone();

        self.status = match record.status_str() {
            Some(s) => TaskStatus::parse(s),
            None => TaskStatus::Other("UNKNOWN".to_string()),
        };
        self.progress = record.progress().cloned();

        let info = record.task.clone().unwrap_or_default();
        let outcome = info.result.unwrap_or_default();
        self.link = outcome.link;
        self.msg = outcome.msg;
        self.meta = info.meta;

        self.view()
    }

    /// Progress rendered as display text, without JSON quoting for strings.
    fn progress_text(&self) -> Option<String> {
        match &self.progress {
            Some(Value::String(s)) => Some(s.clone()),
            Some(v) => Some(v.to_string()),
            None => None,
        }
    }

    /// Build the current view-model for this task.
    pub fn view(&self) -> TaskView {
        let short: String = self.descr.chars().take(DESCR_DISPLAY_LEN).collect();
        let heading = match self.progress_text() {
            Some(p) if self.status != TaskStatus::Success => format!("({p}) {short}"),
            _ => short,
        };

        // A bare link still gets a clickable label.
        let message = if self.link.is_some() || self.msg.is_some() {
            Some(
                self.msg
                    .clone()
                    .unwrap_or_else(|| RESULTS_LINK_TEXT.to_string()),
            )
        } else {
            None
        };

        TaskView {
            id: self.id.clone(),
            status: self.status.clone(),
            heading,
            title: format!("({}) {}", self.status, self.descr),
            message,
            link: self.link.clone(),
        }
    }
}

/// View-model for one task list entry.
///
/// This is everything the presentation layer needs to draw the entry; it
/// carries no references back into the board.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub id: String,
    pub status: TaskStatus,
    /// Short description line, progress-prefixed while the job is running.
    pub heading: String,
    /// Full `(STATUS) description` tooltip text.
    pub title: String,
    pub message: Option<String>,
    pub link: Option<String>,
}
