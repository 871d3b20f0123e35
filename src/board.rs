//! The task board: pure reconciliation state for the notification list.
//!
//! [`TaskBoard`] exclusively owns the id→[`Task`] map and the display order.
//! Applying a poll result yields a list of [`TaskEffect`]s describing what
//! the presentation layer should animate; the board itself performs no IO
//! and touches no UI, which keeps the diffing logic unit-testable.

use std::collections::HashMap;
use std::time::Duration;

use crate::constants::{POLL_BACKOFF_MULTIPLIER, POLL_INTERVAL_MAX_MS, POLL_INTERVAL_MIN_MS};
use crate::model::{Task, TaskRecord, TaskView};

/// One presentation-layer instruction produced by a board update.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEffect {
    /// The task left the server's list (or was dismissed); fade it out.
    Removed { id: String },
    /// The task belongs immediately after `after` (or first when `None`).
    /// `first_add` entries fade in; repositioned entries do not.
    Placed {
        id: String,
        after: Option<String>,
        first_add: bool,
    },
}

/// Result of applying one poll response to the board.
#[derive(Debug, Clone)]
pub struct BoardUpdate {
    pub effects: Vec<TaskEffect>,
    /// Whether any tracked task is still in a running state.
    pub has_running: bool,
}

#[derive(Default)]
pub struct TaskBoard {
    tasks: HashMap<String, Task>,
    order: Vec<String>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Ordered view-models for every tracked task.
    pub fn views(&self) -> Vec<TaskView> {
        self.order
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .map(Task::view)
            .collect()
    }

    /// Reconcile the board against the latest server-reported task list.
    ///
    /// Records arrive server-sorted by start time and the board adopts that
    /// order wholesale. Existing tasks in a non-settled state are updated in
    /// place; ids already settled stay frozen at their last rendered state;
    /// unseen ids create fresh tasks. Anything the server no longer reports
    /// is dropped with a removal effect.
    pub fn set_tasks(&mut self, records: &[TaskRecord]) -> BoardUpdate {
        let mut new_tasks: HashMap<String, Task> = HashMap::new();
        let mut new_order: Vec<String> = Vec::new();
        let mut first_adds: Vec<bool> = Vec::new();

        for record in records {
            let id = record.task_id.clone();
            let (task, first_add) = match self.tasks.remove(&id) {
                Some(mut existing) => {
                    if !existing.status.is_settled() {
                        existing.update(record);
                    }
                    (existing, false)
                }
                None => (Task::new(record), true),
            };
            if !new_tasks.contains_key(&id) {
                new_order.push(id.clone());
                first_adds.push(first_add);
            }
            new_tasks.insert(id, task);
        }

        // Whatever is left in the old map no longer appears in the response.
        let mut effects: Vec<TaskEffect> = Vec::new();
        let mut stale: Vec<&String> = self.tasks.keys().collect();
        stale.sort();
        for id in stale {
            effects.push(TaskEffect::Removed { id: id.clone() });
        }

        let mut has_running = false;
        let mut last: Option<String> = None;
        for (id, first_add) in new_order.iter().zip(first_adds) {
            effects.push(TaskEffect::Placed {
                id: id.clone(),
                after: last.clone(),
                first_add,
            });
            last = Some(id.clone());

            if let Some(task) = new_tasks.get(id) {
                if !task.status.is_settled() {
                    has_running = true;
                }
            }
        }

        self.tasks = new_tasks;
        self.order = new_order;

        BoardUpdate {
            effects,
            has_running,
        }
    }

    /// Drop one task locally, returning its removal effect if it was tracked.
    pub fn remove(&mut self, id: &str) -> Option<TaskEffect> {
        self.tasks.remove(id)?;
        self.order.retain(|tracked| tracked != id);
        Some(TaskEffect::Removed { id: id.to_string() })
    }

    /// Drop every tracked task locally.
    pub fn clear(&mut self) -> Vec<TaskEffect> {
        self.tasks.clear();
        self.order
            .drain(..)
            .map(|id| TaskEffect::Removed { id })
            .collect()
    }
}

/// Adaptive poll pacing: fast while anything is running, multiplicative
/// backoff (clamped) once everything has settled. No jitter.
#[derive(Debug, Clone)]
pub struct PollPacer {
    current: Duration,
    min: Duration,
    max: Duration,
    multiplier: u32,
}

impl Default for PollPacer {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(POLL_INTERVAL_MIN_MS),
            Duration::from_millis(POLL_INTERVAL_MAX_MS),
            POLL_BACKOFF_MULTIPLIER as u32,
        )
    }
}

impl PollPacer {
    pub fn new(min: Duration, max: Duration, multiplier: u32) -> Self {
        Self {
            current: min,
            min,
            max,
            multiplier,
        }
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    /// Snap back to the minimum interval (used to surface fast feedback
    /// right after a user action).
    pub fn reset(&mut self) {
        self.current = self.min;
    }

    /// Advance the interval after a poll and return the new value.
    pub fn after_update(&mut self, has_running: bool) -> Duration {
        if has_running {
            self.current = self.min;
        } else {
            self.current = (self.current * self.multiplier).min(self.max);
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(v: serde_json::Value) -> Vec<TaskRecord> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn settled_tasks_are_frozen() {
        let mut board = TaskBoard::new();
        board.set_tasks(&records(json!([
            {"task_id": "a", "descr": "first pass", "status": ["SUCCESS", null],
             "task": {"status": "SUCCESS", "result": {"msg": "done"}, "meta": {}}}
        ])));

        // A later poll claims the task went back to STARTED; the frozen
        // entry keeps its settled state.
        board.set_tasks(&records(json!([
            {"task_id": "a", "descr": "changed", "status": ["STARTED", 1]}
        ])));

        let views = board.views();
        assert_eq!(views[0].heading, "first pass");
        assert_eq!(views[0].message.as_deref(), Some("done"));
    }

    #[test]
    fn pacer_backs_off_and_clamps() {
        let mut pacer = PollPacer::default();
        assert_eq!(pacer.after_update(false), Duration::from_millis(2000));
        assert_eq!(pacer.after_update(false), Duration::from_millis(4000));
        assert_eq!(pacer.after_update(false), Duration::from_millis(8000));
        assert_eq!(pacer.after_update(false), Duration::from_millis(8000));
        assert_eq!(pacer.after_update(true), Duration::from_millis(1000));
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut board = TaskBoard::new();
        assert_eq!(board.remove("ghost"), None);
    }
}
