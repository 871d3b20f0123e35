//! Dismissible alert feed fed by server response bodies.
//!
//! Action responses carry optional `success`/`info`/`warning`/`danger` keys
//! whose values are a single message or an ordered list of messages.
//! [`AlertFeed::result_alerts`] turns those into feed entries and then
//! requests an immediate task re-check, since an action that produced alerts
//! usually also queued background work.

use serde_json::Value;

use crate::reconciler::BoardHandle;

/// Alert severity, in the order response bodies are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Danger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// One feed entry. `severity` is `None` for alerts raised with an
/// unrecognized severity; those render unstyled and without an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub severity: Option<Severity>,
    pub message: String,
}

/// Ordered list of live alerts plus the handle used to poke the reconciler.
pub struct AlertFeed {
    alerts: Vec<Alert>,
    next_id: u64,
    board: BoardHandle,
}

impl AlertFeed {
    pub fn new(board: BoardHandle) -> Self {
        Self {
            alerts: Vec::new(),
            next_id: 1,
            board,
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Append one alert and return its id.
    pub fn show_alert(&mut self, message: impl Into<String>, severity: Option<Severity>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    /// Dismiss one alert; returns whether it was present, so the caller can
    /// stop the triggering event from propagating further.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    pub fn dismiss_oldest(&mut self) -> bool {
        if self.alerts.is_empty() {
            return false;
        }
        self.alerts.remove(0);
        true
    }

    pub fn clear_all(&mut self) {
        self.alerts.clear();
    }

    /// Scan an action response body for severity keys and show every message
    /// found, in severity order, then request an immediate task re-check at
    /// the minimum poll interval.
    pub fn result_alerts(&mut self, body: &Value) {
        for severity in Severity::ALL {
            let Some(value) = body.get(severity.as_str()) else {
                continue;
            };
            match value {
                Value::Null => {}
                Value::Array(messages) => {
                    for message in messages {
                        self.show_alert(message_text(message), Some(severity));
                    }
                }
                single => {
                    self.show_alert(message_text(single), Some(severity));
                }
            }
        }

        self.board.refresh(true);
    }
}

/// Display text for an alert message value; strings stay unquoted, anything
/// else falls back to its JSON rendering.
fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dismiss_removes_only_the_clicked_alert() {
        let (handle, _rx) = BoardHandle::detached();
        let mut feed = AlertFeed::new(handle);
        let first = feed.show_alert("one", Some(Severity::Info));
        let second = feed.show_alert("two", Some(Severity::Danger));

        assert!(feed.dismiss(first));
        assert!(!feed.dismiss(first));
        assert_eq!(feed.alerts().len(), 1);
        assert_eq!(feed.alerts()[0].id, second);
    }

    #[test]
    fn result_alerts_skips_null_values() {
        let (handle, _rx) = BoardHandle::detached();
        let mut feed = AlertFeed::new(handle);
        feed.result_alerts(&json!({"info": null, "warning": "low disk"}));

        assert_eq!(feed.alerts().len(), 1);
        assert_eq!(feed.alerts()[0].message, "low disk");
        assert_eq!(feed.alerts()[0].severity, Some(Severity::Warning));
    }
}
