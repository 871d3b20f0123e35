use serde_json::json;

use taskdash::alerts::{AlertFeed, Severity};
use taskdash::reconciler::{BoardCommand, BoardHandle};

#[test]
fn result_alerts_shows_every_message_then_requests_a_refresh() {
    let (handle, mut commands) = BoardHandle::detached();
    let mut feed = AlertFeed::new(handle);

    feed.result_alerts(&json!({
        "danger": ["x failed", "y failed"]
    }));

    let messages: Vec<_> = feed
        .alerts()
        .iter()
        .map(|a| (a.severity, a.message.clone()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (Some(Severity::Danger), "x failed".to_string()),
            (Some(Severity::Danger), "y failed".to_string()),
        ]
    );

    // The scan ends with an immediate re-check at the minimum interval.
    match commands.try_recv() {
        Ok(BoardCommand::Refresh { reset: true }) => {}
        other => panic!("expected a resetting refresh, got {other:?}"),
    }
}

#[test]
fn scan_order_is_severity_order_not_body_order() {
    let (handle, _commands) = BoardHandle::detached();
    let mut feed = AlertFeed::new(handle);

    feed.result_alerts(&json!({
        "danger": "capture offline",
        "success": "search queued",
        "info": ["2 captures selected"]
    }));

    let severities: Vec<_> = feed.alerts().iter().map(|a| a.severity).collect();
    assert_eq!(
        severities,
        vec![
            Some(Severity::Success),
            Some(Severity::Info),
            Some(Severity::Danger),
        ]
    );
}

#[test]
fn single_message_values_are_wrapped() {
    let (handle, _commands) = BoardHandle::detached();
    let mut feed = AlertFeed::new(handle);

    feed.result_alerts(&json!({"success": "done"}));
    assert_eq!(feed.alerts().len(), 1);
    assert_eq!(feed.alerts()[0].message, "done");
}

#[test]
fn bodies_without_severity_keys_show_nothing() {
    let (handle, mut commands) = BoardHandle::detached();
    let mut feed = AlertFeed::new(handle);

    feed.result_alerts(&json!({"rows": [1, 2, 3]}));
    assert!(feed.alerts().is_empty());
    // The re-check still happens.
    assert!(commands.try_recv().is_ok());
}

#[test]
fn unstyled_alerts_are_allowed() {
    let (handle, _commands) = BoardHandle::detached();
    let mut feed = AlertFeed::new(handle);

    let id = feed.show_alert("plain notice", None);
    assert_eq!(feed.alerts()[0].severity, None);
    assert!(feed.dismiss(id));
    assert!(feed.alerts().is_empty());
}
