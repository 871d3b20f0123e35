use std::time::Duration;

use serde_json::json;

use taskdash::board::{PollPacer, TaskBoard, TaskEffect};
use taskdash::model::{TaskRecord, TaskStatus};

fn records(v: serde_json::Value) -> Vec<TaskRecord> {
    serde_json::from_value(v).unwrap()
}

#[test]
fn first_poll_creates_and_places_a_pending_task() {
    let mut board = TaskBoard::new();
    let mut pacer = PollPacer::default();

    let update = board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["PENDING", 0], "descr": "Indexing"}
    ])));

    assert_eq!(
        update.effects,
        vec![TaskEffect::Placed {
            id: "a".to_string(),
            after: None,
            first_add: true,
        }]
    );
    assert!(update.has_running);

    let views = board.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].status, TaskStatus::Pending);

    // A running task pins the poll interval at the minimum.
    assert_eq!(pacer.after_update(update.has_running), Duration::from_millis(1000));
}

#[test]
fn empty_poll_removes_the_task_and_backs_off() {
    let mut board = TaskBoard::new();
    let mut pacer = PollPacer::default();

    let update = board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["PENDING", 0], "descr": "Indexing"}
    ])));
    pacer.after_update(update.has_running);

    let update = board.set_tasks(&records(json!([])));
    assert_eq!(
        update.effects,
        vec![TaskEffect::Removed { id: "a".to_string() }]
    );
    assert!(!update.has_running);
    assert!(board.is_empty());

    // Nothing running: interval doubles from the minimum.
    assert_eq!(pacer.after_update(update.has_running), Duration::from_millis(2000));
}

#[test]
fn set_tasks_is_idempotent_on_stable_input() {
    let input = records(json!([
        {"task_id": "a", "status": ["STARTED", 1], "descr": "Index"},
        {"task_id": "b", "status": ["PENDING", null], "descr": "Search"}
    ]));

    let mut board = TaskBoard::new();
    board.set_tasks(&input);
    let first_views = board.views();
    let first_ids = board.ids().to_vec();

    let update = board.set_tasks(&input);
    assert_eq!(board.views(), first_views);
    assert_eq!(board.ids(), first_ids.as_slice());

    // Re-placement happens in input order but nothing fades in again.
    assert_eq!(
        update.effects,
        vec![
            TaskEffect::Placed {
                id: "a".to_string(),
                after: None,
                first_add: false,
            },
            TaskEffect::Placed {
                id: "b".to_string(),
                after: Some("a".to_string()),
                first_add: false,
            },
        ]
    );
}

#[test]
fn dropped_ids_leave_the_tracking_map_after_one_call() {
    let mut board = TaskBoard::new();
    board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["STARTED", null], "descr": "one"},
        {"task_id": "b", "status": ["STARTED", null], "descr": "two"}
    ])));

    board.set_tasks(&records(json!([
        {"task_id": "b", "status": ["STARTED", null], "descr": "two"}
    ])));

    assert_eq!(board.ids(), ["b".to_string()].as_slice());
}

#[test]
fn board_adopts_the_server_order() {
    let mut board = TaskBoard::new();
    board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["SUCCESS", null], "descr": "one"},
        {"task_id": "b", "status": ["STARTED", null], "descr": "two"}
    ])));

    // Server re-sorts: b now comes first.
    let update = board.set_tasks(&records(json!([
        {"task_id": "b", "status": ["STARTED", null], "descr": "two"},
        {"task_id": "a", "status": ["SUCCESS", null], "descr": "one"}
    ])));

    assert_eq!(board.ids(), ["b".to_string(), "a".to_string()].as_slice());
    assert_eq!(
        update.effects,
        vec![
            TaskEffect::Placed {
                id: "b".to_string(),
                after: None,
                first_add: false,
            },
            TaskEffect::Placed {
                id: "a".to_string(),
                after: Some("b".to_string()),
                first_add: false,
            },
        ]
    );
}

#[test]
fn retry_is_settled_for_scheduling() {
    let mut board = TaskBoard::new();
    let update = board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["RETRY", null], "descr": "flaky"}
    ])));
    assert!(!update.has_running);
}

#[test]
fn unrecognized_status_counts_as_running() {
    let mut board = TaskBoard::new();
    let update = board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["REVOKED", null], "descr": "odd"}
    ])));
    assert!(update.has_running);
}

#[test]
fn clear_emits_a_removal_per_task() {
    let mut board = TaskBoard::new();
    board.set_tasks(&records(json!([
        {"task_id": "a", "status": ["STARTED", null], "descr": "one"},
        {"task_id": "b", "status": ["STARTED", null], "descr": "two"}
    ])));

    let effects = board.clear();
    assert_eq!(
        effects,
        vec![
            TaskEffect::Removed { id: "a".to_string() },
            TaskEffect::Removed { id: "b".to_string() },
        ]
    );
    assert!(board.is_empty());
}
