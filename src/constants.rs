//! Constants used throughout the application
//!
//! This module centralizes polling parameters, wire-protocol field names,
//! and UI text to keep them consistent between the library and the TUI.

// Polling parameters (milliseconds). The interval starts at the minimum,
// doubles after every quiet poll, and clamps at the maximum.
pub const POLL_INTERVAL_MIN_MS: u64 = 1000;
pub const POLL_INTERVAL_MAX_MS: u64 = 8000;
pub const POLL_BACKOFF_MULTIPLIER: u64 = 2;

// Wire protocol field names expected by the server.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const TASK_ACK_FIELD: &str = "task";
/// Default request-body attribute for the selected-row key list.
pub const DEFAULT_DEST_ATTR: &str = "rows";

// Transition timing (milliseconds), matching the dashboard's fade speeds.
pub const FADE_OUT_MS: u64 = 400;
pub const FADE_IN_MS: u64 = 1000;

// Task display.
/// Maximum characters of a task description shown in the list entry.
pub const DESCR_DISPLAY_LEN: usize = 30;
/// Label used for a result link that arrives without a message.
pub const RESULTS_LINK_TEXT: &str = "Results";

// UI text.
pub const HELP_SHORTCUTS: &str = "r: refresh • d: dismiss task • C: clear all • a: dismiss alert • q: quit";
pub const ERROR_NO_TASK_URL: &str = "❌ Error: no task endpoint configured";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
