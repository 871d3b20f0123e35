//! Taskdash - a terminal dashboard for server background tasks
//!
//! This library keeps a terminal client in sync with a dashboard server's
//! background-job queue: it polls the task endpoint with an adaptive
//! interval, reconciles the reported task list against local UI state,
//! surfaces action results as dismissible alerts, and provides helpers for
//! table-cell rendering and bulk actions on selected rows. The interactive
//! UI is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`board`] - Task-list reconciliation state machine and poll pacing
//! * [`client`] - HTTP client for the task and action endpoints
//! * [`config`] - Application configuration management
//! * [`reconciler`] - The polling loop driving the board
//! * [`table`] - Cell rendering and bulk-action helpers
//! * [`ui`] - Terminal user interface components

/// Dismissible alert feed fed by server responses
pub mod alerts;

/// Task board state machine and adaptive poll pacing
pub mod board;

/// HTTP client layer and the `TaskApi` seam
pub mod client;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// Wire-format records, task entity, and view-models
pub mod model;

/// Polling reconciler keeping the board in sync with the server
pub mod reconciler;

/// Data-table helpers: cell rendering and bulk actions
pub mod table;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the core types for convenient access
pub use board::{BoardUpdate, PollPacer, TaskBoard, TaskEffect};
pub use model::{Task, TaskRecord, TaskStatus, TaskView};
