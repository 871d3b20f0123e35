//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to pick per-status and
//! per-severity icons throughout the dashboard, supporting emoji, Unicode,
//! and ASCII fallbacks for terminals with limited glyph support.

use serde::{Deserialize, Serialize};

use crate::alerts::Severity;
use crate::model::TaskStatus;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Icons for each task status
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub started: &'static str,
    pub retry: &'static str,
    pub failure: &'static str,
    pub success: &'static str,
    /// Generic in-progress treatment for unrecognized statuses.
    pub other: &'static str,
}

/// Icons for each alert severity
#[derive(Debug, Clone)]
pub struct SeverityIcons {
    pub success: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub severity: SeverityIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Icon for one task status
    #[must_use]
    pub fn task_icon(&self, status: &TaskStatus) -> &'static str {
        let icons = self.icons().task_status;
        match status {
            TaskStatus::Pending => icons.pending,
            TaskStatus::Started => icons.started,
            TaskStatus::Retry => icons.retry,
            TaskStatus::Failure => icons.failure,
            TaskStatus::Success => icons.success,
            TaskStatus::Other(_) => icons.other,
        }
    }

    /// Icon for one alert severity
    #[must_use]
    pub fn severity_icon(&self, severity: Severity) -> &'static str {
        let icons = self.icons().severity;
        match severity {
            Severity::Success => icons.success,
            Severity::Info => icons.info,
            Severity::Warning => icons.warning,
            Severity::Danger => icons.danger,
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                started: "⚙️",
                retry: "🔄",
                failure: "⚠️",
                success: "✅",
                other: "⚙️",
            },
            severity: SeverityIcons {
                success: "✅",
                info: "💡",
                warning: "⚡",
                danger: "❌",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "◌",
                started: "⚙",
                retry: "↻",
                failure: "⚠",
                success: "✓",
                other: "⚙",
            },
            severity: SeverityIcons {
                success: "✓",
                info: "ⓘ",
                warning: "⚡",
                danger: "!",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                started: "[~]",
                retry: "[R]",
                failure: "[!]",
                success: "[X]",
                other: "[~]",
            },
            severity: SeverityIcons {
                success: "+",
                info: "i",
                warning: "*",
                danger: "!",
            },
        }
    }
}
