//! UI components for the dashboard panels

pub mod alert_list;
pub mod status_bar;
pub mod task_list;

pub use alert_list::AlertList;
pub use status_bar::StatusBar;
pub use task_list::TasksList;
