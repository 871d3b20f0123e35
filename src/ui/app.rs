//! Application state and business logic

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::alerts::AlertFeed;
use crate::board::TaskEffect;
use crate::constants::{FADE_IN_MS, FADE_OUT_MS};
use crate::icons::IconService;
use crate::model::TaskView;
use crate::reconciler::{BoardHandle, UiEvent};

/// Application state
pub struct App {
    pub should_quit: bool,
    /// Ordered task views as of the last board update.
    pub tasks: Vec<TaskView>,
    /// Tasks fading out of the list, with their removal time.
    pub leaving: Vec<(TaskView, Instant)>,
    /// First-seen time of tasks still fading in, keyed by id.
    pub arrived: HashMap<String, Instant>,
    pub alerts: AlertFeed,
    pub selected_task_index: usize,
    pub task_list_state: ListState,
    pub board: BoardHandle,
    pub icons: IconService,
}

impl App {
    #[must_use]
    pub fn new(board: BoardHandle, icons: IconService) -> Self {
        let mut task_list_state = ListState::default();
        task_list_state.select(Some(0));

        Self {
            should_quit: false,
            tasks: Vec::new(),
            leaving: Vec::new(),
            arrived: HashMap::new(),
            alerts: AlertFeed::new(board.clone()),
            selected_task_index: 0,
            task_list_state,
            board,
            icons,
        }
    }

    /// Apply one event from the reconciler.
    pub fn apply_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Tasks { effects, views } => {
                let now = Instant::now();
                for effect in effects {
                    match effect {
                        TaskEffect::Removed { id } => {
                            if let Some(view) = self.tasks.iter().find(|t| t.id == id) {
                                self.leaving.push((view.clone(), now));
                            }
                            self.arrived.remove(&id);
                        }
                        TaskEffect::Placed { id, first_add, .. } => {
                            if first_add {
                                self.arrived.insert(id, now);
                            }
                        }
                    }
                }
                self.tasks = views;
                self.clamp_selection();
            }
            UiEvent::Alert { severity, message } => {
                self.alerts.show_alert(message, Some(severity));
            }
        }
    }

    /// Advance transient animation state; called once per draw.
    pub fn tick(&mut self) {
        let fade_out = Duration::from_millis(FADE_OUT_MS);
        let fade_in = Duration::from_millis(FADE_IN_MS);
        self.leaving.retain(|(_, at)| at.elapsed() < fade_out);
        self.arrived.retain(|_, at| at.elapsed() < fade_in);
    }

    pub fn is_arriving(&self, id: &str) -> bool {
        self.arrived.contains_key(id)
    }

    pub fn select_next_task(&mut self) {
        if !self.tasks.is_empty() && self.selected_task_index + 1 < self.tasks.len() {
            self.selected_task_index += 1;
        }
        self.task_list_state.select(Some(self.selected_task_index));
    }

    pub fn select_previous_task(&mut self) {
        self.selected_task_index = self.selected_task_index.saturating_sub(1);
        self.task_list_state.select(Some(self.selected_task_index));
    }

    /// Dismiss the selected task: the board acknowledges it server-side and
    /// drops it locally without waiting for the next poll.
    pub fn dismiss_selected_task(&mut self) {
        if let Some(view) = self.tasks.get(self.selected_task_index) {
            self.board.clear_task(view.id.clone());
        }
    }

    pub fn clear_all_tasks(&mut self) {
        self.board.clear_all();
    }

    pub fn refresh_tasks(&mut self) {
        self.board.refresh(true);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.board.shutdown();
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_task_index = 0;
        } else if self.selected_task_index >= self.tasks.len() {
            self.selected_task_index = self.tasks.len() - 1;
        }
        self.task_list_state.select(Some(self.selected_task_index));
    }
}
