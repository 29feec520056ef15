// app.rs
use crate::config::Config;
use crate::todo::{Counts, FilterMode, IdPolicy, Task, TodoStore};
use tracing::{info, warn};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    fn new<S: Into<String>>(kind: MessageKind, text: S) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Screen state for one session. Owns the store; the TUI only reads it back
/// after each action.
#[derive(Debug, Default)]
pub struct App {
    pub store: TodoStore,
    pub input_mode: InputMode,
    pub input_text: String,
    pub filter: FilterMode,
    /// Cursor into `visible_tasks()`.
    pub selected: usize,
    pub message: Option<StatusMessage>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        if config.id_policy == IdPolicy::ListLength {
            warn!("id_policy = list_length: task ids may repeat after deletions");
        }
        Self {
            store: TodoStore::with_id_policy(config.id_policy),
            filter: config.default_filter,
            ..Self::default()
        }
    }

    pub fn counts(&self) -> Counts {
        self.store.counts()
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.filter(self.filter)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected).copied()
    }

    pub fn begin_input(&mut self) {
        self.input_mode = InputMode::Editing;
        self.input_text.clear();
        self.message = None;
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_text.clear();
    }

    /// Adds the typed task. The input box is cleared either way.
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input_text);
        self.input_mode = InputMode::Normal;
        self.message = Some(match self.store.add(&raw) {
            Ok(task) => {
                info!(id = task.id, "added task");
                StatusMessage::new(MessageKind::Success, format!("Added \"{}\"", task.text))
            }
            Err(e) => {
                info!(error = %e, "add rejected");
                StatusMessage::new(MessageKind::Error, "Please enter a task")
            }
        });
        self.clamp_selection();
    }

    pub fn toggle_selected(&mut self) {
        self.message = None;
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        self.store.toggle(id);
        self.clamp_selection();
    }

    pub fn delete_selected(&mut self) {
        self.message = None;
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        self.store.delete(id);
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.clamp_selection();
    }

    pub fn delete_completed(&mut self) {
        self.message = Some(if self.store.count_completed() > 0 {
            let removed = self.store.delete_completed();
            info!(removed, "deleted completed tasks");
            StatusMessage::new(MessageKind::Success, "Deleted completed tasks")
        } else {
            StatusMessage::new(MessageKind::Warning, "No completed tasks")
        });
        self.clamp_selection();
    }

    pub fn clear_all(&mut self) {
        self.message = Some(if !self.store.is_empty() {
            let removed = self.store.clear_all();
            info!(removed, "cleared all tasks");
            StatusMessage::new(MessageKind::Success, "Deleted all tasks")
        } else {
            StatusMessage::new(MessageKind::Warning, "No tasks to delete")
        });
        self.selected = 0;
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.message = None;
        self.filter = filter;
        self.clamp_selection();
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible_tasks().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new();
        for t in texts {
            app.store.add(t).unwrap();
        }
        app
    }

    fn visible(app: &App) -> Vec<&str> {
        app.visible_tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn submit_adds_and_clears_input() {
        let mut app = App::new();
        app.begin_input();
        app.input_text.push_str("  Buy milk ");
        app.submit_input();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input_text.is_empty());
        assert_eq!(app.counts().total, 1);
        assert_eq!(
            app.message,
            Some(StatusMessage::new(MessageKind::Success, "Added \"Buy milk\""))
        );
    }

    #[test]
    fn blank_submit_reports_error_and_still_clears() {
        let mut app = app_with(&["a"]);
        app.begin_input();
        app.input_text.push_str("   ");
        app.submit_input();

        assert!(app.input_text.is_empty());
        assert_eq!(app.counts().total, 1);
        assert_eq!(
            app.message,
            Some(StatusMessage::new(MessageKind::Error, "Please enter a task"))
        );
    }

    #[test]
    fn cancel_discards_typed_text() {
        let mut app = App::new();
        app.begin_input();
        app.input_text.push_str("half typed");
        app.cancel_input();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input_text.is_empty());
        assert!(app.store.is_empty());
    }

    #[test]
    fn toggle_acts_on_task_under_cursor_in_filtered_view() {
        let mut app = app_with(&["a", "b", "c"]);
        app.store.toggle(0);
        app.set_filter(FilterMode::Pending);
        assert_eq!(visible(&app), vec!["b", "c"]);

        app.select_next();
        app.toggle_selected();

        assert!(app.store.get(2).unwrap().completed);
        assert_eq!(visible(&app), vec!["b"]);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn delete_selected_moves_cursor_up() {
        let mut app = app_with(&["a", "b", "c"]);
        app.select_next();
        app.select_next();
        app.delete_selected();

        assert_eq!(visible(&app), vec!["a", "b"]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn actions_on_empty_view_are_noops() {
        let mut app = App::new();
        app.toggle_selected();
        app.delete_selected();

        assert!(app.store.is_empty());
        assert_eq!(app.selected, 0);
        assert!(app.message.is_none());
    }

    #[test]
    fn delete_completed_warns_when_nothing_completed() {
        let mut app = app_with(&["a"]);
        app.delete_completed();
        assert_eq!(
            app.message,
            Some(StatusMessage::new(MessageKind::Warning, "No completed tasks"))
        );

        app.store.toggle(0);
        app.delete_completed();
        assert_eq!(
            app.message,
            Some(StatusMessage::new(MessageKind::Success, "Deleted completed tasks"))
        );
        assert!(app.store.is_empty());
    }

    #[test]
    fn clear_all_warns_when_empty() {
        let mut app = app_with(&["a", "b"]);
        app.select_next();
        app.clear_all();
        assert_eq!(
            app.message,
            Some(StatusMessage::new(MessageKind::Success, "Deleted all tasks"))
        );
        assert_eq!(app.selected, 0);

        app.clear_all();
        assert_eq!(
            app.message,
            Some(StatusMessage::new(MessageKind::Warning, "No tasks to delete"))
        );
    }

    #[test]
    fn cursor_stays_within_visible_list() {
        let mut app = app_with(&["a", "b"]);
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);

        app.set_filter(FilterMode::Completed);
        assert_eq!(app.selected, 0);
        assert!(app.selected_task().is_none());
    }

    #[test]
    fn from_config_applies_policy_and_filter() {
        let config = Config {
            id_policy: IdPolicy::ListLength,
            default_filter: FilterMode::Completed,
            ..Config::default()
        };
        let app = App::from_config(&config);

        assert_eq!(app.store.id_policy(), IdPolicy::ListLength);
        assert_eq!(app.filter, FilterMode::Completed);
    }
}
