//! TUI application state
//!
//! Pure data structures for the form. No rendering logic here.

use tracing::debug;

use crate::composer::{IntentionForm, OutputAction};
use crate::mood::MoodCatalog;

use super::input::TextInput;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Task,
    Mood,
    Reason,
}

impl Field {
    /// Get the next field in the cycle
    pub fn next(self) -> Self {
        match self {
            Self::Task => Self::Mood,
            Self::Mood => Self::Reason,
            Self::Reason => Self::Task,
        }
    }

    /// Get the previous field in the cycle
    pub fn prev(self) -> Self {
        match self {
            Self::Task => Self::Reason,
            Self::Mood => Self::Task,
            Self::Reason => Self::Mood,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Mood => "Mood",
            Self::Reason => "Reason",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Task => "What do you want to do?",
            Self::Mood => "Needed mindsets?",
            Self::Reason => "Why are you doing it?",
        }
    }
}

/// Lifecycle of one form invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input (initial)
    #[default]
    Editing,
    /// Validation passed; the window is about to close
    Submitted(OutputAction),
    /// User left without submitting
    Cancelled,
}

/// Complete form state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Moods offered in the tag picker
    pub catalog: MoodCatalog,

    /// Task text field
    pub task: TextInput,

    /// Selected moods, in selection order
    pub mood: Vec<String>,

    /// Reason text field
    pub reason: TextInput,

    /// Field with keyboard focus
    pub focus: Field,

    /// Typed filter narrowing the tag picker
    pub mood_filter: String,

    /// Highlighted row among the visible tag picker options
    pub mood_highlight: usize,

    /// Inline error under the task field
    pub task_error: Option<String>,

    /// Submit action waiting for the runner
    pub pending_submit: Option<OutputAction>,

    /// Help overlay visible
    pub show_help: bool,

    pub phase: FormPhase,
}

impl AppState {
    /// Form over `catalog` seeded with `form`'s text fields
    ///
    /// The mood selection always starts empty, whatever `form` carries.
    pub fn from_form(catalog: MoodCatalog, form: IntentionForm) -> Self {
        debug!(moods = catalog.len(), seeded_moods = form.mood.len(), "AppState::from_form: called");
        Self {
            catalog,
            task: TextInput::with_value(form.task),
            mood: Vec::new(),
            reason: TextInput::with_value(form.reason),
            focus: Field::Task,
            mood_filter: String::new(),
            mood_highlight: 0,
            task_error: None,
            pending_submit: None,
            show_help: false,
            phase: FormPhase::Editing,
        }
    }

    /// Current field values
    pub fn form(&self) -> IntentionForm {
        IntentionForm::new(self.task.value(), self.mood.clone(), self.reason.value())
    }

    /// Sentence the current values would produce, if the task is filled in
    pub fn preview(&self) -> Option<String> {
        let form = self.form();
        form.validate().ok().map(|_| form.compose())
    }

    /// Catalog indices shown in the tag picker under the current filter
    pub fn visible_moods(&self) -> Vec<usize> {
        self.catalog.matching(&self.mood_filter)
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.mood.iter().any(|m| m == label)
    }

    pub fn highlight_prev(&mut self) {
        self.mood_highlight = self.mood_highlight.saturating_sub(1);
    }

    pub fn highlight_next(&mut self) {
        let count = self.visible_moods().len();
        if count > 0 && self.mood_highlight < count - 1 {
            self.mood_highlight += 1;
        }
    }

    /// Add or remove the highlighted label
    ///
    /// Selection is by value: toggling one of two identical labels affects
    /// both. The filter is cleared afterwards and the highlight follows the
    /// toggled label.
    pub fn toggle_highlighted(&mut self) {
        let visible = self.visible_moods();
        let Some(&idx) = visible.get(self.mood_highlight) else {
            debug!("AppState::toggle_highlighted: nothing highlighted");
            return;
        };
        let label = self.catalog.labels()[idx].clone();

        if let Some(pos) = self.mood.iter().position(|m| *m == label) {
            debug!(%label, "AppState::toggle_highlighted: deselecting");
            self.mood.remove(pos);
        } else {
            debug!(%label, "AppState::toggle_highlighted: selecting");
            self.mood.push(label);
        }

        self.mood_filter.clear();
        self.mood_highlight = idx;
    }

    /// Drop the most recently selected mood
    pub fn remove_last_mood(&mut self) {
        let removed = self.mood.pop();
        debug!(?removed, "AppState::remove_last_mood: called");
    }

    pub fn push_filter(&mut self, c: char) {
        self.mood_filter.push(c);
        self.mood_highlight = 0;
    }

    pub fn pop_filter(&mut self) {
        self.mood_filter.pop();
        self.mood_highlight = 0;
    }

    /// The task changed; its inline error no longer applies
    pub fn task_edited(&mut self) {
        self.task_error = None;
    }

    /// Record a failed validation on the task field
    pub fn set_task_error(&mut self, message: impl Into<String>) {
        self.task_error = Some(message.into());
        self.focus = Field::Task;
        self.phase = FormPhase::Editing;
    }

    pub fn request_submit(&mut self, action: OutputAction) {
        debug!(?action, "AppState::request_submit: called");
        self.pending_submit = Some(action);
    }
}
