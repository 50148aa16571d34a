//! Form fields, validation and sentence composition

use thiserror::Error;
use tracing::debug;

/// Separator between selected moods in the composed sentence
pub const MOOD_SEPARATOR: &str = ", ";

/// The only validation failure the form recognizes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task is required")]
    TaskRequired,
}

/// Values collected from the intention form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentionForm {
    /// What the user wants to do (required)
    pub task: String,
    /// Selected moods, in selection order
    pub mood: Vec<String>,
    /// Why the user is doing it (optional)
    pub reason: String,
}

impl IntentionForm {
    pub fn new(task: impl Into<String>, mood: Vec<String>, reason: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            mood,
            reason: reason.into(),
        }
    }

    /// Check the form can be submitted
    ///
    /// The task is checked for emptiness only; whitespace counts as content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        debug!(task_len = self.task.len(), "IntentionForm::validate: called");
        if self.task.is_empty() {
            debug!("IntentionForm::validate: task is empty");
            return Err(ValidationError::TaskRequired);
        }
        Ok(())
    }

    /// Build the intention sentence from the current fields
    ///
    /// Does not validate; an empty task yields `"I want to : "`.
    pub fn compose(&self) -> String {
        debug!(
            mood_count = self.mood.len(),
            has_reason = !self.reason.is_empty(),
            "IntentionForm::compose: called"
        );
        let mood_text = self.mood.join(MOOD_SEPARATOR);

        let mut sentence = format!("I want to {}", self.task);
        if !mood_text.is_empty() {
            sentence.push_str(" with a mindset of ");
            sentence.push_str(&mood_text);
        }
        if !self.reason.is_empty() {
            sentence.push_str(" because ");
            sentence.push_str(&self.reason);
        }
        sentence.push_str(": ");
        sentence
    }
}
