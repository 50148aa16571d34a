//! Composer - validates a form, builds the sentence, hands it to the host

use thiserror::Error;
use tracing::{debug, info};

use crate::host::{Clipboard, ClipboardError, Notifier, Window, WindowError};
use crate::mood::MoodCatalog;

use super::form::{IntentionForm, ValidationError};

/// Which submit action triggered the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    /// "Paste Intention" - insert into the previously active application
    Paste,
    /// "Copy to Clipboard"
    Copy,
}

impl OutputAction {
    /// Title shown on the action
    pub fn title(self) -> &'static str {
        match self {
            Self::Paste => "Paste Intention",
            Self::Copy => "Copy to Clipboard",
        }
    }

    /// Notification shown once the action succeeded
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Paste => "Intention pasted!",
            Self::Copy => "Intention copied to clipboard!",
        }
    }
}

/// Errors from [`Composer::submit`]
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub sentence: String,
    pub action: OutputAction,
}

/// Turns a filled-in form into an intention sentence and delivers it
#[derive(Debug, Clone, Default)]
pub struct Composer {
    catalog: MoodCatalog,
}

impl Composer {
    pub fn new(catalog: MoodCatalog) -> Self {
        debug!(moods = catalog.len(), "Composer::new: called");
        Self { catalog }
    }

    /// Moods offered to the user
    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    /// A fresh form; the mood selection always starts empty
    pub fn open_form(&self) -> IntentionForm {
        IntentionForm::default()
    }

    /// Validate and build the sentence without side effects
    pub fn compose(&self, form: &IntentionForm) -> Result<String, ValidationError> {
        form.validate()?;
        Ok(form.compose())
    }

    /// Submit the form through `action`
    ///
    /// On a validation failure nothing else happens. Otherwise the window is
    /// closed, the sentence goes to the clipboard collaborator, and the
    /// success message is shown. Clipboard failures are returned as-is.
    pub async fn submit(
        &self,
        form: &IntentionForm,
        action: OutputAction,
        clipboard: &dyn Clipboard,
        notifier: &dyn Notifier,
        window: &mut dyn Window,
    ) -> Result<Submission, SubmitError> {
        debug!(?action, "Composer::submit: called");
        let sentence = self.compose(form)?;

        // Focus must be back on the previous application before a paste
        window.close().await?;

        match action {
            OutputAction::Paste => {
                debug!("Composer::submit: pasting");
                clipboard.paste(&sentence).await?;
            }
            OutputAction::Copy => {
                debug!("Composer::submit: copying");
                clipboard.copy(&sentence).await?;
            }
        }

        notifier.success(action.success_message());
        info!(?action, len = sentence.len(), "Composer::submit: intention delivered");
        Ok(Submission { sentence, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::{RecordingClipboard, RecordingNotifier, RecordingWindow, call_log, calls};

    fn report_form() -> IntentionForm {
        IntentionForm::new(
            "write the report",
            vec!["Focused".to_string(), "Calm".to_string()],
            "deadline is tomorrow",
        )
    }

    #[test]
    fn test_open_form_is_empty() {
        let composer = Composer::new(MoodCatalog::parse("Focused, Calm"));
        let form = composer.open_form();
        assert!(form.task.is_empty());
        assert!(form.mood.is_empty());
        assert!(form.reason.is_empty());
    }

    #[test]
    fn test_action_titles_and_messages() {
        assert_eq!(OutputAction::Paste.title(), "Paste Intention");
        assert_eq!(OutputAction::Copy.title(), "Copy to Clipboard");
        assert_eq!(OutputAction::Paste.success_message(), "Intention pasted!");
        assert_eq!(OutputAction::Copy.success_message(), "Intention copied to clipboard!");
    }

    #[tokio::test]
    async fn test_submit_copy_end_to_end() {
        let composer = Composer::new(MoodCatalog::parse("Focused, Calm"));
        let clipboard = RecordingClipboard::new();
        let notifier = RecordingNotifier::new();
        let mut window = RecordingWindow::new();

        let submission = composer
            .submit(&report_form(), OutputAction::Copy, &clipboard, &notifier, &mut window)
            .await
            .unwrap();

        let expected = "I want to write the report with a mindset of Focused, Calm because deadline is tomorrow: ";
        assert_eq!(submission.sentence, expected);
        assert_eq!(clipboard.copied(), vec![expected.to_string()]);
        assert!(clipboard.pasted().is_empty());
        assert_eq!(notifier.messages(), vec!["Intention copied to clipboard!".to_string()]);
        assert_eq!(window.close_count, 1);
    }

    #[tokio::test]
    async fn test_submit_paste() {
        let composer = Composer::default();
        let clipboard = RecordingClipboard::new();
        let notifier = RecordingNotifier::new();
        let mut window = RecordingWindow::new();
        let form = IntentionForm::new("stretch", vec![], "");

        composer
            .submit(&form, OutputAction::Paste, &clipboard, &notifier, &mut window)
            .await
            .unwrap();

        assert_eq!(clipboard.pasted(), vec!["I want to stretch: ".to_string()]);
        assert!(clipboard.copied().is_empty());
        assert_eq!(notifier.messages(), vec!["Intention pasted!".to_string()]);
        assert_eq!(window.close_count, 1);
    }

    #[tokio::test]
    async fn test_submit_empty_task_blocks_everything() {
        let composer = Composer::default();
        let clipboard = RecordingClipboard::new();
        let notifier = RecordingNotifier::new();
        let mut window = RecordingWindow::new();
        let form = IntentionForm::new("", vec!["Calm".to_string()], "why not");

        let result = composer
            .submit(&form, OutputAction::Copy, &clipboard, &notifier, &mut window)
            .await;

        match result {
            Err(SubmitError::Validation(err)) => assert_eq!(err.to_string(), "Task is required"),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(clipboard.copied().is_empty());
        assert!(clipboard.pasted().is_empty());
        assert!(notifier.messages().is_empty());
        assert_eq!(window.close_count, 0);
    }

    #[tokio::test]
    async fn test_submit_clipboard_failure_propagates_without_notification() {
        let composer = Composer::default();
        let clipboard = RecordingClipboard::failing();
        let notifier = RecordingNotifier::new();
        let mut window = RecordingWindow::new();
        let form = IntentionForm::new("focus", vec![], "");

        let result = composer
            .submit(&form, OutputAction::Copy, &clipboard, &notifier, &mut window)
            .await;

        assert!(matches!(result, Err(SubmitError::Clipboard(_))));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_submit_closes_before_action_then_notifies() {
        let composer = Composer::default();
        let form = IntentionForm::new("focus", vec![], "");

        for (action, call) in [(OutputAction::Copy, "copy"), (OutputAction::Paste, "paste")] {
            let log = call_log();
            let clipboard = RecordingClipboard::with_log(log.clone());
            let notifier = RecordingNotifier::with_log(log.clone());
            let mut window = RecordingWindow::with_log(log.clone());

            composer
                .submit(&form, action, &clipboard, &notifier, &mut window)
                .await
                .unwrap();

            assert_eq!(calls(&log), vec!["close", call, "notify"]);
        }
    }

    #[tokio::test]
    async fn test_submit_failed_action_still_closed_first() {
        let composer = Composer::default();
        let log = call_log();
        let clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::with_log(log.clone())
        };
        let notifier = RecordingNotifier::with_log(log.clone());
        let mut window = RecordingWindow::with_log(log.clone());

        let result = composer
            .submit(&IntentionForm::new("focus", vec![], ""), OutputAction::Copy, &clipboard, &notifier, &mut window)
            .await;

        assert!(result.is_err());
        assert_eq!(calls(&log), vec!["close", "copy"]);
    }

    #[test]
    fn test_compose_validates() {
        let composer = Composer::default();
        assert_eq!(
            composer.compose(&IntentionForm::default()),
            Err(ValidationError::TaskRequired)
        );
        assert_eq!(
            composer.compose(&IntentionForm::new("nap", vec![], "")),
            Ok("I want to nap: ".to_string())
        );
    }
}
