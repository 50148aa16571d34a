//! TUI runner - drives the form until it is submitted or cancelled

use std::time::Duration;

use eyre::Result;
use tracing::{debug, info};

use crate::composer::{Composer, SubmitError, Submission};
use crate::host::{Clipboard, Notifier, Window};

use super::TerminalWindow;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{AppState, FormPhase};
use super::views;

/// Owns the terminal window, the form, and the collaborators it submits to
pub struct TuiRunner {
    app: App,
    window: TerminalWindow,
    event_handler: EventHandler,
    composer: Composer,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
}

impl TuiRunner {
    pub fn new(
        window: TerminalWindow,
        composer: Composer,
        clipboard: Box<dyn Clipboard>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        debug!("TuiRunner::new: called");
        Self {
            app: App::new(&composer),
            window,
            event_handler: EventHandler::new(Duration::from_millis(250)),
            composer,
            clipboard,
            notifier,
        }
    }

    /// Run the form main loop
    ///
    /// Returns the submission, or `None` when the user cancelled.
    pub async fn run(&mut self) -> Result<Option<Submission>> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            let state = self.app.state();
            self.window.draw(|frame| views::render(state, frame))?;

            match self.event_handler.next().await? {
                Event::Key(key_event) => self.app.handle_key(key_event),
                Event::Resize(width, height) => {
                    debug!(width, height, "TuiRunner::run: resize");
                }
                Event::Tick => {}
            }

            if self.app.state().phase == FormPhase::Cancelled {
                debug!("TuiRunner::run: cancelled");
                self.window.close_now()?;
                return Ok(None);
            }

            let submitted = submit_pending(
                self.app.state_mut(),
                &self.composer,
                self.clipboard.as_ref(),
                self.notifier.as_ref(),
                &mut self.window,
            )
            .await?;

            if submitted.is_some() {
                return Ok(submitted);
            }
        }
    }
}

/// Submit the action queued in `state`, if any
///
/// A validation failure stays in the form: the message lands on the task
/// field and `Ok(None)` is returned. On success the phase becomes
/// [`FormPhase::Submitted`]. Clipboard and window failures are returned.
pub async fn submit_pending(
    state: &mut AppState,
    composer: &Composer,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    window: &mut dyn Window,
) -> Result<Option<Submission>, SubmitError> {
    let Some(action) = state.pending_submit.take() else {
        return Ok(None);
    };

    let form = state.form();
    match composer.submit(&form, action, clipboard, notifier, window).await {
        Ok(submission) => {
            state.phase = FormPhase::Submitted(action);
            info!(?action, "submit_pending: submitted");
            Ok(Some(submission))
        }
        Err(SubmitError::Validation(err)) => {
            debug!(%err, "submit_pending: validation failed, staying in editing");
            state.set_task_error(err.to_string());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
