//! System clipboard and stdout paste channel

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use super::{Clipboard, ClipboardError};

/// Clipboard backed by the OS clipboard (copy) and stdout (paste)
///
/// Paste writes the text to stdout with no trailing newline. A shell
/// integration that runs us inside `$(...)` or a line-editor widget inserts
/// it at the cursor of the application that was active before the form.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

/// Whether copied text stays on the clipboard after we exit
///
/// On Linux the selection is served by its owner, so it goes away with the
/// process unless a clipboard manager has claimed it.
fn selection_outlives_process() -> bool {
    !cfg!(target_os = "linux")
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        debug!(len = text.len(), "SystemClipboard::copy: called");
        let owned = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(owned)
                .map_err(|e| ClipboardError::Write(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Write(e.to_string()))??;
        info!("SystemClipboard::copy: clipboard updated");
        if !selection_outlives_process() {
            warn!("SystemClipboard::copy: X11/Wayland selection is owned by this process; the text survives exit only if a clipboard manager takes it over");
        }
        Ok(())
    }

    async fn paste(&self, text: &str) -> Result<(), ClipboardError> {
        debug!(len = text.len(), "SystemClipboard::paste: called");
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
        info!("SystemClipboard::paste: wrote sentence to stdout");
        Ok(())
    }
}
