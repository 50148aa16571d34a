//! Window for runs without a visible surface

use async_trait::async_trait;
use tracing::debug;

use super::{Window, WindowError};

/// Window used by non-interactive submissions; there is nothing to close
#[derive(Debug, Default)]
pub struct HeadlessWindow;

#[async_trait]
impl Window for HeadlessWindow {
    async fn close(&mut self) -> Result<(), WindowError> {
        debug!("HeadlessWindow::close: called");
        Ok(())
    }
}
