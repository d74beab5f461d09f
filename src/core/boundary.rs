//! Render fault isolation.
//!
//! A failed render puts the boundary into its error state: it shows the
//! fallback screen until [`RenderBoundary::retry`] is called, and never
//! touches the state that was being rendered.

use crate::core::{card::render_fault, error::Result};

#[derive(Debug, Default)]
pub struct RenderBoundary {
    fault: Option<String>,
}

impl RenderBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.fault.is_some()
    }

    /// Message of the fault currently shown, if any
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Run `render`, substituting the fallback screen if it fails or already failed
    pub fn render<F>(&mut self, render: F) -> String
    where
        F: FnOnce() -> Result<String>,
    {
        if self.fault.is_some() {
            return render_fault();
        }

        match render() {
            Ok(output) => output,
            Err(e) => {
                log::error!("Render failed: {e}");
                self.fault = Some(e.to_string());
                render_fault()
            }
        }
    }

    /// Leave the error state; the next render runs again
    pub fn retry(&mut self) {
        if let Some(fault) = self.fault.take() {
            log::debug!("Retrying after render fault: {fault}");
        }
    }
}
