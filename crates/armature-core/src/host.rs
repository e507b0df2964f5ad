//! The capability surface workflows need from their host environment.
//!
//! The terminal frontend implements this with interactive prompts and an
//! editor launcher; tests implement it with scripted responses.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Host capabilities consumed by the scaffolding workflows.
pub trait Host {
    /// Free-text input. Implementations re-prompt while `validate` rejects,
    /// showing the returned message, and yield `ScaffoldError::Cancelled`
    /// when the user dismisses the prompt.
    fn prompt_text(
        &self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> ScaffoldResult<String>;

    /// Single selection out of `items`. Returns the chosen index, or
    /// `ScaffoldError::Cancelled` when dismissed.
    fn prompt_choice(&self, prompt: &str, items: &[String]) -> ScaffoldResult<usize>;

    /// Open `path` as the active workspace. Fire-and-forget: a host that
    /// cannot comply logs the failure and moves on.
    fn open_workspace(&self, path: &Path);

    /// Surface an error message to the user.
    fn notify_error(&self, message: &str);
}
