//! Terminal implementation of the host capability surface, built on
//! dialoguer prompts and the editor launcher.

use std::io;
use std::path::Path;

use colored::Colorize;
use dialoguer::{Input, Select};

use armature_core::host::Host;
use armature_core::{ScaffoldError, ScaffoldResult};

use crate::editor::EditorLauncher;

pub struct DialoguerHost {
    editor: EditorLauncher,
}

impl DialoguerHost {
    pub fn new(editor: EditorLauncher) -> Self {
        Self { editor }
    }
}

/// Ctrl-C surfaces from dialoguer as an interrupted read; everything else
/// is prompt machinery failing (e.g. no TTY).
fn prompt_failure(err: dialoguer::Error) -> ScaffoldError {
    let dialoguer::Error::IO(io_err) = err;
    if io_err.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        ScaffoldError::Prompt(io_err.to_string())
    }
}

impl Host for DialoguerHost {
    fn prompt_text(
        &self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> ScaffoldResult<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input))
            .interact_text()
            .map_err(prompt_failure)
    }

    fn prompt_choice(&self, prompt: &str, items: &[String]) -> ScaffoldResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_failure)?
            .ok_or(ScaffoldError::Cancelled)
    }

    fn open_workspace(&self, path: &Path) {
        self.editor.open(path);
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red().bold());
    }
}
