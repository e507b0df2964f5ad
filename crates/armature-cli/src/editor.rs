//! Editor resolution and launching for workspace activation.
//!
//! The launch is fire-and-forget: the editor runs detached and a failure to
//! spawn is logged, never reported back to the workflow.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Used when neither the configuration nor $VISUAL/$EDITOR name an editor.
const DEFAULT_EDITOR: &str = "code";

pub struct EditorLauncher {
    command: String,
}

impl EditorLauncher {
    /// Resolve the editor command: configured value (file or
    /// $ARMATURE_EDITOR, already merged by the config layer), then $VISUAL,
    /// then $EDITOR, then `code`.
    pub fn resolve(configured: Option<&str>) -> Self {
        Self::from_candidates(
            configured,
            std::env::var("VISUAL").ok().as_deref(),
            std::env::var("EDITOR").ok().as_deref(),
        )
    }

    fn from_candidates(
        configured: Option<&str>,
        visual: Option<&str>,
        editor: Option<&str>,
    ) -> Self {
        let command = [configured, visual, editor]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(DEFAULT_EDITOR)
            .to_string();
        Self { command }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Spawn the editor detached with `path` as its argument. The command
    /// may carry its own arguments ("code -n"); whitespace-split, no shell.
    pub fn open(&self, path: &Path) {
        let mut parts = self.command.split_whitespace();
        let Some(program) = parts.next() else {
            return;
        };

        let spawned = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(editor = %self.command, path = %path.display(), pid = child.id(), "opened workspace");
            }
            Err(err) => {
                warn!(editor = %self.command, path = %path.display(), %err, "failed to launch editor");
            }
        }
    }
}
