//! Armature CLI - Template-Driven Project Scaffolding
//!
//! Creates new project folders from template folders and opens them in the
//! user's editor.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod editor;
mod prompt;

use armature_core::host::Host;
use armature_core::ScaffoldError;
use commands::Cli;
use editor::EditorLauncher;
use prompt::DialoguerHost;

/// Initialize tracing on stderr, keeping stdout free for prompts and
/// command output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "armature=debug,armature_core=debug"
    } else {
        "armature=info,armature_core=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// A dismissed prompt is a normal early exit, not a failure.
fn is_user_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(scaffold) if scaffold.is_cancelled()
    )
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.execute() {
        if is_user_cancelled(&err) {
            return;
        }
        // Notification only; no prompt or editor runs on this path.
        let host = DialoguerHost::new(EditorLauncher::resolve(None));
        host.notify_error(&err.to_string());
        std::process::exit(1);
    }
}
