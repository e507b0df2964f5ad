//! Resolved-configuration display command.

use anyhow::Result;
use colored::Colorize;

use armature_core::config::{Config, Source};

use crate::editor::EditorLauncher;

pub fn execute(config: &Config) -> Result<()> {
    let editor = EditorLauncher::resolve(config.editor.as_deref());

    let file_note = if config.config_file.exists() {
        String::new()
    } else {
        " (not found)".dimmed().to_string()
    };
    println!("{}", "Configuration".bold());
    println!("  Config file: {}{}", config.config_file.display(), file_note);
    println!();
    row(
        "projects_dir",
        &config.projects_dir.display().to_string(),
        config.sources.projects_dir,
    );
    row(
        "templates_dir",
        &config.templates_dir.display().to_string(),
        config.sources.templates_dir,
    );
    row("editor", editor.command(), config.sources.editor);

    Ok(())
}

fn row(key: &str, value: &str, source: Source) {
    println!(
        "  {:<14} {} {}",
        key,
        value.cyan(),
        format!("[{source}]").dimmed()
    );
}
