//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use armature_core::config::{Config, Overrides};

use crate::editor::EditorLauncher;
use crate::prompt::DialoguerHost;

pub mod config;
pub mod new;
pub mod template;

/// Armature - Template-Driven Project Scaffolding
#[derive(Parser)]
#[command(name = "armature")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory new projects are created under
    #[arg(long, global = true, value_name = "DIR")]
    pub projects_dir: Option<PathBuf>,

    /// Directory holding the template folders
    #[arg(long, global = true, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Config file to read instead of ~/.armature/config.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project from a template (or empty)
    New(new::NewArgs),

    /// Manage template folders
    #[command(subcommand)]
    Template(template::TemplateCommands),

    /// Show the resolved configuration and where each value came from
    Config,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let overrides = Overrides {
            projects_dir: self.projects_dir,
            templates_dir: self.templates_dir,
        };
        let config = Config::load(self.config.as_deref(), &overrides)?;
        let host = DialoguerHost::new(EditorLauncher::resolve(config.editor.as_deref()));

        match self.command {
            Commands::New(args) => new::execute(args, &host, &config),
            Commands::Template(cmd) => template::execute(cmd, &host, &config),
            Commands::Config => config::execute(&config),
        }
    }
}
