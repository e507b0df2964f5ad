//! Template management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use armature_core::config::Config;
use armature_core::host::Host;
use armature_core::templates;
use armature_core::workflow::{self, EditTemplateRequest, NewTemplateRequest};

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Create a new empty template folder and open it for populating
    New(TemplateNewArgs),

    /// Open an existing template folder for editing
    Edit(TemplateEditArgs),

    /// List the available templates
    List,
}

#[derive(Args)]
pub struct TemplateNewArgs {
    /// Template name (prompted for when omitted)
    pub name: Option<String>,

    /// Do not open the created template in the editor
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Args)]
pub struct TemplateEditArgs {
    /// Template name (picked from a list when omitted)
    pub name: Option<String>,
}

pub fn execute(cmd: TemplateCommands, host: &dyn Host, config: &Config) -> Result<()> {
    match cmd {
        TemplateCommands::New(args) => new_template(args, host, config),
        TemplateCommands::Edit(args) => edit_template(args, host, config),
        TemplateCommands::List => list(config),
    }
}

fn new_template(args: TemplateNewArgs, host: &dyn Host, config: &Config) -> Result<()> {
    let created = workflow::new_template(
        host,
        config,
        NewTemplateRequest {
            name: args.name,
            open: !args.no_open,
        },
    )?;

    println!();
    println!(
        "{} Template created: {}",
        "✓".green().bold(),
        created.name.cyan()
    );
    println!("  Directory: {}", created.path.display());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  Add files to the folder; they seed every project made from it");
    println!("  armature new --template {}", created.name);

    Ok(())
}

fn edit_template(args: TemplateEditArgs, host: &dyn Host, config: &Config) -> Result<()> {
    let path = workflow::edit_template(host, config, EditTemplateRequest { name: args.name })?;
    println!("{} Opening template: {}", "→".blue().bold(), path.display());
    Ok(())
}

fn list(config: &Config) -> Result<()> {
    let names = templates::template_names(&config.templates_dir)?;

    if names.is_empty() {
        println!("{}", "No templates found.".dimmed());
        println!("  Create one with: armature template new");
        return Ok(());
    }

    println!(
        "{} {}",
        "Templates".bold(),
        format!("({})", config.templates_dir.display()).dimmed()
    );
    for name in &names {
        println!("  {} {}", "•".blue(), name.cyan());
    }

    Ok(())
}
