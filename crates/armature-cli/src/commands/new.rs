//! New project command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use armature_core::config::Config;
use armature_core::host::Host;
use armature_core::templates::TemplateChoice;
use armature_core::workflow::{self, NewProjectRequest};

#[derive(Args)]
pub struct NewArgs {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Template to copy (prompted for when omitted)
    #[arg(short, long, conflicts_with = "empty")]
    pub template: Option<String>,

    /// Create an empty project without a template
    #[arg(long)]
    pub empty: bool,

    /// Do not open the created project in the editor
    #[arg(long)]
    pub no_open: bool,
}

pub fn execute(args: NewArgs, host: &dyn Host, config: &Config) -> Result<()> {
    let template = if args.empty {
        Some(TemplateChoice::EmptyProject)
    } else {
        args.template.map(TemplateChoice::Named)
    };

    let created = workflow::new_project(
        host,
        config,
        NewProjectRequest {
            name: args.name,
            template,
            open: !args.no_open,
        },
    )?;

    let origin = match &created.template {
        TemplateChoice::Named(name) => {
            format!("({} files from {name})", created.files_copied)
        }
        TemplateChoice::EmptyProject => "(empty)".to_string(),
    };
    println!();
    println!(
        "{} Project created: {} {}",
        "✓".green().bold(),
        created.name.cyan(),
        origin.dimmed()
    );
    println!("  Directory: {}", created.path.display());

    if args.no_open {
        println!();
        println!("{}", "Next steps:".bold());
        println!("  cd {}", created.path.display());
    }

    Ok(())
}
