//! The scaffolding workflows: new project, new template, edit template.
//!
//! Each workflow runs a strict sequence: prompt for whatever the request
//! left blank, materialize on disk, then hand the result to the host to
//! open. Cancellation at any prompt aborts before anything is written.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::folders;
use crate::host::Host;
use crate::naming;
use crate::templates::{self, TemplateChoice};

/// Inputs for [`new_project`]. `None` fields are prompted for.
#[derive(Debug, Clone)]
pub struct NewProjectRequest {
    pub name: Option<String>,
    pub template: Option<TemplateChoice>,
    /// Open the created project as a workspace when done.
    pub open: bool,
}

/// What [`new_project`] produced.
#[derive(Debug)]
pub struct CreatedProject {
    pub name: String,
    pub path: PathBuf,
    pub template: TemplateChoice,
    /// Files copied out of the template; zero for an empty project.
    pub files_copied: u64,
}

/// Inputs for [`new_template`].
#[derive(Debug, Clone)]
pub struct NewTemplateRequest {
    pub name: Option<String>,
    pub open: bool,
}

/// What [`new_template`] produced.
#[derive(Debug)]
pub struct CreatedTemplate {
    pub name: String,
    pub path: PathBuf,
}

/// Inputs for [`edit_template`].
#[derive(Debug, Clone)]
pub struct EditTemplateRequest {
    pub name: Option<String>,
}

/// Create a new project folder under the configured projects directory,
/// seeded from a template or left empty.
pub fn new_project(
    host: &dyn Host,
    config: &Config,
    request: NewProjectRequest,
) -> ScaffoldResult<CreatedProject> {
    // A template named on the command line must exist before any prompting.
    if let Some(TemplateChoice::Named(template_name)) = &request.template {
        templates::resolve_existing(&config.templates_dir, template_name)?;
    }

    let existing = folders::list_folders(&config.projects_dir)?;

    let name = match request.name {
        Some(name) => {
            naming::validate_new_name(&name, &existing).map_err(ScaffoldError::InvalidName)?;
            name
        }
        None => host.prompt_text("Project name", &|candidate| {
            naming::validate_new_name(candidate, &existing)
        })?,
    };

    let template = match request.template {
        Some(template) => template,
        None => templates::pick(host, &config.templates_dir)?,
    };

    let path = config.projects_dir.join(&name);
    let files_copied = match &template {
        TemplateChoice::Named(template_name) => {
            let src = templates::template_path(&config.templates_dir, template_name);
            folders::copy_tree(&src, &path)?
        }
        TemplateChoice::EmptyProject => {
            folders::create_folder(&path)?;
            0
        }
    };
    info!(name = %name, path = %path.display(), files = files_copied, "created project");

    if request.open {
        host.open_workspace(&path);
    } else {
        debug!(path = %path.display(), "workspace open suppressed");
    }

    Ok(CreatedProject {
        name,
        path,
        template,
        files_copied,
    })
}

/// Create a new empty template folder under the templates root, creating
/// the root itself on first use.
pub fn new_template(
    host: &dyn Host,
    config: &Config,
    request: NewTemplateRequest,
) -> ScaffoldResult<CreatedTemplate> {
    let existing = templates::template_names(&config.templates_dir)?;

    let name = match request.name {
        Some(name) => {
            naming::validate_new_name(&name, &existing).map_err(ScaffoldError::InvalidName)?;
            name
        }
        None => host.prompt_text("Template name", &|candidate| {
            naming::validate_new_name(candidate, &existing)
        })?,
    };

    folders::ensure_dir(&config.templates_dir)?;
    let path = templates::template_path(&config.templates_dir, &name);
    folders::create_folder(&path)?;
    info!(name = %name, path = %path.display(), "created template");

    if request.open {
        host.open_workspace(&path);
    }

    Ok(CreatedTemplate { name, path })
}

/// Open an existing template folder for editing. Nothing on disk changes.
pub fn edit_template(
    host: &dyn Host,
    config: &Config,
    request: EditTemplateRequest,
) -> ScaffoldResult<PathBuf> {
    let path = match request.name {
        Some(name) => templates::resolve_existing(&config.templates_dir, &name)?,
        None => {
            let name = templates::pick_existing(host, &config.templates_dir)?;
            templates::template_path(&config.templates_dir, &name)
        }
    };
    host.open_workspace(&path);
    Ok(path)
}
