//! Tool configuration: where projects and templates live, which editor
//! opens them.
//!
//! Each value is resolved in precedence order: command-line flag,
//! environment variable, config file (`~/.armature/config.toml`), built-in
//! default.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Environment variable overriding the projects directory.
pub const PROJECTS_DIR_ENV: &str = "ARMATURE_PROJECTS_DIR";
/// Environment variable overriding the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "ARMATURE_TEMPLATES_DIR";
/// Environment variable overriding the editor command.
pub const EDITOR_ENV: &str = "ARMATURE_EDITOR";

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub projects_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub editor: Option<String>,
}

/// Command-line overrides, applied on top of environment and file values.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub projects_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flag,
    Env,
    File,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Source::Flag => "flag",
            Source::Env => "environment",
            Source::File => "config file",
            Source::Default => "default",
        };
        write!(f, "{label}")
    }
}

/// Source of each resolved value, reported by `armature config`.
#[derive(Debug, Clone, Copy)]
pub struct Sources {
    pub projects_dir: Source,
    pub templates_dir: Source,
    pub editor: Source,
}

/// Fully resolved configuration used by every workflow.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parent directory new projects are created under.
    pub projects_dir: PathBuf,
    /// Directory whose immediate subdirectories are the templates.
    pub templates_dir: PathBuf,
    /// Editor command for workspace activation, when explicitly configured.
    pub editor: Option<String>,
    /// Config file the values were read from, whether or not it exists.
    pub config_file: PathBuf,
    pub sources: Sources,
}

#[derive(Debug, Clone, Default)]
struct EnvValues {
    projects_dir: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
    editor: Option<String>,
}

impl EnvValues {
    fn capture() -> Self {
        Self {
            projects_dir: std::env::var(PROJECTS_DIR_ENV).ok().map(PathBuf::from),
            templates_dir: std::env::var(TEMPLATES_DIR_ENV).ok().map(PathBuf::from),
            editor: std::env::var(EDITOR_ENV).ok(),
        }
    }
}

/// Dotted home directory holding the config file and the default templates
/// root.
pub fn armature_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".armature")
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    armature_home().join("config.toml")
}

fn default_templates_dir() -> PathBuf {
    armature_home().join("templates")
}

fn default_projects_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

impl Config {
    /// Load configuration, resolving each value from flags, environment,
    /// the config file, and defaults, in that order.
    ///
    /// A missing file at the default location is fine; a missing file named
    /// explicitly is an error.
    pub fn load(explicit_file: Option<&Path>, overrides: &Overrides) -> ScaffoldResult<Config> {
        let config_file = explicit_file
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);

        let file = if config_file.exists() {
            read_config_file(&config_file)?
        } else if explicit_file.is_some() {
            return Err(ScaffoldError::Config(format!(
                "config file not found: {}",
                config_file.display()
            )));
        } else {
            ConfigFile::default()
        };

        Ok(resolve(config_file, file, EnvValues::capture(), overrides))
    }
}

fn read_config_file(path: &Path) -> ScaffoldResult<ConfigFile> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw)
        .map_err(|err| ScaffoldError::Config(format!("{}: {err}", path.display())))
}

fn resolve(
    config_file: PathBuf,
    file: ConfigFile,
    env: EnvValues,
    overrides: &Overrides,
) -> Config {
    let (projects_dir, projects_src) = pick(
        overrides.projects_dir.clone(),
        env.projects_dir,
        file.projects_dir,
        default_projects_dir,
    );
    let (templates_dir, templates_src) = pick(
        overrides.templates_dir.clone(),
        env.templates_dir,
        file.templates_dir,
        default_templates_dir,
    );
    let (editor, editor_src) = match (env.editor, file.editor) {
        (Some(value), _) => (Some(value), Source::Env),
        (None, Some(value)) => (Some(value), Source::File),
        (None, None) => (None, Source::Default),
    };

    Config {
        projects_dir,
        templates_dir,
        editor,
        config_file,
        sources: Sources {
            projects_dir: projects_src,
            templates_dir: templates_src,
            editor: editor_src,
        },
    }
}

fn pick(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    file: Option<PathBuf>,
    default: fn() -> PathBuf,
) -> (PathBuf, Source) {
    if let Some(value) = flag {
        return (value, Source::Flag);
    }
    if let Some(value) = env {
        return (value, Source::Env);
    }
    if let Some(value) = file {
        return (value, Source::File);
    }
    (default(), Source::Default)
}
