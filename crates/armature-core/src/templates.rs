//! Template catalog and selection.

use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::folders;
use crate::host::Host;

/// Label of the synthetic picker entry that means "no template".
pub const EMPTY_PROJECT_LABEL: &str = "Empty Project";

/// Outcome of template selection: a template folder, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    /// Create an empty project folder instead of copying a template.
    EmptyProject,
    /// Copy the named template folder.
    Named(String),
}

/// Names of the template folders under `templates_dir`, sorted.
///
/// A templates root that does not exist yet is an empty catalog, not an
/// error; the root is only created along with the first template.
pub fn template_names(templates_dir: &Path) -> ScaffoldResult<Vec<String>> {
    if !templates_dir.exists() {
        return Ok(Vec::new());
    }
    folders::list_folders(templates_dir)
}

/// The list the picker presents: template names, preceded by the synthetic
/// empty-project entry when `include_empty` is set.
pub fn picker_items(templates_dir: &Path, include_empty: bool) -> ScaffoldResult<Vec<String>> {
    let mut items = template_names(templates_dir)?;
    if include_empty {
        items.insert(0, EMPTY_PROJECT_LABEL.to_string());
    }
    Ok(items)
}

/// Run the picker with the synthetic empty-project entry on top.
///
/// The choice is mapped back by index, so a template folder that happens to
/// be named "Empty Project" remains selectable.
pub fn pick(host: &dyn Host, templates_dir: &Path) -> ScaffoldResult<TemplateChoice> {
    let items = picker_items(templates_dir, true)?;
    let index = host.prompt_choice("Template", &items)?;
    if index == 0 {
        return Ok(TemplateChoice::EmptyProject);
    }
    let name = items
        .into_iter()
        .nth(index)
        .ok_or_else(|| ScaffoldError::Prompt(format!("choice index {index} out of range")))?;
    Ok(TemplateChoice::Named(name))
}

/// Run the picker over existing templates only.
pub fn pick_existing(host: &dyn Host, templates_dir: &Path) -> ScaffoldResult<String> {
    let items = picker_items(templates_dir, false)?;
    if items.is_empty() {
        return Err(ScaffoldError::NoTemplates(templates_dir.to_path_buf()));
    }
    let index = host.prompt_choice("Template", &items)?;
    items
        .into_iter()
        .nth(index)
        .ok_or_else(|| ScaffoldError::Prompt(format!("choice index {index} out of range")))
}

/// Path of the template named `name` under the templates root.
pub fn template_path(templates_dir: &Path, name: &str) -> PathBuf {
    templates_dir.join(name)
}

/// Resolve a template named on the command line, failing when no such
/// template folder exists.
pub fn resolve_existing(templates_dir: &Path, name: &str) -> ScaffoldResult<PathBuf> {
    let path = template_path(templates_dir, name);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(ScaffoldError::TemplateNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct FixedChoice(usize);

    impl Host for FixedChoice {
        fn prompt_text(
            &self,
            _prompt: &str,
            _validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> ScaffoldResult<String> {
            unreachable!("no text prompt in these tests")
        }

        fn prompt_choice(&self, _prompt: &str, items: &[String]) -> ScaffoldResult<usize> {
            assert!(self.0 < items.len());
            Ok(self.0)
        }

        fn open_workspace(&self, _path: &Path) {}

        fn notify_error(&self, _message: &str) {}
    }

    fn seed_templates() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("site1")).unwrap();
        fs::create_dir(dir.path().join("api")).unwrap();
        dir
    }

    #[test]
    fn test_picker_items_with_sentinel_first() {
        let dir = seed_templates();
        let items = picker_items(dir.path(), true).unwrap();
        assert_eq!(items, vec![EMPTY_PROJECT_LABEL, "api", "site1"]);
    }

    #[test]
    fn test_picker_items_without_sentinel() {
        let dir = seed_templates();
        let items = picker_items(dir.path(), false).unwrap();
        assert_eq!(items, vec!["api", "site1"]);
    }

    #[test]
    fn test_template_names_missing_root_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let names = template_names(&dir.path().join("not-yet")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_pick_maps_sentinel_and_names_by_index() {
        let dir = seed_templates();
        assert_eq!(
            pick(&FixedChoice(0), dir.path()).unwrap(),
            TemplateChoice::EmptyProject
        );
        assert_eq!(
            pick(&FixedChoice(1), dir.path()).unwrap(),
            TemplateChoice::Named("api".to_string())
        );
    }

    #[test]
    fn test_pick_template_folder_named_like_the_sentinel() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(EMPTY_PROJECT_LABEL)).unwrap();

        assert_eq!(
            pick(&FixedChoice(0), dir.path()).unwrap(),
            TemplateChoice::EmptyProject
        );
        assert_eq!(
            pick(&FixedChoice(1), dir.path()).unwrap(),
            TemplateChoice::Named(EMPTY_PROJECT_LABEL.to_string())
        );
    }

    #[test]
    fn test_pick_existing_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let err = pick_existing(&FixedChoice(0), dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NoTemplates(_)));
    }

    #[test]
    fn test_resolve_existing() {
        let dir = seed_templates();
        assert_eq!(
            resolve_existing(dir.path(), "site1").unwrap(),
            dir.path().join("site1")
        );

        let err = resolve_existing(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound(_)));
        assert!(err.to_string().contains("nope"));
    }
}
