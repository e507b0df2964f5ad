//! New-name validation shared by project and template creation.

/// Check a candidate folder name against the entries already present in the
/// target directory. `Err` carries the message shown inline at the prompt.
pub fn validate_new_name(name: &str, existing: &[String]) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("Name cannot be '{name}'"));
    }
    if name.chars().any(std::path::is_separator) {
        return Err("Name cannot contain path separators".to_string());
    }
    if existing.iter().any(|entry| entry == name) {
        return Err(format!("Path {name} already exists"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<String> {
        vec!["site1".to_string(), "api".to_string()]
    }

    #[test]
    fn test_accepts_fresh_name() {
        assert_eq!(validate_new_name("site2", &existing()), Ok(()));
    }

    #[test]
    fn test_rejects_collision_naming_the_path() {
        let err = validate_new_name("site1", &existing()).unwrap_err();
        assert_eq!(err, "Path site1 already exists");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_new_name("", &existing()).is_err());
    }

    #[test]
    fn test_rejects_path_separators() {
        assert!(validate_new_name("a/b", &existing()).is_err());
        assert!(validate_new_name("../escape", &existing()).is_err());
    }

    #[test]
    fn test_rejects_dot_dirs() {
        assert!(validate_new_name(".", &existing()).is_err());
        assert!(validate_new_name("..", &existing()).is_err());
    }

    #[test]
    fn test_is_case_sensitive() {
        assert_eq!(validate_new_name("Site1", &existing()), Ok(()));
    }

    #[test]
    fn test_dotfile_names_allowed() {
        assert_eq!(validate_new_name(".drafts", &existing()), Ok(()));
    }
}
