//! Filesystem primitives: directory listing, tree copy, folder creation.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::error::ScaffoldResult;

/// Names of the immediate subdirectories of `dir`, sorted by name.
///
/// Files are skipped; symlinks count as whatever they resolve to. Entry
/// names that are not valid UTF-8 are skipped with a warning.
pub fn list_folders(dir: &Path) -> ScaffoldResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| annotate(err, dir))? {
        let entry = entry.map_err(|err| annotate(err, dir))?;
        let path = entry.path();
        // fs::metadata resolves symlinks; DirEntry::file_type does not.
        let metadata = fs::metadata(&path).map_err(|err| annotate(err, &path))?;
        if !metadata.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!(dir = %dir.display(), name = ?raw, "skipping non-UTF-8 entry name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Recursively copy the directory tree at `src` into `dest`, creating `dest`
/// and any missing parents. Returns the number of files copied.
///
/// A failure partway through leaves the files already copied in place.
pub fn copy_tree(src: &Path, dest: &Path) -> ScaffoldResult<u64> {
    let entries = fs::read_dir(src).map_err(|err| annotate(err, src))?;
    ensure_dir(dest)?;
    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|err| annotate(err, src))?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if fs::metadata(&path).map_err(|err| annotate(err, &path))?.is_dir() {
            copied += copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(|err| annotate(err, &path))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Create a single empty directory at `dest`. Fails when `dest` already
/// exists or its parent is missing.
pub fn create_folder(dest: &Path) -> ScaffoldResult<()> {
    fs::create_dir(dest).map_err(|err| annotate(err, dest))?;
    Ok(())
}

/// Create `dir` and any missing parents. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> ScaffoldResult<()> {
    fs::create_dir_all(dir).map_err(|err| annotate(err, dir))?;
    Ok(())
}

/// Attach the offending path to a raw io error, keeping its kind.
fn annotate(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScaffoldError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_folders_only_directories_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let names = list_folders(dir.path()).unwrap();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_folders_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_folders(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_folders_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = list_folders(&missing).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_folders_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        symlink(dir.path().join("real"), dir.path().join("linked-dir")).unwrap();
        symlink(dir.path().join("file.txt"), dir.path().join("linked-file")).unwrap();

        let names = list_folders(dir.path()).unwrap();
        assert_eq!(names, vec!["linked-dir", "real"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_folders_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"bad\xFFname"))).unwrap();
        fs::create_dir(dir.path().join("kept")).unwrap();

        let names = list_folders(dir.path()).unwrap();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_copy_tree_copies_nested_files() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(src.path().join("css")).unwrap();
        fs::write(src.path().join("css/site.css"), "body {}").unwrap();

        let root = TempDir::new().unwrap();
        let dest = root.path().join("site1");
        let copied = copy_tree(src.path(), &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dest.join("index.html")).unwrap(),
            "<html></html>"
        );
        assert_eq!(
            fs::read_to_string(dest.join("css/site.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn test_copy_tree_empty_source() {
        let src = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let dest = root.path().join("empty");

        assert_eq!(copy_tree(src.path(), &dest).unwrap(), 0);
        assert!(dest.is_dir());
    }

    #[test]
    fn test_copy_tree_missing_source_creates_nothing() {
        let root = TempDir::new().unwrap();
        let dest = root.path().join("out");

        let err = copy_tree(&root.path().join("missing"), &dest).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io(_)));
        assert!(!dest.exists());
    }

    #[test]
    fn test_create_folder_fresh() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("fresh");

        create_folder(&dest).unwrap();
        assert!(dest.is_dir());
    }

    #[test]
    fn test_create_folder_existing_fails_and_keeps_contents() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("taken");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "keep").unwrap();

        assert!(create_folder(&dest).is_err());
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "keep");
    }
}
