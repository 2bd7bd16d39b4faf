// crates/get_project_root/src/lib.rs

use std::path::{Path, PathBuf};

/// Walks upward from `start` (a file or directory) and returns the first
/// ancestor containing a `.git` entry, which is treated as the project root
/// for relative-label purposes.
///
/// Returns `None` when no ancestor is a repository; callers then label
/// documents by base name alone (single-file mode).
pub fn get_project_root(start: &Path) -> Option<PathBuf> {
    let start_dir = if start.is_dir() {
        start
    } else {
        start.parent()?
    };

    for dir in start_dir.ancestors() {
        // `.git` may be a directory or, for worktrees, a file.
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_finds_root_from_nested_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let root = temp.path();
        fs::create_dir(root.join(".git")).unwrap();
        let nested = root.join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("main.rs");
        fs::write(&file, "fn main() {}").unwrap();

        assert_eq!(get_project_root(&file), Some(root.to_path_buf()));
    }

    #[test]
    fn test_finds_root_from_the_root_itself() {
        let temp = tempdir().expect("failed to create temp dir");
        let root = temp.path();
        fs::create_dir(root.join(".git")).unwrap();

        assert_eq!(get_project_root(root), Some(root.to_path_buf()));
    }

    #[test]
    fn test_nearest_root_wins_for_nested_repositories() {
        let temp = tempdir().expect("failed to create temp dir");
        let outer = temp.path();
        fs::create_dir(outer.join(".git")).unwrap();
        let inner = outer.join("vendor").join("dep");
        fs::create_dir_all(inner.join(".git")).unwrap();
        let file = inner.join("lib.rs");
        fs::write(&file, "").unwrap();

        assert_eq!(get_project_root(&file), Some(inner.clone()));
    }

    #[test]
    fn test_git_file_marks_a_worktree_root() {
        let temp = tempdir().expect("failed to create temp dir");
        let root = temp.path();
        fs::write(root.join(".git"), "gitdir: /elsewhere").unwrap();
        let file = root.join("a.rs");
        fs::write(&file, "").unwrap();

        assert_eq!(get_project_root(&file), Some(root.to_path_buf()));
    }

    #[test]
    fn test_no_repository_yields_none() {
        let temp = tempdir().expect("failed to create temp dir");
        let file = temp.path().join("loose.rs");
        fs::write(&file, "").unwrap();

        assert_eq!(get_project_root(&file), None);
    }
}
