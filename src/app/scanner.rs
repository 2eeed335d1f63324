use crate::app::error::ContextError;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Names never emitted from a directory walk.
const NUISANCE_FILES: &[&str] = &[".DS_Store", ".keep"];

pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks the root in lexical order, yielding every regular file.
    ///
    /// No ignore files are honoured and hidden entries are visited. A walk
    /// error is yielded in place of the entry (or subtree) it affects and the
    /// walk carries on.
    pub fn scan(&self) -> impl Iterator<Item = Result<PathBuf, ContextError>> + '_ {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        walker.filter_map(move |result| match result {
            Ok(entry) => self.process_entry(&entry).map(Ok),
            Err(err) => Some(Err(ContextError::Walk(err))),
        })
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<PathBuf> {
        if entry.file_type().map_or(false, |ft| ft.is_dir()) {
            return None;
        }
        if is_nuisance(entry.path()) {
            return None;
        }
        Some(entry.path().to_path_buf())
    }
}

fn is_nuisance(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |name| NUISANCE_FILES.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn walks_in_lexical_order_skipping_nuisance() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("b.go"), "").unwrap();
        fs::write(root.join("a.go"), "").unwrap();
        fs::write(root.join(".DS_Store"), "").unwrap();
        fs::write(root.join("sub/b.go"), "").unwrap();
        fs::write(root.join("sub/.keep"), "").unwrap();
        fs::write(root.join("sub/deeper/.hidden"), "").unwrap();

        let files: Vec<PathBuf> = Scanner::new(root)
            .scan()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            files,
            vec![
                root.join("a.go"),
                root.join("b.go"),
                root.join("sub/b.go"),
                root.join("sub/deeper/.hidden"),
            ]
        );
    }

    #[test]
    fn ignore_files_are_not_honoured() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".gitignore"), "*.log\n").unwrap();
        fs::write(root.join("app.log"), "x").unwrap();

        let files: Vec<PathBuf> = Scanner::new(root).scan().filter_map(Result::ok).collect();

        assert_eq!(files, vec![root.join(".gitignore"), root.join("app.log")]);
    }

    #[test]
    fn missing_root_yields_walk_error() {
        let dir = tempdir().unwrap();
        let results: Vec<_> = Scanner::new(dir.path().join("absent")).scan().collect();

        assert_eq!(results.len(), 1);
        let err = results.into_iter().next().unwrap().unwrap_err();
        assert!(matches!(err, ContextError::Walk(_)));
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("absent"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdir_error_names_the_subdir() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(dir.path().join("ok.txt"), "ok").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let results: Vec<_> = Scanner::new(dir.path()).scan().collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let messages: Vec<String> = results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .map(|e| e.to_string())
            .collect();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("locked"));
        assert!(results.iter().any(|r| matches!(r, Ok(p) if p.ends_with("ok.txt"))));
    }

    #[test]
    fn file_root_is_emitted_directly() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("single.rs");
        fs::write(&file, "fn x() {}").unwrap();

        let files: Vec<PathBuf> = Scanner::new(&file).scan().filter_map(Result::ok).collect();
        assert_eq!(files, vec![file]);
    }
}
