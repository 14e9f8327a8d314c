use crate::core::errors::Error;
use crate::core::Dialect;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Discovers the files both passes operate on: every file under the root
/// whose extension binds to a dialect and which no ignore pattern excludes.
///
/// Entries are visited in file-name order so discovery indices (and with
/// them, count tie-breaks) are reproducible across runs over an unchanged
/// corpus.
pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .sort_by_file_name(std::cmp::Ord::cmp)
            .build();

        for entry in walker {
            let entry = entry.map_err(|source| Error::Traversal {
                root: self.root.clone(),
                source,
            })?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if Dialect::from_path(path).is_none() {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_walk_keeps_only_supported_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "style.css");
        touch(dir.path(), "app.js");
        touch(dir.path(), "page.php");
        touch(dir.path(), "readme.md");
        touch(dir.path(), "data.json");

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["app.js", "index.html", "page.php", "style.css"]);
    }

    #[test]
    fn test_walk_recurses_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(dir.path(), "top.css");
        touch(&dir.path().join("sub"), "nested.html");

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_ignore_patterns_exclude_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "keep.css");
        touch(dir.path(), "skip.min.css");

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["*.min.css".to_string()])
            .walk()
            .unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["keep.css"]);
    }
}
