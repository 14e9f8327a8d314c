pub mod output;
pub mod walker;

pub use walker::FileWalker;

use crate::core::errors::Error;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Atomically replace `path` with `content`.
///
/// The content is written to a sibling `<path>.tmp` file and renamed into
/// place only once the write completes, so no reader ever observes a
/// partially rewritten file. On failure the original file is untouched.
pub fn replace_file(path: &Path, content: &str) -> Result<(), Error> {
    let temp_path = temp_sibling(path);
    fs::write(&temp_path, content).map_err(|source| Error::Replace {
        path: path.to_path_buf(),
        source,
    })?;
    fs::rename(&temp_path, path).map_err(|source| Error::Replace {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
