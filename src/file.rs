// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// Write `contents` to `path`, creating missing parent directories.
/// Returns the path written to.
pub fn write_text(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logf!("File: wrote {} bytes → {}", contents.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
