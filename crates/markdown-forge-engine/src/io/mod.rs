use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(PathBuf),
}

/// Read a whole file, failing with `NotFound` when it is missing
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to `path`, creating parent directories
pub fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under `root`, returned relative to it and sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    for path in walk_files(root)? {
        if path.extension() == Some("md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy every file under `src` into `dst`, keeping the directory layout.
///
/// Returns the relative paths of the copied files.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(src)?;
    fs::create_dir_all(dst).map_err(IoError::Io)?;

    let mut copied = walk_files(src)?;
    copied.sort();
    for relative in &copied {
        let target = relative.to_path(dst);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(IoError::Io)?;
        }
        fs::copy(relative.to_path(src), &target).map_err(IoError::Io)?;
        log::debug!("{} -> {}", relative.to_path(src).display(), target.display());
    }
    Ok(copied)
}

/// Remove `dir` with everything in it, then recreate it empty
pub fn reset_dir(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dir).map_err(IoError::Io)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDir(path.to_path_buf()));
    }
    Ok(())
}

fn walk_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    let mut files = Vec::new();
    walk_directory_recursive(root, RelativePathBuf::new(), &mut files)?;
    Ok(files)
}

fn walk_directory_recursive(
    dir: &Path,
    prefix: RelativePathBuf,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let name = entry.file_name();
        let relative = prefix.join(&*name.to_string_lossy());

        if path.is_dir() {
            walk_directory_recursive(&path, relative, files)?;
        } else {
            files.push(relative);
        }
    }

    Ok(())
}
