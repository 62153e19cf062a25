use crate::core::{ResourceError, ResourceResult};
use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it and any parents if necessary
pub fn ensure_dir(path: &Path) -> ResourceResult<()> {
    if path.exists() && !path.is_dir() {
        return Err(ResourceError::Path(format!(
            "{} exists and is not a directory",
            path.display()
        )));
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `contents` to `dir/name`, replacing any previous file.
///
/// Returns the path that was written.
pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> ResourceResult<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}
