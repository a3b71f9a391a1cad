use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-user / per-project settings directory
pub const DIR_NAME: &str = ".isostudy";

/// Get the isostudy directory - checks for local .isostudy first, then falls back to global ~/.isostudy
pub fn get_isostudy_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DIR_NAME))
}

/// Find local .isostudy directory by walking up the directory tree
fn find_local_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let dir = current.join(DIR_NAME);
        if dir.is_dir() {
            return Some(dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the isostudy directory exists
pub fn ensure_isostudy_dir() -> Result<PathBuf> {
    let dir = get_isostudy_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Create a local .isostudy directory inside `parent`
pub fn init_local_dir(parent: &Path) -> Result<PathBuf> {
    let dir = parent.join(DIR_NAME);

    if dir.exists() {
        anyhow::bail!("isostudy directory already exists: {}", dir.display());
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    Ok(dir)
}

/// Path to config.json inside an isostudy directory
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join("config.json")
}

/// Path to the log file inside an isostudy directory
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join("isostudy.log")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_local_dir_walks_up() {
        let temp_dir = tempfile::tempdir().unwrap();
        let local = temp_dir.path().join(DIR_NAME);
        fs::create_dir_all(&local).unwrap();
        let nested = temp_dir.path().join("course").join("week1");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_local_dir(&nested), Some(local));
    }

    #[test]
    fn test_init_local_dir_twice_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        let dir = init_local_dir(temp_dir.path()).unwrap();
        assert!(dir.is_dir());
        assert!(init_local_dir(temp_dir.path()).is_err());
    }

    #[test]
    fn test_atomic_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        assert_eq!(fs::read_to_string(&test_file).unwrap(), "second");
    }
}
