use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "pedsite", "pedsite")
}

#[must_use]
pub fn get_config_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(".").join(".pedsite"),
        |proj_dirs| proj_dirs.config_dir().to_path_buf(),
    )
}

#[must_use]
pub fn get_log_path() -> PathBuf {
    project_dirs()
        .map_or_else(
            || PathBuf::from(".").join(".pedsite"),
            |proj_dirs| proj_dirs.data_local_dir().to_path_buf(),
        )
        .join("pedsite.log")
}

/// Routes `tracing` output to `path`; the terminal itself belongs to the UI.
///
/// # Errors
/// Returns an error if the log file or its directory cannot be created.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
