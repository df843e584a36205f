//! Save file locations.
//!
//! Files live in the platform config directory for `gridiron`, or in
//! `$GRIDIRON_HOME` when that variable is set.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const HOME_ENV_VAR: &str = "GRIDIRON_HOME";

/// Get the save directory path, creating it if needed.
pub fn gridiron_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os(HOME_ENV_VAR) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let project_dirs = ProjectDirs::from("", "", "gridiron").ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?;
            project_dirs.config_dir().to_path_buf()
        }
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in the save directory.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(gridiron_dir()?.join(filename))
}
