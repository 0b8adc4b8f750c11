//
//  ynab-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Low-level helpers used by [`Config`](super::Config) to read and write the
//! TOML file.
//!
//! ## Notes
//!
//! - Write operations create parent directories as needed
//! - The file can hold an access token, so on Unix it is written with mode `0600`

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes a configuration file, creating parent directories.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use ynab_client::config::write_config_file;
///
/// write_config_file(Path::new("/tmp/ynab/config.toml"), "default_budget = \"last-used\"\n")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Returns `true` if a configuration file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(!config_exists(&path));
        write_config_file(&path, "timeout_secs = 5\n").unwrap();
        assert!(config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), "timeout_secs = 5\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
