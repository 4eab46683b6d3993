//
//  starr
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations for the configuration file.
//!
//! ## Notes
//!
//! - Write operations create parent directories
//! - The file holds API keys, so on Unix it is written with mode `0600`

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Parameters
///
/// * `path` - The path to the configuration file to read
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes a configuration file, creating parent directories as needed.
///
/// # Parameters
///
/// * `path` - Destination path
/// * `content` - Complete file content
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    restrict_permissions(path)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// Checks whether a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.toml");
        assert!(!config_exists(&path));

        write_config_file(&path, "[log]\nmax_body = 10\n").unwrap();
        assert!(config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), "[log]\nmax_body = 10\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_restricts_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
