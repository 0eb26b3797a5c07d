//! Path management for send-cli
//!
//! ## Path Resolution Order
//!
//! 1. `SEND_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/send-cli` on Linux,
//!    `%APPDATA%\send-cli` on Windows), as reported by `directories`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SendError;
use crate::models::SendId;

/// Manages all paths used by send-cli
#[derive(Debug, Clone)]
pub struct SendPaths {
    /// Base directory for all send-cli data
    base_dir: PathBuf,
}

impl SendPaths {
    /// Create a new SendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SendError> {
        let base_dir = if let Ok(custom) = std::env::var("SEND_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding encrypted file metadata (<base>/data/files/)
    pub fn files_dir(&self) -> PathBuf {
        self.data_dir().join("files")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to sends.json
    pub fn sends_file(&self) -> PathBuf {
        self.data_dir().join("sends.json")
    }

    /// Get the path of the file metadata artifact for one send
    pub fn file_metadata_file(&self, id: &SendId) -> PathBuf {
        self.files_dir().join(format!("{}.json", id))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SendError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.files_dir())
            .map_err(|e| SendError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if send-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SendError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| SendError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("send-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.files_dir(),
            temp_dir.path().join("data").join("files")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("SEND_CLI_DATA_DIR", custom_path);

        let paths = SendPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("SEND_CLI_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SendPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.files_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let id = SendId::parse("AB12CD34");

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.sends_file(),
            temp_dir.path().join("data").join("sends.json")
        );
        assert_eq!(
            paths.file_metadata_file(&id),
            temp_dir.path().join("data").join("files").join("ab12cd34.json")
        );
    }
}
