//! User settings for send-cli
//!
//! Holds the vault key parameters, the account entitlements used for
//! capability checks, and presentation preferences.

use serde::{Deserialize, Serialize};

use super::paths::SendPaths;
use crate::crypto::key_derivation::KeyDerivationParams;
use crate::error::SendError;

/// Vault encryption settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EncryptionSettings {
    /// Key derivation parameters (salt, memory cost, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_params: Option<KeyDerivationParams>,

    /// A known token encrypted with the vault key, used to check the passphrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_hash: Option<String>,
}

/// Account entitlements
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountSettings {
    /// Account email, shown in `config` output only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the account holds the premium entitlement (file sends)
    #[serde(default)]
    pub premium: bool,
}

/// User settings for send-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Vault encryption settings
    #[serde(default)]
    pub encryption: EncryptionSettings,

    /// Account entitlements
    #[serde(default)]
    pub account: AccountSettings,

    /// Base URL used to build a send's access URL
    #[serde(default = "default_access_base_url")]
    pub access_base_url: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_access_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            encryption: EncryptionSettings::default(),
            account: AccountSettings::default(),
            access_base_url: default_access_base_url(),
        }
    }
}

impl Settings {
    /// Whether the vault key has been configured
    pub fn has_vault_key(&self) -> bool {
        self.encryption.key_params.is_some() && self.encryption.verification_hash.is_some()
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SendPaths) -> Result<Self, SendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SendError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SendPaths) -> Result<(), SendError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SendError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SendError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
