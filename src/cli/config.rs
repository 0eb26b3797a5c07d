//! Config command

use crate::config::Settings;
use crate::error::SendResult;
use crate::storage::Storage;

/// Paths, settings and vault state, without key material
pub fn config_summary(storage: &Storage, settings: &Settings) -> SendResult<serde_json::Value> {
    let paths = storage.paths();

    Ok(serde_json::json!({
        "configDir": paths.base_dir(),
        "dataDir": paths.data_dir(),
        "settingsFile": paths.settings_file(),
        "settingsSaved": paths.is_initialized(),
        "auditLog": paths.audit_log(),
        "initialized": settings.has_vault_key(),
        "sends": storage.sends.count()?,
        "premium": settings.account.premium,
        "email": settings.account.email,
        "accessBaseUrl": settings.access_base_url,
        "schemaVersion": settings.schema_version,
    }))
}
