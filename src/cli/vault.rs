//! Vault setup and unlocking
//!
//! `init` creates the vault key parameters and passphrase check token.
//! Commands that read or write sends unlock the vault with the passphrase
//! from `--passphrase`/`SEND_CLI_PASSPHRASE`, or by prompting.

use crate::audit::EntityType;
use crate::config::{SendPaths, Settings};
use crate::crypto::{KeyDerivationParams, SecureString, VaultSendCrypto};
use crate::error::{SendError, SendResult};
use crate::storage::Storage;

const MIN_PASSPHRASE_LEN: usize = 8;

/// Set up the vault key and account settings
pub fn handle_init(
    paths: &SendPaths,
    settings: &mut Settings,
    storage: &Storage,
    passphrase: Option<SecureString>,
    key_params: KeyDerivationParams,
    premium: bool,
) -> SendResult<serde_json::Value> {
    if settings.has_vault_key() {
        return Err(SendError::Config(
            "send-cli is already initialized".to_string(),
        ));
    }

    let passphrase = match passphrase {
        Some(p) => p,
        None => prompt_new_passphrase()?,
    };
    if passphrase.len() < MIN_PASSPHRASE_LEN {
        return Err(SendError::Validation(format!(
            "Passphrase must be at least {} characters",
            MIN_PASSPHRASE_LEN
        )));
    }

    let (_crypto, encryption) =
        VaultSendCrypto::initialize(&passphrase, key_params)?;

    settings.encryption = encryption;
    settings.account.premium = premium;
    settings.save(paths)?;

    let summary = serde_json::json!({
        "dataDir": paths.base_dir(),
        "premium": settings.account.premium,
        "accessBaseUrl": settings.access_base_url,
    });
    storage.log_create(EntityType::Settings, "settings", &summary)?;

    Ok(summary)
}

/// Derive the vault key, prompting for the passphrase if none was given
pub fn unlock_vault(
    settings: &Settings,
    passphrase: Option<SecureString>,
) -> SendResult<VaultSendCrypto> {
    if !settings.has_vault_key() {
        return Err(SendError::Config(
            "send-cli is not initialized. Run 'sendcli init' first.".to_string(),
        ));
    }

    let passphrase = match passphrase {
        Some(p) => p,
        None => prompt_passphrase("Passphrase: ")?,
    };

    VaultSendCrypto::unlock(&passphrase, &settings.encryption)
}

fn prompt_new_passphrase() -> SendResult<SecureString> {
    loop {
        let first = prompt_passphrase("New passphrase: ")?;
        if first.len() < MIN_PASSPHRASE_LEN {
            eprintln!(
                "Passphrase must be at least {} characters. Please try again.",
                MIN_PASSPHRASE_LEN
            );
            continue;
        }

        let second = prompt_passphrase("Confirm passphrase: ")?;
        if first.as_str() != second.as_str() {
            eprintln!("Passphrases do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

fn prompt_passphrase(prompt: &str) -> SendResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| SendError::Encryption(format!("Failed to read passphrase: {}", e)))
}
