//! Send cryptography service
//!
//! `SendCrypto` is the narrow contract the edit workflow depends on.
//! `VaultSendCrypto` implements it with the local vault key: the secret part
//! of a send (name, notes, text, file name) is sealed as one JSON payload,
//! everything else stays on the envelope.

use std::cell::{Cell, OnceCell};

use serde::{Deserialize, Serialize};

use super::encryption::{decrypt_string, encrypt, encrypt_string, open_json, seal_json};
use super::key_derivation::{derive_key, hash_password, DerivedKey, KeyDerivationParams};
use super::EncryptedData;
use crate::config::settings::EncryptionSettings;
use crate::error::{SendError, SendResult};
use crate::models::{
    EncryptedFileData, EncryptedSend, SendFileMetadata, SendFileView, SendTextView, SendView,
};

/// Known plaintext sealed at init time to check the passphrase later
const VERIFICATION_TOKEN: &str = "send_cli_verify";

/// Decrypts stored sends and encrypts edited views
pub trait SendCrypto {
    /// Produce the plaintext view of a stored send
    fn decrypt(&self, send: &EncryptedSend) -> SendResult<SendView>;

    /// Produce the storable form of a view
    ///
    /// Deletion and expiration dates are not part of the result; callers set
    /// them on the envelope. When `file_data` is given, the sealed bytes come
    /// back as the second element.
    fn encrypt(
        &self,
        view: &SendView,
        file_data: Option<&[u8]>,
        password: Option<&str>,
    ) -> SendResult<(EncryptedSend, Option<EncryptedFileData>)>;
}

/// The sealed part of a send
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendPayload {
    name: String,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    text: Option<SendTextView>,
    #[serde(default)]
    file_name: Option<String>,
}

/// Send cryptography under the local vault key
pub struct VaultSendCrypto {
    key: DerivedKey,
}

// Don't print the key in Debug output
impl std::fmt::Debug for VaultSendCrypto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSendCrypto").finish_non_exhaustive()
    }
}

impl VaultSendCrypto {
    pub fn new(key: DerivedKey) -> Self {
        Self { key }
    }

    /// Set up a new vault key, returning the settings that describe it
    pub fn initialize(
        passphrase: &str,
        params: KeyDerivationParams,
    ) -> SendResult<(Self, EncryptionSettings)> {
        let key = derive_key(passphrase, &params)?;
        let verification = encrypt_string(VERIFICATION_TOKEN, &key)?;
        let verification_json = serde_json::to_string(&verification).map_err(|e| {
            SendError::Encryption(format!("Failed to serialize verification: {}", e))
        })?;

        let settings = EncryptionSettings {
            key_params: Some(params),
            verification_hash: Some(verification_json),
        };
        Ok((Self::new(key), settings))
    }

    /// Derive the vault key and check it against the stored verification token
    pub fn unlock(passphrase: &str, settings: &EncryptionSettings) -> SendResult<Self> {
        let key_params = settings
            .key_params
            .as_ref()
            .ok_or_else(|| SendError::Encryption("No key parameters found".to_string()))?;

        let verification_json = settings
            .verification_hash
            .as_ref()
            .ok_or_else(|| SendError::Encryption("No verification hash found".to_string()))?;

        let verification: EncryptedData = serde_json::from_str(verification_json)
            .map_err(|e| SendError::Encryption(format!("Invalid verification data: {}", e)))?;

        let key = derive_key(passphrase, key_params)?;

        match decrypt_string(&verification, &key) {
            Ok(token) if token == VERIFICATION_TOKEN => Ok(Self::new(key)),
            _ => Err(SendError::Encryption("Invalid passphrase".to_string())),
        }
    }
}

impl SendCrypto for VaultSendCrypto {
    fn decrypt(&self, send: &EncryptedSend) -> SendResult<SendView> {
        let payload: SendPayload = open_json(&send.payload, &self.key)?;

        let deletion_date = send.deletion_date.ok_or_else(|| {
            SendError::Validation(format!("Send {} has no deletion date", send.id))
        })?;

        let file = match (&send.file, payload.file_name) {
            (Some(meta), Some(file_name)) => {
                Some(SendFileView::new(meta.id.clone(), file_name, meta.size))
            }
            (Some(meta), None) => Some(SendFileView::new(meta.id.clone(), "", meta.size)),
            (None, _) => None,
        };

        Ok(SendView {
            id: send.id.clone(),
            access_id: send.access_id.clone(),
            name: payload.name,
            notes: payload.notes,
            send_type: send.send_type,
            text: payload.text,
            file,
            max_access_count: send.max_access_count,
            access_count: send.access_count,
            revision_date: send.revision_date,
            deletion_date,
            expiration_date: send.expiration_date,
            password_set: send.password.is_some(),
            disabled: send.disabled,
            hide_email: send.hide_email,
        })
    }

    fn encrypt(
        &self,
        view: &SendView,
        file_data: Option<&[u8]>,
        password: Option<&str>,
    ) -> SendResult<(EncryptedSend, Option<EncryptedFileData>)> {
        let payload = SendPayload {
            name: view.name.clone(),
            notes: view.notes.clone(),
            text: view.text.clone(),
            file_name: view.file.as_ref().map(|f| f.file_name.clone()),
        };
        let sealed = seal_json(&payload, &self.key)?;

        let (file, file_artifact) = match file_data {
            Some(bytes) => {
                let file_id = view
                    .file
                    .as_ref()
                    .and_then(|f| f.id.clone())
                    .unwrap_or_default();
                let artifact = EncryptedFileData {
                    send_id: view.id.clone(),
                    file_id: file_id.clone(),
                    data: encrypt(bytes, &self.key)?,
                };
                let meta = SendFileMetadata {
                    id: Some(file_id),
                    size: bytes.len() as u64,
                };
                (Some(meta), Some(artifact))
            }
            None => {
                let meta = view.file.as_ref().map(|f| SendFileMetadata {
                    id: f.id.clone(),
                    size: f.size,
                });
                (meta, None)
            }
        };

        let password = password.map(hash_password).transpose()?;

        let send = EncryptedSend {
            id: view.id.clone(),
            access_id: view.access_id.clone(),
            send_type: view.send_type,
            payload: sealed,
            file,
            max_access_count: view.max_access_count,
            access_count: view.access_count,
            revision_date: view.revision_date,
            deletion_date: None,
            expiration_date: None,
            password,
            disabled: view.disabled,
            hide_email: view.hide_email,
        };

        Ok((send, file_artifact))
    }
}

/// Vault crypto that derives the key on first use
///
/// A request rejected before any payload is opened never derives the key.
/// The unlock closure runs at most once and a failed unlock is not retried.
pub struct LazyVaultCrypto<F> {
    unlock: Cell<Option<F>>,
    crypto: OnceCell<VaultSendCrypto>,
}

impl<F> LazyVaultCrypto<F>
where
    F: FnOnce() -> SendResult<VaultSendCrypto>,
{
    pub fn new(unlock: F) -> Self {
        Self {
            unlock: Cell::new(Some(unlock)),
            crypto: OnceCell::new(),
        }
    }

    fn vault(&self) -> SendResult<&VaultSendCrypto> {
        if let Some(crypto) = self.crypto.get() {
            return Ok(crypto);
        }

        let unlock = self
            .unlock
            .take()
            .ok_or_else(|| SendError::Encryption("Vault unlock already failed".to_string()))?;
        let crypto = unlock()?;
        Ok(self.crypto.get_or_init(|| crypto))
    }
}

impl<F> SendCrypto for LazyVaultCrypto<F>
where
    F: FnOnce() -> SendResult<VaultSendCrypto>,
{
    fn decrypt(&self, send: &EncryptedSend) -> SendResult<SendView> {
        self.vault()?.decrypt(send)
    }

    fn encrypt(
        &self,
        view: &SendView,
        file_data: Option<&[u8]>,
        password: Option<&str>,
    ) -> SendResult<(EncryptedSend, Option<EncryptedFileData>)> {
        self.vault()?.encrypt(view, file_data, password)
    }
}
