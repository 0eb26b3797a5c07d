//! Send CLI commands

use std::io;

use clap::Subcommand;

use crate::config::Settings;
use crate::crypto::{LazyVaultCrypto, SendCrypto, VaultSendCrypto};
use crate::error::{EditError, SendError, SendResult};
use crate::models::{SendId, SendRequest, SendResponse, SendType};
use crate::services::{AccountCapabilities, SendEditService};
use crate::storage::{SendStore, Storage};

/// Send subcommands
#[derive(Subcommand)]
pub enum SendCommands {
    /// Edit an existing send from a base64-encoded JSON request
    Edit {
        /// Encoded request; read from stdin when omitted
        encoded_json: Option<String>,
        /// Edit this send instead of the one named in the request
        #[arg(long = "itemid", value_name = "ID")]
        item_id: Option<String>,
    },
    /// Show a decrypted send
    Get {
        /// Send ID
        id: String,
    },
    /// Print an edit request template (text or file)
    Template {
        /// Send type
        send_type: String,
        /// Print the template base64-encoded, ready for 'send edit'
        #[arg(long)]
        encoded: bool,
    },
}

/// Handle a send command
///
/// `unlock` is only called by commands that need the vault key. `send edit`
/// defers it until the request has been decoded, found and checked.
pub fn handle_send_command<F>(
    storage: &Storage,
    settings: &Settings,
    unlock: F,
    cmd: SendCommands,
) -> Result<serde_json::Value, EditError>
where
    F: FnOnce() -> SendResult<VaultSendCrypto>,
{
    match cmd {
        SendCommands::Edit {
            encoded_json,
            item_id,
        } => {
            let crypto = LazyVaultCrypto::new(unlock);
            let capabilities = AccountCapabilities::new(settings);
            let service = SendEditService::new(
                storage,
                &crypto,
                &capabilities,
                settings.access_base_url.as_str(),
            );

            let response = service.edit(
                encoded_json.as_deref(),
                item_id.as_deref(),
                io::stdin().lock(),
            )?;
            to_data(&response)
        }
        SendCommands::Get { id } => {
            let id = SendId::parse(&id);
            let stored = storage
                .get(&id)?
                .ok_or_else(|| SendError::send_not_found(id.as_str()))
                .map_err(|e| EditError::NotFound(e.to_string()))?;

            let crypto = unlock()?;
            let view = crypto.decrypt(&stored)?;
            to_data(&SendResponse::from_view(view, &settings.access_base_url))
        }
        SendCommands::Template { send_type, encoded } => {
            let send_type = SendType::parse(&send_type).ok_or_else(|| {
                EditError::InvalidInput(format!(
                    "Invalid send type: '{}'. Valid types: text, file",
                    send_type
                ))
            })?;
            let template = SendRequest::template(send_type);
            if encoded {
                Ok(serde_json::Value::String(template.to_encoded()?))
            } else {
                to_data(&template)
            }
        }
    }
}

fn to_data<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, EditError> {
    serde_json::to_value(value)
        .map_err(SendError::from)
        .map_err(EditError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SendPaths;
    use crate::crypto::EncryptedData;
    use crate::error::EditErrorKind;
    use crate::models::EncryptedSend;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn locked() -> SendResult<VaultSendCrypto> {
        Err(SendError::Encryption("vault is locked".into()))
    }

    fn storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_template_does_not_unlock() {
        let (_temp, storage) = storage();
        let data = handle_send_command(
            &storage,
            &Settings::default(),
            locked,
            SendCommands::Template {
                send_type: "text".into(),
                encoded: false,
            },
        )
        .unwrap();

        assert_eq!(data["type"], 0);
        assert!(data["text"]["text"].is_string());
    }

    #[test]
    fn test_encoded_template_decodes() {
        let (_temp, storage) = storage();
        let data = handle_send_command(
            &storage,
            &Settings::default(),
            locked,
            SendCommands::Template {
                send_type: "file".into(),
                encoded: true,
            },
        )
        .unwrap();

        let request = SendRequest::from_encoded(data.as_str().unwrap()).unwrap();
        assert_eq!(request.send_type, SendType::File);
    }

    #[test]
    fn test_template_rejects_unknown_type() {
        let (_temp, storage) = storage();
        let err = handle_send_command(
            &storage,
            &Settings::default(),
            locked,
            SendCommands::Template {
                send_type: "photo".into(),
                encoded: false,
            },
        )
        .unwrap_err();

        assert_eq!(err.kind(), EditErrorKind::InvalidInput);
    }

    #[test]
    fn test_get_unknown_send() {
        let (_temp, storage) = storage();
        let err = handle_send_command(
            &storage,
            &Settings::default(),
            locked,
            SendCommands::Get { id: "nope".into() },
        )
        .unwrap_err();

        assert_eq!(err.kind(), EditErrorKind::NotFound);
        assert_eq!(err.message(), "Send not found: nope");
    }

    fn stored_text_send(storage: &Storage, id: &str) {
        let send = EncryptedSend {
            id: SendId::parse(id),
            access_id: "pub".into(),
            send_type: SendType::Text,
            payload: EncryptedData {
                nonce: "bm9uY2U=".into(),
                ciphertext: "Y2lwaGVy".into(),
                version: 1,
            },
            file: None,
            max_access_count: None,
            access_count: 0,
            revision_date: Utc::now(),
            deletion_date: Some(Utc::now() + Duration::days(7)),
            expiration_date: None,
            password: None,
            disabled: false,
            hide_email: false,
        };
        storage.save(send, None).unwrap();
    }

    fn edit_with_locked_vault(storage: &Storage, json: &str) -> EditError {
        handle_send_command(
            storage,
            &Settings::default(),
            locked,
            SendCommands::Edit {
                encoded_json: Some(STANDARD.encode(json)),
                item_id: None,
            },
        )
        .unwrap_err()
    }

    #[test]
    fn test_edit_validates_before_unlocking() {
        let (_temp, storage) = storage();
        stored_text_send(&storage, "t1");

        let err = edit_with_locked_vault(&storage, "{}");
        assert_eq!(err.kind(), EditErrorKind::InvalidInput);

        let err = edit_with_locked_vault(&storage, r#"{"id":"t1","type":1,"name":"new"}"#);
        assert_eq!(err.kind(), EditErrorKind::InvalidInput);
        assert_eq!(err.message(), "Cannot change a Send's type");

        let err = edit_with_locked_vault(&storage, r#"{"id":"nope","type":0}"#);
        assert_eq!(err.kind(), EditErrorKind::NotFound);
    }

    #[test]
    fn test_edit_unlocks_for_valid_request() {
        let (_temp, storage) = storage();
        stored_text_send(&storage, "t1");

        let err = edit_with_locked_vault(&storage, r#"{"id":"t1","type":0,"name":"new"}"#);
        assert_eq!(err.kind(), EditErrorKind::Internal);
        assert!(err.message().contains("vault is locked"));
    }
}
