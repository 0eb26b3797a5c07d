//! Encrypted send model
//!
//! The storable form of a send. Secret content lives in the sealed `payload`;
//! the envelope fields around it stay in the clear so storage can enforce
//! access limits and deletion without the vault key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{FileId, SendId};
use super::send::SendType;
use crate::crypto::EncryptedData;

/// Clear-text metadata of a file attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileMetadata {
    pub id: Option<FileId>,
    pub size: u64,
}

/// A send as persisted by the storage service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedSend {
    pub id: SendId,

    pub access_id: String,

    /// Fixed when the send is created
    #[serde(rename = "type")]
    pub send_type: SendType,

    /// Sealed name, notes, text and file name
    pub payload: EncryptedData,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<SendFileMetadata>,

    #[serde(default)]
    pub max_access_count: Option<u32>,

    #[serde(default)]
    pub access_count: u32,

    pub revision_date: DateTime<Utc>,

    /// Not covered by the payload; must be set explicitly before saving
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,

    /// Argon2 PHC hash of the access password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub hide_email: bool,
}

/// Sealed file bytes produced alongside an encrypted send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedFileData {
    pub send_id: SendId,
    pub file_id: FileId,
    pub data: EncryptedData,
}
