//! Edit request model
//!
//! The caller-supplied description of the desired state of a send. It arrives
//! as base64-encoded JSON using the same camelCase shape as `SendResponse`,
//! so a response can be edited and fed straight back in. Absent fields mean
//! "leave unchanged".

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ids::SendId;
use super::send::SendType;
use crate::error::{SendError, SendResult};

/// Standard alphabet, accepting input with or without padding
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Days until deletion in a freshly generated template
const TEMPLATE_DELETION_DAYS: i64 = 7;

/// Requested text content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextRequest {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub hidden: Option<bool>,
}

/// Requested file details
///
/// Accepted for symmetry with responses; file content cannot be replaced by
/// an edit, so these values are never applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub size_name: Option<String>,
}

/// A decoded edit request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    #[serde(default)]
    pub id: Option<SendId>,

    /// Must match the stored send's type
    #[serde(rename = "type")]
    pub send_type: SendType,

    #[serde(default)]
    pub name: Option<String>,

    /// An empty string clears the notes
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub text: Option<SendTextRequest>,

    #[serde(default)]
    pub file: Option<SendFileRequest>,

    #[serde(default)]
    pub max_access_count: Option<u32>,

    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,

    /// New access password; absent keeps the current one
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub disabled: Option<bool>,

    #[serde(default)]
    pub hide_email: Option<bool>,
}

impl SendRequest {
    /// Decode a base64-encoded JSON request
    pub fn from_encoded(encoded: &str) -> SendResult<Self> {
        let bytes = LENIENT_STANDARD
            .decode(encoded.trim())
            .map_err(|e| SendError::Validation(format!("Invalid base64: {}", e)))?;

        let json = String::from_utf8(bytes)
            .map_err(|e| SendError::Validation(format!("Invalid UTF-8: {}", e)))?;

        Self::from_json(&json)
    }

    /// Parse a JSON request
    pub fn from_json(json: &str) -> SendResult<Self> {
        serde_json::from_str(json).map_err(SendError::from)
    }

    /// Encode this request the way `from_encoded` expects it
    pub fn to_encoded(&self) -> SendResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(json))
    }

    /// A filled-in example request for the given send type
    pub fn template(send_type: SendType) -> Self {
        let (text, file) = match send_type {
            SendType::Text => (
                Some(SendTextRequest {
                    text: Some("Text contained in the send.".to_string()),
                    hidden: Some(false),
                }),
                None,
            ),
            SendType::File => (
                None,
                Some(SendFileRequest {
                    file_name: Some("file attachment location".to_string()),
                    ..Default::default()
                }),
            ),
        };

        Self {
            id: None,
            send_type,
            name: Some("Send name".to_string()),
            notes: Some("Some notes about this send.".to_string()),
            text,
            file,
            max_access_count: None,
            deletion_date: Some(Utc::now() + Duration::days(TEMPLATE_DELETION_DAYS)),
            expiration_date: None,
            password: None,
            disabled: Some(false),
            hide_email: Some(false),
        }
    }
}
