//! Send model
//!
//! A Send is a shareable piece of encrypted text or a file, with optional
//! expiration and a mandatory deletion date. `SendView` is the decrypted
//! projection used for display and editing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{FileId, SendId};

/// Kind of content a send carries
///
/// Serialized as its integer discriminant (`0` text, `1` file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SendType {
    Text,
    File,
}

impl SendType {
    /// File sends need the premium entitlement
    pub fn requires_premium(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Parse send type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "0" => Some(Self::Text),
            "file" | "1" => Some(Self::File),
            _ => None,
        }
    }
}

impl TryFrom<u8> for SendType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Text),
            1 => Ok(Self::File),
            other => Err(format!("unknown send type: {}", other)),
        }
    }
}

impl From<SendType> for u8 {
    fn from(send_type: SendType) -> Self {
        match send_type {
            SendType::Text => 0,
            SendType::File => 1,
        }
    }
}

impl fmt::Display for SendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::File => write!(f, "File"),
        }
    }
}

/// Text content of a text send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextView {
    pub text: Option<String>,

    /// Whether recipients must click to reveal the text
    #[serde(default)]
    pub hidden: bool,
}

/// File attachment details of a file send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileView {
    pub id: Option<FileId>,
    pub file_name: String,
    pub size: u64,
    pub size_name: String,
}

impl SendFileView {
    pub fn new(id: Option<FileId>, file_name: impl Into<String>, size: u64) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            size,
            size_name: format_size(size),
        }
    }
}

/// The decrypted, plaintext projection of a send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendView {
    pub id: SendId,

    /// Public token recipients use to open the send
    pub access_id: String,

    pub name: String,

    pub notes: Option<String>,

    #[serde(rename = "type")]
    pub send_type: SendType,

    pub text: Option<SendTextView>,

    pub file: Option<SendFileView>,

    /// Number of opens after which the send stops being accessible
    pub max_access_count: Option<u32>,

    pub access_count: u32,

    pub revision_date: DateTime<Utc>,

    pub deletion_date: DateTime<Utc>,

    pub expiration_date: Option<DateTime<Utc>>,

    /// Whether an access password is stored for the send
    pub password_set: bool,

    pub disabled: bool,

    pub hide_email: bool,
}

/// Human-readable byte count ("512 Bytes", "1.5 KB")
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        let rounded = (value * 100.0).round() / 100.0;
        format!("{} {}", rounded, UNITS[unit])
    }
}
