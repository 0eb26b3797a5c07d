//! Send response model
//!
//! The confirmation object returned to callers after a read or an edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::SendId;
use super::send::{SendFileView, SendTextView, SendType, SendView};

/// Public view of a send, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    /// Always "send"
    pub object: String,

    pub id: SendId,

    pub access_id: String,

    pub access_url: String,

    pub name: String,

    pub notes: Option<String>,

    #[serde(rename = "type")]
    pub send_type: SendType,

    pub text: Option<SendTextView>,

    pub file: Option<SendFileView>,

    pub max_access_count: Option<u32>,

    pub access_count: u32,

    pub revision_date: DateTime<Utc>,

    pub deletion_date: DateTime<Utc>,

    pub expiration_date: Option<DateTime<Utc>>,

    pub password_set: bool,

    pub disabled: bool,

    pub hide_email: bool,
}

impl SendResponse {
    /// Build a response from a decrypted view
    pub fn from_view(view: SendView, access_base_url: &str) -> Self {
        let access_url = format!(
            "{}/#/send/{}",
            access_base_url.trim_end_matches('/'),
            view.access_id
        );

        Self {
            object: "send".to_string(),
            id: view.id,
            access_id: view.access_id,
            access_url,
            name: view.name,
            notes: view.notes,
            send_type: view.send_type,
            text: view.text,
            file: view.file,
            max_access_count: view.max_access_count,
            access_count: view.access_count,
            revision_date: view.revision_date,
            deletion_date: view.deletion_date,
            expiration_date: view.expiration_date,
            password_set: view.password_set,
            disabled: view.disabled,
            hide_email: view.hide_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SendRequest;

    fn sample_view() -> SendView {
        let now = Utc::now();
        SendView {
            id: SendId::parse("abc"),
            access_id: "acc3ss".into(),
            name: "Wifi".into(),
            notes: None,
            send_type: SendType::Text,
            text: Some(SendTextView {
                text: Some("hunter2".into()),
                hidden: true,
            }),
            file: None,
            max_access_count: Some(5),
            access_count: 1,
            revision_date: now,
            deletion_date: now,
            expiration_date: None,
            password_set: false,
            disabled: false,
            hide_email: false,
        }
    }

    #[test]
    fn test_access_url() {
        let response = SendResponse::from_view(sample_view(), "https://send.example.com/");
        assert_eq!(response.access_url, "https://send.example.com/#/send/acc3ss");
        assert_eq!(response.object, "send");
    }

    #[test]
    fn test_response_json_shape() {
        let response = SendResponse::from_view(sample_view(), "http://localhost:8080");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["type"], 0);
        assert_eq!(json["accessId"], "acc3ss");
        assert_eq!(json["maxAccessCount"], 5);
        assert_eq!(json["text"]["hidden"], true);
    }

    #[test]
    fn test_response_is_accepted_as_request() {
        let response = SendResponse::from_view(sample_view(), "http://localhost:8080");
        let json = serde_json::to_string(&response).unwrap();

        let request = SendRequest::from_json(&json).unwrap();
        assert_eq!(request.id, Some(SendId::parse("abc")));
        assert_eq!(request.name.as_deref(), Some("Wifi"));
        assert_eq!(request.max_access_count, Some(5));
    }
}
