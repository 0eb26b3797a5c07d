//! Field merge for send edits
//!
//! Applies the fields present in a request onto the current view. Identity,
//! type and server-maintained fields are never touched, and neither is the
//! attached file.

use crate::models::{SendRequest, SendTextView, SendType, SendView};

/// Merge the requested changes into `current`
pub fn merge_send_view(mut current: SendView, request: &SendRequest) -> SendView {
    if let Some(name) = &request.name {
        current.name = name.clone();
    }

    if let Some(notes) = &request.notes {
        current.notes = if notes.is_empty() {
            None
        } else {
            Some(notes.clone())
        };
    }

    if current.send_type == SendType::Text {
        if let Some(text_request) = &request.text {
            let text = current.text.get_or_insert(SendTextView {
                text: None,
                hidden: false,
            });
            if let Some(value) = &text_request.text {
                text.text = Some(value.clone());
            }
            if let Some(hidden) = text_request.hidden {
                text.hidden = hidden;
            }
        }
    }

    if let Some(max_access_count) = request.max_access_count {
        current.max_access_count = Some(max_access_count);
    }
    if let Some(deletion_date) = request.deletion_date {
        current.deletion_date = deletion_date;
    }
    if let Some(expiration_date) = request.expiration_date {
        current.expiration_date = Some(expiration_date);
    }
    if let Some(disabled) = request.disabled {
        current.disabled = disabled;
    }
    if let Some(hide_email) = request.hide_email {
        current.hide_email = hide_email;
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileId, SendFileRequest, SendFileView, SendId, SendTextRequest};
    use chrono::{Duration, TimeZone, Utc};

    fn text_view() -> SendView {
        let created = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        SendView {
            id: SendId::parse("s1"),
            access_id: "acc".into(),
            name: "Wifi".into(),
            notes: Some("guest network".into()),
            send_type: SendType::Text,
            text: Some(SendTextView {
                text: Some("hunter2".into()),
                hidden: true,
            }),
            file: None,
            max_access_count: Some(5),
            access_count: 2,
            revision_date: created,
            deletion_date: created + Duration::days(7),
            expiration_date: None,
            password_set: true,
            disabled: false,
            hide_email: false,
        }
    }

    fn empty_request(send_type: SendType) -> SendRequest {
        SendRequest::from_json(&format!(r#"{{"type":{}}}"#, u8::from(send_type))).unwrap()
    }

    #[test]
    fn test_empty_request_changes_nothing() {
        let current = text_view();
        let merged = merge_send_view(current.clone(), &empty_request(SendType::Text));
        assert_eq!(merged, current);
    }

    #[test]
    fn test_only_present_fields_are_applied() {
        let mut request = empty_request(SendType::Text);
        request.name = Some("Office wifi".into());
        request.disabled = Some(true);

        let merged = merge_send_view(text_view(), &request);

        assert_eq!(merged.name, "Office wifi");
        assert!(merged.disabled);
        assert_eq!(merged.notes.as_deref(), Some("guest network"));
        assert_eq!(merged.max_access_count, Some(5));
        assert!(!merged.hide_email);
    }

    #[test]
    fn test_empty_notes_clear() {
        let mut request = empty_request(SendType::Text);
        request.notes = Some(String::new());

        let merged = merge_send_view(text_view(), &request);
        assert_eq!(merged.notes, None);
    }

    #[test]
    fn test_text_fields_merge_independently() {
        let mut request = empty_request(SendType::Text);
        request.text = Some(SendTextRequest {
            text: None,
            hidden: Some(false),
        });

        let merged = merge_send_view(text_view(), &request);
        let text = merged.text.unwrap();
        assert_eq!(text.text.as_deref(), Some("hunter2"));
        assert!(!text.hidden);
    }

    #[test]
    fn test_read_only_fields_are_preserved() {
        let current = text_view();
        let request = SendRequest::from_json(
            r#"{"id":"other","type":0,"accessId":"forged","accessCount":99,
                "passwordSet":false,"revisionDate":"2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let merged = merge_send_view(current.clone(), &request);
        assert_eq!(merged, current);
    }

    #[test]
    fn test_dates_overwrite() {
        let mut request = empty_request(SendType::Text);
        let deletion = Utc.with_ymd_and_hms(2031, 6, 1, 0, 0, 0).unwrap();
        let expiration = Utc.with_ymd_and_hms(2031, 5, 1, 0, 0, 0).unwrap();
        request.deletion_date = Some(deletion);
        request.expiration_date = Some(expiration);

        let merged = merge_send_view(text_view(), &request);
        assert_eq!(merged.deletion_date, deletion);
        assert_eq!(merged.expiration_date, Some(expiration));
    }

    #[test]
    fn test_file_send_ignores_text_and_file_changes() {
        let mut current = text_view();
        current.send_type = SendType::File;
        current.text = None;
        current.file = Some(SendFileView::new(Some(FileId::parse("f1")), "a.pdf", 2048));

        let mut request = empty_request(SendType::File);
        request.text = Some(SendTextRequest {
            text: Some("sneaky".into()),
            hidden: None,
        });
        request.file = Some(SendFileRequest {
            file_name: Some("b.pdf".into()),
            size: Some(1),
            ..Default::default()
        });

        let merged = merge_send_view(current.clone(), &request);
        assert_eq!(merged.text, None);
        assert_eq!(merged.file, current.file);
    }
}
