//! Storage layer for send-cli
//!
//! `SendStore` is the contract the edit workflow depends on. `Storage`
//! implements it over JSON files with atomic writes, and records each
//! persisted change in the audit log.

pub mod file_io;
pub mod sends;

pub use file_io::{read_json, write_json_atomic};
pub use sends::SendRepository;

use std::fs;

use chrono::{DateTime, SubsecRound, Utc};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SendPaths;
use crate::error::{SendError, SendResult};
use crate::models::{EncryptedFileData, EncryptedSend, SendId};

/// Fetches and persists encrypted sends
pub trait SendStore {
    /// Look up a send by its (lower-cased) identifier
    fn get(&self, id: &SendId) -> SendResult<Option<EncryptedSend>>;

    /// Persist a send and optional sealed file bytes, returning the stored form
    fn save(
        &self,
        send: EncryptedSend,
        file_data: Option<EncryptedFileData>,
    ) -> SendResult<EncryptedSend>;
}

/// Dates are stored with millisecond precision
pub fn normalize_date(date: DateTime<Utc>) -> DateTime<Utc> {
    date.trunc_subsecs(3)
}

/// Main storage coordinator
pub struct Storage {
    paths: SendPaths,
    pub sends: SendRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SendPaths) -> Result<Self, SendError> {
        paths.ensure_directories()?;

        Ok(Self {
            sends: SendRepository::new(paths.sends_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SendPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SendError> {
        self.sends.load()
    }

    /// Record an audit entry for a newly created entity
    pub fn log_create<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> SendResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    /// Record an audit entry for an updated entity
    pub fn log_update<T: serde::Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) -> SendResult<()> {
        self.audit
            .log(&AuditEntry::update(entity_type, entity_id, before, after))
    }
}

impl SendStore for Storage {
    fn get(&self, id: &SendId) -> SendResult<Option<EncryptedSend>> {
        self.sends.get(id)
    }

    fn save(
        &self,
        mut send: EncryptedSend,
        file_data: Option<EncryptedFileData>,
    ) -> SendResult<EncryptedSend> {
        let deletion_date = send.deletion_date.ok_or_else(|| {
            SendError::Storage(format!("Send {} has no deletion date", send.id))
        })?;

        if let Some(file) = &file_data {
            if file.send_id != send.id {
                return Err(SendError::Validation(format!(
                    "File data belongs to send {}, not {}",
                    file.send_id, send.id
                )));
            }
        }

        let previous = self.sends.get(&send.id)?;

        send.deletion_date = Some(normalize_date(deletion_date));
        send.expiration_date = send.expiration_date.map(normalize_date);
        send.revision_date = normalize_date(Utc::now());

        if let Some(prev) = &previous {
            // Access counting and the stored password belong to storage
            send.access_count = prev.access_count;
            if send.password.is_none() {
                send.password = prev.password.clone();
            }
        }

        let metadata_path = self.paths.file_metadata_file(&send.id);
        let previous_metadata: Option<EncryptedFileData> = match &file_data {
            Some(file) => {
                let existing = read_json(&metadata_path)?;
                write_json_atomic(&metadata_path, file)?;
                existing
            }
            None => None,
        };

        self.sends.upsert(send.clone())?;
        if let Err(e) = self.sends.save() {
            // Keep memory and file metadata in line with sends.json
            match &previous {
                Some(prev) => {
                    self.sends.upsert(prev.clone())?;
                }
                None => {
                    self.sends.remove(&send.id)?;
                }
            }
            if file_data.is_some() {
                match &previous_metadata {
                    Some(meta) => write_json_atomic(&metadata_path, meta)?,
                    None => fs::remove_file(&metadata_path).map_err(|e| {
                        SendError::Io(format!(
                            "Failed to remove {}: {}",
                            metadata_path.display(),
                            e
                        ))
                    })?,
                }
            }
            return Err(e);
        }

        // Committed from here on; audit failures only warn
        let logged = match &previous {
            Some(prev) => self.log_update(EntityType::Send, send.id.as_str(), prev, &send),
            None => self.log_create(EntityType::Send, send.id.as_str(), &send),
        };
        if let Err(e) = logged {
            eprintln!("Warning: send {} saved but not audited: {}", send.id, e);
        }

        Ok(send)
    }
}
