//! Send repository for JSON storage
//!
//! Manages loading and saving encrypted sends to sends.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SendError;
use crate::models::{EncryptedSend, SendId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable send data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SendData {
    sends: Vec<EncryptedSend>,
}

/// Repository for encrypted send persistence
pub struct SendRepository {
    path: PathBuf,
    data: RwLock<HashMap<SendId, EncryptedSend>>,
}

impl SendRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load sends from disk
    pub fn load(&self) -> Result<(), SendError> {
        let file_data: SendData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for send in file_data.sends {
            data.insert(send.id.clone(), send);
        }

        Ok(())
    }

    /// Save sends to disk
    pub fn save(&self) -> Result<(), SendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut sends: Vec<_> = data.values().cloned().collect();
        sends.sort_by(|a, b| a.id.cmp(&b.id));

        write_json_atomic(&self.path, &SendData { sends })
    }

    /// Get a send by ID
    pub fn get(&self, id: &SendId) -> Result<Option<EncryptedSend>, SendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(id).cloned())
    }

    /// Insert or update a send, returning the previous version
    pub fn upsert(&self, send: EncryptedSend) -> Result<Option<EncryptedSend>, SendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.insert(send.id.clone(), send))
    }

    /// Remove a send from memory, returning it if present
    pub fn remove(&self, id: &SendId) -> Result<Option<EncryptedSend>, SendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(id))
    }

    pub fn count(&self) -> Result<usize, SendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
