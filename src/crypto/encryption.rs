//! AES-256-GCM encryption/decryption
//!
//! Seals send payloads and file bytes under the vault key. Each encryption
//! generates a fresh nonce.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::secure_memory::SecureBytes;
use super::DerivedKey;
use crate::error::{SendError, SendResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Current sealing format
const FORMAT_VERSION: u8 = 1;

/// Encrypted data with associated metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedData {
    /// The nonce used for this encryption (base64 encoded)
    pub nonce: String,
    /// The encrypted ciphertext with authentication tag (base64 encoded)
    pub ciphertext: String,
    #[serde(default = "default_version")]
    pub version: u8,
}

fn default_version() -> u8 {
    FORMAT_VERSION
}

impl EncryptedData {
    fn new(nonce: &[u8], ciphertext: &[u8]) -> Self {
        Self {
            nonce: STANDARD.encode(nonce),
            ciphertext: STANDARD.encode(ciphertext),
            version: FORMAT_VERSION,
        }
    }

    fn decode_field(value: &str, field: &str) -> SendResult<Vec<u8>> {
        STANDARD
            .decode(value)
            .map_err(|e| SendError::Encryption(format!("Invalid {} encoding: {}", field, e)))
    }
}

fn cipher_for(key: &DerivedKey) -> SendResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SendError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext data using AES-256-GCM
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> SendResult<EncryptedData> {
    let cipher = cipher_for(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| SendError::Encryption(format!("Encryption failed: {}", e)))?;

    Ok(EncryptedData::new(&nonce_bytes, &ciphertext))
}

/// Decrypt ciphertext using AES-256-GCM
pub fn decrypt(encrypted: &EncryptedData, key: &DerivedKey) -> SendResult<SecureBytes> {
    if encrypted.version != FORMAT_VERSION {
        return Err(SendError::Encryption(format!(
            "Unsupported encryption version: {}",
            encrypted.version
        )));
    }

    let nonce_bytes = EncryptedData::decode_field(&encrypted.nonce, "nonce")?;
    if nonce_bytes.len() != NONCE_SIZE {
        return Err(SendError::Encryption(format!(
            "Invalid nonce size: expected {}, got {}",
            NONCE_SIZE,
            nonce_bytes.len()
        )));
    }
    let ciphertext = EncryptedData::decode_field(&encrypted.ciphertext, "ciphertext")?;

    let plaintext = cipher_for(key)?
        .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
        .map_err(|_| {
            SendError::Encryption("Decryption failed: invalid key or corrupted data".to_string())
        })?;

    Ok(SecureBytes::new(plaintext))
}

/// Encrypt a string
pub fn encrypt_string(plaintext: &str, key: &DerivedKey) -> SendResult<EncryptedData> {
    encrypt(plaintext.as_bytes(), key)
}

/// Decrypt to a string
pub fn decrypt_string(encrypted: &EncryptedData, key: &DerivedKey) -> SendResult<String> {
    let plaintext = decrypt(encrypted, key)?;
    String::from_utf8(plaintext.to_vec())
        .map_err(|e| SendError::Encryption(format!("Invalid UTF-8 in decrypted data: {}", e)))
}

/// Serialize a value to JSON and seal it
pub fn seal_json<T: Serialize>(value: &T, key: &DerivedKey) -> SendResult<EncryptedData> {
    let json = SecureBytes::new(serde_json::to_vec(value)?);
    encrypt(&json, key)
}

/// Open sealed JSON and deserialize it
pub fn open_json<T: DeserializeOwned>(
    encrypted: &EncryptedData,
    key: &DerivedKey,
) -> SendResult<T> {
    let plaintext = decrypt(encrypted, key)?;
    serde_json::from_slice(&plaintext)
        .map_err(|e| SendError::Encryption(format!("Decrypted payload is malformed: {}", e)))
}
