//! Cryptographic functions for send-cli
//!
//! AES-256-GCM sealing under an Argon2id-derived vault key, Argon2 hashing of
//! send access passwords, and the send cryptography service built on both.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;
pub mod send_crypto;

pub use encryption::{decrypt, decrypt_string, encrypt, encrypt_string, EncryptedData};
pub use key_derivation::{derive_key, hash_password, DerivedKey, KeyDerivationParams};
pub use secure_memory::{SecureBytes, SecureString};
pub use send_crypto::{LazyVaultCrypto, SendCrypto, VaultSendCrypto};
