//! send-cli - edit end-to-end encrypted Sends from the terminal
//!
//! A Send is a shareable piece of encrypted text or a file with a deletion
//! date and optional expiration. This crate implements the edit workflow:
//! an encoded request is decoded, checked against the stored Send, merged,
//! re-encrypted and saved, and the saved state is returned.
//!
//! # Architecture
//!
//! - `config`: path resolution and settings
//! - `error`: infrastructure errors and the edit error taxonomy
//! - `models`: encrypted sends, decrypted views, requests and responses
//! - `crypto`: vault key derivation, AES-GCM sealing, the `SendCrypto` service
//! - `storage`: JSON file storage behind the `SendStore` trait
//! - `audit`: append-only log of persisted changes
//! - `services`: capability checks, field merge and `SendEditService`
//! - `cli`: command handlers and response rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use sendcli::services::{AccountCapabilities, SendEditService};
//!
//! let service = SendEditService::new(&storage, &crypto, &capabilities, base_url);
//! let confirmation = service.edit(Some(encoded), None, std::io::stdin().lock())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{EditError, SendError};
