//! Core data models for send-cli
//!
//! Sends in their three shapes: the encrypted form owned by storage, the
//! decrypted view used for editing, and the request/response objects that
//! cross the command-line boundary.

pub mod encrypted;
pub mod ids;
pub mod request;
pub mod response;
pub mod send;

pub use encrypted::{EncryptedFileData, EncryptedSend, SendFileMetadata};
pub use ids::{FileId, SendId};
pub use request::{SendFileRequest, SendRequest, SendTextRequest};
pub use response::SendResponse;
pub use send::{SendFileView, SendTextView, SendType, SendView};
