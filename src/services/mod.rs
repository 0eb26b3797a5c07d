//! Service layer for send-cli
//!
//! Business logic on top of the storage and cryptography layers. The edit
//! workflow depends only on the `SendStore`, `SendCrypto` and
//! `CapabilityProvider` traits.

pub mod capability;
pub mod edit;
pub mod merge;

pub use capability::{AccountCapabilities, CapabilityProvider};
pub use edit::SendEditService;
pub use merge::merge_send_view;
