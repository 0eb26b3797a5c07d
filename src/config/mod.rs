//! Configuration module for send-cli
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SendPaths;
pub use settings::Settings;
