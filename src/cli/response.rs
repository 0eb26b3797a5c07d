//! Command output
//!
//! Every command result is wrapped in a response object and rendered as JSON
//! or YAML.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{EditError, SendError, SendResult};

/// Output encoding for command responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Envelope printed for every command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Error category, set on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failure(err: &EditError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.kind().to_string()),
            message: Some(err.message().to_string()),
        }
    }

    pub fn from_result(result: Result<serde_json::Value, EditError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat, pretty: bool) -> SendResult<String> {
        match format {
            OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Yaml => serde_yaml::to_string(self)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| SendError::Json(format!("Failed to render YAML: {}", e))),
        }
    }
}
