//! Encode command
//!
//! Base64-encodes whatever arrives on stdin, producing input for
//! `send edit`.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::SendResult;

/// Read `input` to the end and return it base64-encoded
pub fn encode_input<R: Read>(mut input: R) -> SendResult<String> {
    let mut buffer = Vec::new();
    input.read_to_end(&mut buffer)?;
    Ok(STANDARD.encode(buffer))
}
