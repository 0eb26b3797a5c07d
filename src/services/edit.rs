//! Send edit service
//!
//! Applies an encoded edit request to a stored send: decode, locate, check
//! the type and the account's entitlement, decrypt, merge, re-encrypt,
//! persist, then read the send back to build the confirmation.

use std::io::Read;

use crate::crypto::SendCrypto;
use crate::error::EditError;
use crate::models::{SendId, SendRequest, SendResponse};
use crate::storage::SendStore;

use super::capability::CapabilityProvider;
use super::merge::merge_send_view;

/// Service for editing existing sends
pub struct SendEditService<'a, S, C, P> {
    store: &'a S,
    crypto: &'a C,
    capabilities: &'a P,
    access_base_url: String,
}

impl<'a, S, C, P> SendEditService<'a, S, C, P>
where
    S: SendStore,
    C: SendCrypto,
    P: CapabilityProvider,
{
    pub fn new(
        store: &'a S,
        crypto: &'a C,
        capabilities: &'a P,
        access_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            crypto,
            capabilities,
            access_base_url: access_base_url.into(),
        }
    }

    /// Edit a send
    ///
    /// `encoded` is the base64 JSON request; when it is absent or blank the
    /// request is read from `input` until end of stream. `override_id`, when
    /// given, replaces the id embedded in the request.
    pub fn edit<R: Read>(
        &self,
        encoded: Option<&str>,
        override_id: Option<&str>,
        input: R,
    ) -> Result<SendResponse, EditError> {
        let raw = read_encoded_request(encoded, input)?;
        let request = SendRequest::from_encoded(&raw).map_err(|_| {
            EditError::InvalidInput("Error parsing the encoded request data.".to_string())
        })?;

        let id = resolve_id(&request, override_id)
            .ok_or_else(|| EditError::NotFound("No send id was provided.".to_string()))?;

        let stored = self
            .store
            .get(&id)?
            .ok_or_else(|| EditError::NotFound(format!("Send not found: {}", id)))?;

        if stored.send_type != request.send_type {
            return Err(EditError::InvalidInput(
                "Cannot change a Send's type".to_string(),
            ));
        }

        if stored.send_type.requires_premium() && !self.capabilities.has_premium()? {
            return Err(EditError::PermissionDenied(
                "Premium status is required to use this feature.".to_string(),
            ));
        }

        let current = self.crypto.decrypt(&stored)?;
        let merged = merge_send_view(current, &request);

        let (mut encrypted, file_data) =
            self.crypto.encrypt(&merged, None, request.password.as_deref())?;
        // Dates live on the envelope, outside the sealed payload
        encrypted.deletion_date = Some(merged.deletion_date);
        encrypted.expiration_date = merged.expiration_date;

        let saved = self.store.save(encrypted, file_data)?;

        let refreshed = self.store.get(&saved.id)?.ok_or_else(|| {
            EditError::Internal(format!("Send {} disappeared after saving", saved.id))
        })?;
        let view = self.crypto.decrypt(&refreshed)?;

        Ok(SendResponse::from_view(view, &self.access_base_url))
    }
}

/// The request text from the argument, falling back to the whole input stream
fn read_encoded_request<R: Read>(
    encoded: Option<&str>,
    mut input: R,
) -> Result<String, EditError> {
    if let Some(arg) = encoded.filter(|s| !s.trim().is_empty()) {
        return Ok(arg.to_string());
    }

    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .map_err(|e| EditError::Internal(format!("Failed to read request input: {}", e)))?;

    if buffer.trim().is_empty() {
        return Err(EditError::InvalidInput(
            "No encoded request data was provided.".to_string(),
        ));
    }
    Ok(buffer)
}

fn resolve_id(request: &SendRequest, override_id: Option<&str>) -> Option<SendId> {
    match override_id.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => Some(SendId::parse(id)),
        None => request.id.clone().filter(|id| !id.as_str().is_empty()),
    }
}
