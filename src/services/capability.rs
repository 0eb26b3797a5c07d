//! Account capability service
//!
//! Answers whether the current account holds the premium entitlement that
//! file sends require.

use crate::config::Settings;
use crate::error::SendResult;

/// Reports account entitlements
pub trait CapabilityProvider {
    fn has_premium(&self) -> SendResult<bool>;
}

/// Capabilities read from the account section of the settings file
pub struct AccountCapabilities<'a> {
    settings: &'a Settings,
}

impl<'a> AccountCapabilities<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl CapabilityProvider for AccountCapabilities<'_> {
    fn has_premium(&self) -> SendResult<bool> {
        Ok(self.settings.account.premium)
    }
}
