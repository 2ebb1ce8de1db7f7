use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE};
use rand::{RngCore, rngs::OsRng};

use crate::broker::domain::model::enums::broker_domain_error::BrokerDomainError;

const PASSWORD_ENTROPY_BYTES: usize = 32;

/// Freshly minted database password for a binding. Never persisted.
#[derive(Clone, Eq, PartialEq)]
pub struct BindingPassword(String);

impl BindingPassword {
    /// 32 bytes from the OS CSPRNG, URL-safe base64 encoded.
    pub fn generate() -> Result<Self, BrokerDomainError> {
        let mut bytes = [0u8; PASSWORD_ENTROPY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(BrokerDomainError::SecretGenerationFailed)?;

        Ok(Self(URL_SAFE.encode(bytes)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BindingPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BindingPassword(<redacted>)")
    }
}
