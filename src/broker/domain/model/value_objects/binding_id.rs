use crate::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError, value_objects::IDENTIFIER_REGEX,
};

/// Caller-assigned binding identifier. It is also the Atlas database username,
/// which is how unbind finds the user again.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BindingId(String);

impl BindingId {
    pub fn new(value: String) -> Result<Self, BrokerDomainError> {
        let trimmed = value.trim();

        if !IDENTIFIER_REGEX.is_match(trimmed) {
            return Err(BrokerDomainError::ValidationError(format!(
                "binding ID {trimmed:?} is invalid"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
