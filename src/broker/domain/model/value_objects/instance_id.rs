use crate::broker::domain::model::{
    enums::broker_domain_error::BrokerDomainError, value_objects::IDENTIFIER_REGEX,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(value: String) -> Result<Self, BrokerDomainError> {
        let trimmed = value.trim();

        if !IDENTIFIER_REGEX.is_match(trimmed) {
            return Err(BrokerDomainError::ValidationError(format!(
                "instance ID {trimmed:?} is invalid"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
