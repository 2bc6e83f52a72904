use thiserror::Error;

/// A caller programming error detected while building a message or
/// notification. Surfaced synchronously from the constructor, never silently
/// defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("message content must not be empty")]
    EmptyContent,

    #[error("invalid email address: {address:?}")]
    InvalidEmailAddress { address: String },

    #[error("invalid phone number: {phone_number:?}")]
    InvalidPhoneNumber { phone_number: String },

    #[error("device token must not be empty")]
    EmptyDeviceToken,
}

/// An opaque failure reported by a transport collaborator. Recovered by the
/// dispatcher into a failed outcome, never propagated past the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConstructionError::InvalidEmailAddress {
            address: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "invalid email address: \"nope\"");

        let err = TransportError::new("smtp refused");
        assert_eq!(err.to_string(), "transport error: smtp refused");
        assert_eq!(err.reason(), "smtp refused");
    }
}
