use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed query name: {0}")]
    MalformedQueryName(String),

    #[error("Registry request failed: {0}")]
    RegistryTransport(String),

    #[error("Registry request to {endpoint} timed out")]
    RegistryTimeout { endpoint: String },

    #[error("Registry returned no internal address for {0}")]
    RegistryEmptyResult(String),

    #[error("Fallback resolution failed for {name}: {reason}")]
    FallbackResolution { name: String, reason: String },

    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsResponse(String),

    #[error("Response sink rejected answer: {0}")]
    ResponseWrite(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors the resolution step absorbs by switching to ordinary name resolution.
    pub fn is_recoverable_by_fallback(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedQueryName(_)
                | DomainError::RegistryTransport(_)
                | DomainError::RegistryTimeout { .. }
                | DomainError::RegistryEmptyResult(_)
                | DomainError::InvalidAddressFormat(_)
        )
    }
}
