use super::{DomainError, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    IN,
}

/// Address record synthesised for a resolved query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl AnswerRecord {
    pub fn new_a(name: impl Into<Arc<str>>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl,
            address,
        }
    }

    /// Builds an A record from a textual address.
    ///
    /// Anything that is not a single dotted-quad IPv4 address (a hostname,
    /// an IPv6 literal, a comma-joined list) is rejected with
    /// `InvalidAddressFormat`.
    pub fn parse_a(
        name: impl Into<Arc<str>>,
        ttl: u32,
        address: &str,
    ) -> Result<Self, DomainError> {
        let parsed: Ipv4Addr = address
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidAddressFormat(address.to_string()))?;
        Ok(Self::new_a(name, ttl, parsed))
    }
}
