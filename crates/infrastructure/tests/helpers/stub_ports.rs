#![allow(dead_code)]
use async_trait::async_trait;
use registry_resolve_application::ports::FallbackResolver;
use registry_resolve_domain::DomainError;
use std::net::Ipv4Addr;

/// Fallback resolver with a fixed answer, or none at all.
pub struct FixedFallbackResolver {
    address: Option<Ipv4Addr>,
}

impl FixedFallbackResolver {
    pub fn answering(address: Ipv4Addr) -> Self {
        Self {
            address: Some(address),
        }
    }

    pub fn failing() -> Self {
        Self { address: None }
    }
}

#[async_trait]
impl FallbackResolver for FixedFallbackResolver {
    async fn resolve_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError> {
        self.address.ok_or_else(|| DomainError::FallbackResolution {
            name: name.to_string(),
            reason: "no such host".to_string(),
        })
    }
}
