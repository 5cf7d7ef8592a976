use async_trait::async_trait;
use registry_resolve_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait FallbackResolver: Send + Sync {
    async fn resolve_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError>;
}
