use async_trait::async_trait;
use registry_resolve_application::ports::FallbackResolver;
use registry_resolve_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;

/// Ordinary host-level name resolution (resolv.conf, hosts file, NSS),
/// bounded by a timeout.
pub struct SystemFallbackResolver {
    timeout: Duration,
}

impl SystemFallbackResolver {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn failure(name: &str, reason: impl Into<String>) -> DomainError {
        DomainError::FallbackResolution {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl FallbackResolver for SystemFallbackResolver {
    async fn resolve_ipv4(&self, name: &str) -> Result<Ipv4Addr, DomainError> {
        let host = name.trim_end_matches('.');
        if host.is_empty() {
            return Err(Self::failure(name, "empty name"));
        }

        debug!(name = %host, "Performing fallback resolution");

        let addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, 0)))
            .await
            .map_err(|_| Self::failure(name, "timed out"))?
            .map_err(|e| Self::failure(name, e.to_string()))?;

        let address = addrs
            .map(|addr| addr.ip())
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| Self::failure(name, "no IPv4 address"))?;

        debug!(name = %host, address = %address, "Fallback resolution succeeded");
        Ok(address)
    }
}
