use async_trait::async_trait;
use registry_resolve_domain::{DomainError, RegistryAddresses, RegistryFilter};

#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Query the registry directory for every entry matching `filter`.
    ///
    /// Transport, authentication and timeout failures surface as
    /// `RegistryTransport`/`RegistryTimeout`; a successful call that yields no
    /// usable internal address surfaces as `RegistryEmptyResult`.
    async fn describe_instances(
        &self,
        filter: &RegistryFilter,
    ) -> Result<RegistryAddresses, DomainError>;
}
