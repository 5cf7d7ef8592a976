use registry_resolve_application::use_cases::{HandlerChain, ResolveRegistryAddressUseCase};
use registry_resolve_domain::Config;
use registry_resolve_infrastructure::dns::DnsServerHandler;
use registry_resolve_infrastructure::metrics::RequestCountMetrics;
use registry_resolve_infrastructure::registry::TcrRegistryClient;
use registry_resolve_infrastructure::system::SystemFallbackResolver;
use std::sync::Arc;
use tracing::info;

/// Everything the DNS front end needs, wired from configuration.
pub struct DnsServices {
    pub handler: DnsServerHandler,
    pub metrics: Arc<RequestCountMetrics>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(TcrRegistryClient::new(&config.registry)?);
        let fallback = Arc::new(SystemFallbackResolver::new(config.registry.query_timeout));
        let metrics = RequestCountMetrics::global();

        let use_case = Arc::new(ResolveRegistryAddressUseCase::new(
            registry,
            fallback,
            metrics.clone(),
            config.registry.ttl_or_zero(),
        ));

        let chain = HandlerChain::new().with_handler(use_case);
        let identity = config.server.identity();

        info!(
            server = %identity,
            handlers = chain.len(),
            "DNS handler chain built"
        );

        Ok(Self {
            handler: DnsServerHandler::new(Arc::new(chain), identity),
            metrics,
        })
    }
}
