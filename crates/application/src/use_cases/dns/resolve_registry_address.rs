use crate::ports::{
    FallbackResolver, HandlerStatus, QueryHandler, RegistryLookup, RequestCounter, ResponseSink,
};
use async_trait::async_trait;
use registry_resolve_domain::{
    AnswerRecord, DnsRequest, DomainError, LookupIdentifier, RegistryFilter,
};
use std::sync::Arc;
use tracing::{debug, warn};

pub const HANDLER_NAME: &str = "registry_resolve";

/// Resolves a queried name to an internal registry address, falling back to
/// ordinary name resolution when the registry has nothing usable.
///
/// Registry failures of every kind (malformed name, transport, empty result,
/// unparsable address) are absorbed here. Only a failed fallback is reported
/// to the chain, as `NotHandled`.
pub struct ResolveRegistryAddressUseCase {
    registry: Arc<dyn RegistryLookup>,
    fallback: Arc<dyn FallbackResolver>,
    counter: Arc<dyn RequestCounter>,
    ttl: u32,
}

impl ResolveRegistryAddressUseCase {
    pub fn new(
        registry: Arc<dyn RegistryLookup>,
        fallback: Arc<dyn FallbackResolver>,
        counter: Arc<dyn RequestCounter>,
        ttl: u32,
    ) -> Self {
        Self {
            registry,
            fallback,
            counter,
            ttl,
        }
    }

    pub async fn execute(
        &self,
        request: &DnsRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<HandlerStatus, DomainError> {
        if !request.record_type.is_address() {
            debug!(
                domain = %request.domain,
                record_type = %request.record_type,
                "Record type not served by registry lookup, passing on"
            );
            return Ok(HandlerStatus::NotHandled);
        }

        let answer = match self.answer_from_registry(request).await {
            Ok(answer) => answer,
            Err(e) => {
                if matches!(e, DomainError::MalformedQueryName(_)) {
                    debug!(domain = %request.domain, "No registry identifier in query name");
                } else {
                    warn!(domain = %request.domain, error = %e, "Registry lookup failed, using fallback resolution");
                }

                match self.answer_from_fallback(request).await {
                    Ok(answer) => answer,
                    Err(e) => {
                        warn!(domain = %request.domain, error = %e, "Fallback resolution failed, passing on");
                        return Ok(HandlerStatus::NotHandled);
                    }
                }
            }
        };

        debug!(
            domain = %request.domain,
            address = %answer.address,
            ttl = answer.ttl,
            "Answering with address record"
        );

        sink.write_answer(answer)?;
        self.counter.increment(&request.server);

        Ok(HandlerStatus::Handled)
    }

    async fn answer_from_registry(
        &self,
        request: &DnsRequest,
    ) -> Result<AnswerRecord, DomainError> {
        let identifier = LookupIdentifier::extract(&request.domain)?;
        let filter = RegistryFilter::single(&identifier);

        let addresses = self.registry.describe_instances(&filter).await?;

        if addresses.as_slice().len() > 1 {
            debug!(
                identifier = %identifier,
                chosen = %addresses.first(),
                all = %addresses.joined(),
                "Registry returned several internal addresses, using the first"
            );
        }

        AnswerRecord::parse_a(request.domain.clone(), self.ttl, addresses.first())
    }

    async fn answer_from_fallback(
        &self,
        request: &DnsRequest,
    ) -> Result<AnswerRecord, DomainError> {
        let address = self.fallback.resolve_ipv4(&request.domain).await?;
        Ok(AnswerRecord::new_a(request.domain.clone(), self.ttl, address))
    }
}

#[async_trait]
impl QueryHandler for ResolveRegistryAddressUseCase {
    fn name(&self) -> &'static str {
        HANDLER_NAME
    }

    async fn handle(
        &self,
        request: &DnsRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<HandlerStatus, DomainError> {
        self.execute(request, sink).await
    }
}
