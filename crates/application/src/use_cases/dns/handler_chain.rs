use crate::ports::{HandlerStatus, QueryHandler, ResponseSink};
use registry_resolve_domain::{DnsRequest, DomainError};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    Handled { by: &'static str },
    /// Every handler passed the query on.
    NoHandler,
    Failed(DomainError),
}

/// Ordered list of handlers; the first one to answer wins.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn QueryHandler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(mut self, handler: Arc<dyn QueryHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub async fn dispatch(
        &self,
        request: &DnsRequest,
        sink: &mut dyn ResponseSink,
    ) -> ChainOutcome {
        for handler in &self.handlers {
            match handler.handle(request, sink).await {
                Ok(HandlerStatus::Handled) => {
                    return ChainOutcome::Handled { by: handler.name() };
                }
                Ok(HandlerStatus::NotHandled) => {
                    debug!(handler = handler.name(), domain = %request.domain, "Handler passed query on");
                }
                Err(e) => {
                    error!(handler = handler.name(), domain = %request.domain, error = %e, "Handler failed");
                    return ChainOutcome::Failed(e);
                }
            }
        }

        debug!(domain = %request.domain, "No handler answered the query");
        ChainOutcome::NoHandler
    }
}
