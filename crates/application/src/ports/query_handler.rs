use async_trait::async_trait;
use registry_resolve_domain::{AnswerRecord, DnsRequest, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerStatus {
    /// An answer was written to the sink; the chain stops here.
    Handled,
    /// Nothing was written; the chain moves on to the next handler.
    NotHandled,
}

pub trait ResponseSink: Send {
    fn write_answer(&mut self, record: AnswerRecord) -> Result<(), DomainError>;
}

/// One step in the query processing chain.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle(
        &self,
        request: &DnsRequest,
        sink: &mut dyn ResponseSink,
    ) -> Result<HandlerStatus, DomainError>;
}
