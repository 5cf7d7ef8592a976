use super::response_builder::ResponseBuilder;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use registry_resolve_application::ports::ResponseSink;
use registry_resolve_application::use_cases::{ChainOutcome, HandlerChain};
use registry_resolve_domain::{AnswerRecord, DnsRequest, DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Collects answers written by handlers until the reply is encoded.
#[derive(Debug, Default)]
pub struct AnswerCollector {
    answers: Vec<AnswerRecord>,
}

impl AnswerCollector {
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }
}

impl ResponseSink for AnswerCollector {
    fn write_answer(&mut self, record: AnswerRecord) -> Result<(), DomainError> {
        self.answers.push(record);
        Ok(())
    }
}

/// Bridges wire-format queries to the handler chain.
pub struct DnsServerHandler {
    chain: Arc<HandlerChain>,
    server_identity: Arc<str>,
}

impl DnsServerHandler {
    pub fn new(chain: Arc<HandlerChain>, server_identity: impl Into<Arc<str>>) -> Self {
        Self {
            chain,
            server_identity: server_identity.into(),
        }
    }

    pub fn server_identity(&self) -> &str {
        &self.server_identity
    }

    /// Decode, dispatch and encode one query. `None` means nothing should be
    /// sent back (undecodable input, or a message that is not a query).
    pub async fn handle_raw(&self, query_buf: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let message = match Message::from_vec(query_buf) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client_ip, error = %e, "Dropping undecodable DNS message");
                return None;
            }
        };

        if message.message_type() != MessageType::Query {
            return None;
        }

        let reply = self.handle_message(&message, client_ip).await;
        match reply {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to encode DNS response");
                ResponseBuilder::error(&message, ResponseCode::ServFail).ok()
            }
        }
    }

    async fn handle_message(
        &self,
        message: &Message,
        client_ip: IpAddr,
    ) -> Result<Vec<u8>, DomainError> {
        if message.op_code() != OpCode::Query {
            debug!(op_code = ?message.op_code(), "Unsupported opcode");
            return ResponseBuilder::error(message, ResponseCode::NotImp);
        }

        let Some(query) = message.queries().first() else {
            warn!(client = %client_ip, "Query without question section");
            return ResponseBuilder::error(message, ResponseCode::FormErr);
        };

        let domain = query.name().to_utf8();
        let hickory_type = query.query_type();

        info!(domain = %domain, record_type = ?hickory_type, client = %client_ip, "DNS query received");

        let Some(record_type) = RecordType::from_u16(u16::from(hickory_type)) else {
            warn!(record_type = ?hickory_type, "Unsupported record type");
            return ResponseBuilder::error(message, ResponseCode::NotImp);
        };

        let request = DnsRequest::new(
            domain.as_str(),
            record_type,
            client_ip,
            Arc::clone(&self.server_identity),
        );
        let mut collector = AnswerCollector::default();

        match self.chain.dispatch(&request, &mut collector).await {
            ChainOutcome::Handled { by } => {
                debug!(domain = %domain, handler = by, answers = collector.answers().len(), "Sending response");
                ResponseBuilder::answer(message, collector.answers())
            }
            ChainOutcome::NoHandler => {
                debug!(domain = %domain, "No handler resolved query, answering SERVFAIL");
                ResponseBuilder::error(message, ResponseCode::ServFail)
            }
            ChainOutcome::Failed(e) => {
                error!(domain = %domain, error = %e, "Query resolution failed");
                ResponseBuilder::error(message, ResponseCode::ServFail)
            }
        }
    }
}
