use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// One incoming question as seen by the handler chain.
///
/// `domain` is kept exactly as received (trailing dot included) so answers
/// echo the queried name unchanged. `server` identifies the listener that
/// accepted the query and labels the request counter.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
    pub server: Arc<str>,
}

impl DnsRequest {
    pub fn new(
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        client_ip: IpAddr,
        server: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            client_ip,
            server: server.into(),
        }
    }
}
