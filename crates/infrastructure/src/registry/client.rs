use super::model::{ApiEnvelope, DescribeInstanceAllRequest};
use super::signer::{Tc3Signer, CONTENT_TYPE};
use async_trait::async_trait;
use registry_resolve_application::ports::RegistryLookup;
use registry_resolve_domain::{
    DomainError, RegistryAddresses, RegistryConfig, RegistryFilter, RegistryRecord,
};
use std::time::Duration;
use tracing::{debug, error};

const SERVICE: &str = "tcr";
const API_VERSION: &str = "2019-09-24";
const ACTION: &str = "DescribeInstanceAll";

/// Looks up registry instances by name through the signed cloud API.
///
/// One POST per lookup, no retries, no caching. The whole exchange (connect,
/// send, read body) is bounded by the configured query timeout.
pub struct TcrRegistryClient {
    http: reqwest::Client,
    url: String,
    host: String,
    region: String,
    signer: Tc3Signer,
    timeout: Duration,
}

impl TcrRegistryClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, DomainError> {
        let timeout = Duration::from_secs(config.query_timeout);
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let (url, host) = Self::split_endpoint(&config.endpoint)?;

        Ok(Self {
            http,
            url,
            host,
            region: config.region.clone(),
            signer: Tc3Signer::new(&config.secret_id, &config.secret_key, SERVICE),
            timeout,
        })
    }

    /// `tcr.tencentcloudapi.com` → (`https://tcr.tencentcloudapi.com/`, host).
    /// An endpoint with an explicit scheme is kept as given.
    fn split_endpoint(endpoint: &str) -> Result<(String, String), DomainError> {
        let endpoint = endpoint.trim().trim_end_matches('/');
        let (scheme, authority) = match endpoint.split_once("://") {
            Some((scheme, rest)) => (scheme, rest),
            None => ("https", endpoint),
        };

        let host = authority.split('/').next().unwrap_or_default();
        if host.is_empty() {
            return Err(DomainError::ConfigError(format!(
                "Invalid registry endpoint '{}'",
                endpoint
            )));
        }

        Ok((format!("{}://{}/", scheme, host), host.to_string()))
    }

    async fn send(&self, body: Vec<u8>, timestamp: i64) -> Result<(u16, Vec<u8>), DomainError> {
        let authorization = self.signer.authorization(&self.host, &body, timestamp)?;

        let response = self
            .http
            .post(&self.url)
            .header("Content-Type", CONTENT_TYPE)
            .header("Host", &self.host)
            .header("X-TC-Action", ACTION)
            .header("X-TC-Version", API_VERSION)
            .header("X-TC-Region", &self.region)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                DomainError::RegistryTransport(format!("request to {} failed: {}", self.url, e))
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            DomainError::RegistryTransport(format!(
                "failed to read response from {}: {}",
                self.url, e
            ))
        })?;

        Ok((status, bytes.to_vec()))
    }

    fn parse_response(
        &self,
        filter: &RegistryFilter,
        status: u16,
        body: &[u8],
    ) -> Result<RegistryAddresses, DomainError> {
        let envelope: ApiEnvelope = match serde_json::from_slice(body) {
            Ok(envelope) => envelope,
            Err(e) if (200..300).contains(&status) => {
                return Err(DomainError::RegistryTransport(format!(
                    "undecodable response from {}: {}",
                    self.url, e
                )))
            }
            Err(_) => {
                return Err(DomainError::RegistryTransport(format!(
                    "{} returned HTTP {}",
                    self.url, status
                )))
            }
        };

        let response = envelope.response;

        if let Some(api_error) = response.error {
            return Err(DomainError::RegistryTransport(format!(
                "{}: {} (request {})",
                api_error.code,
                api_error.message,
                response.request_id.unwrap_or_default()
            )));
        }

        if !(200..300).contains(&status) {
            return Err(DomainError::RegistryTransport(format!(
                "{} returned HTTP {}",
                self.url, status
            )));
        }

        let records: Vec<RegistryRecord> = response
            .registries
            .unwrap_or_default()
            .into_iter()
            .map(RegistryRecord::from)
            .collect();

        debug!(
            identifiers = %filter.describe(),
            entries = records.len(),
            total_count = ?response.total_count,
            "Registry lookup returned"
        );

        RegistryAddresses::from_records(&records)
            .ok_or_else(|| DomainError::RegistryEmptyResult(filter.describe()))
    }
}

#[async_trait]
impl RegistryLookup for TcrRegistryClient {
    async fn describe_instances(
        &self,
        filter: &RegistryFilter,
    ) -> Result<RegistryAddresses, DomainError> {
        let body = serde_json::to_vec(&DescribeInstanceAllRequest::from_filter(filter)).map_err(
            |e| DomainError::RegistryTransport(format!("failed to encode request: {}", e)),
        )?;
        let timestamp = chrono::Utc::now().timestamp();

        debug!(url = %self.url, identifiers = %filter.describe(), "Calling registry directory");

        let result = match tokio::time::timeout(self.timeout, self.send(body, timestamp)).await {
            Ok(Ok((status, bytes))) => self.parse_response(filter, status, &bytes),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(DomainError::RegistryTimeout {
                endpoint: self.url.clone(),
            }),
        };

        match &result {
            Ok(addresses) => {
                debug!(identifiers = %filter.describe(), addresses = %addresses.joined(), "Registry internal address resolved");
            }
            Err(DomainError::RegistryEmptyResult(_)) => {
                error!(identifiers = %filter.describe(), "Registry internal address is empty");
            }
            Err(e) => {
                error!(identifiers = %filter.describe(), error = %e, "Failed to call registry to resolve internal address");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_endpoint_bare_host() {
        let (url, host) = TcrRegistryClient::split_endpoint("tcr.tencentcloudapi.com").unwrap();
        assert_eq!(url, "https://tcr.tencentcloudapi.com/");
        assert_eq!(host, "tcr.tencentcloudapi.com");
    }

    #[test]
    fn test_split_endpoint_with_scheme_and_port() {
        let (url, host) = TcrRegistryClient::split_endpoint("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/");
        assert_eq!(host, "127.0.0.1:8080");
    }

    #[test]
    fn test_split_endpoint_rejects_empty() {
        assert!(TcrRegistryClient::split_endpoint("").is_err());
        assert!(TcrRegistryClient::split_endpoint("https://").is_err());
    }
}
