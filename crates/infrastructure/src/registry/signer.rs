//! TC3-HMAC-SHA256 request signing for the cloud API gateway.
//!
//! ```text
//! CanonicalRequest = POST\n/\n\n<canonical headers>\n<signed headers>\nhex(sha256(payload))
//! StringToSign     = TC3-HMAC-SHA256\n<timestamp>\n<date>/<service>/tc3_request\nhex(sha256(CanonicalRequest))
//! SigningKey       = HMAC(HMAC(HMAC("TC3" + secret, date), service), "tc3_request")
//! Signature        = hex(HMAC(SigningKey, StringToSign))
//! ```

use chrono::DateTime;
use registry_resolve_domain::DomainError;
use ring::hmac;
use sha2::{Digest, Sha256};

pub const SIGN_ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";
const SIGNED_HEADERS: &str = "content-type;host";
const TERMINATOR: &str = "tc3_request";

pub struct Tc3Signer {
    secret_id: String,
    secret_key: String,
    service: &'static str,
}

impl Tc3Signer {
    pub fn new(
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        service: &'static str,
    ) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            service,
        }
    }

    /// Value for the `Authorization` header of a JSON POST to `/`.
    pub fn authorization(
        &self,
        host: &str,
        payload: &[u8],
        timestamp: i64,
    ) -> Result<String, DomainError> {
        let date = utc_date(timestamp)?;
        let scope = format!("{}/{}/{}", date, self.service, TERMINATOR);

        let canonical = canonical_request(host, payload);
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            SIGN_ALGORITHM,
            timestamp,
            scope,
            sha256_hex(canonical.as_bytes())
        );

        let secret_date = hmac_sha256(
            format!("TC3{}", self.secret_key).as_bytes(),
            date.as_bytes(),
        );
        let secret_service = hmac_sha256(&secret_date, self.service.as_bytes());
        let secret_signing = hmac_sha256(&secret_service, TERMINATOR.as_bytes());
        let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

        Ok(format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            SIGN_ALGORITHM, self.secret_id, scope, SIGNED_HEADERS, signature
        ))
    }
}

pub(crate) fn canonical_request(host: &str, payload: &[u8]) -> String {
    format!(
        "POST\n/\n\ncontent-type:{}\nhost:{}\n\n{}\n{}",
        CONTENT_TYPE,
        host,
        SIGNED_HEADERS,
        sha256_hex(payload)
    )
}

pub(crate) fn utc_date(timestamp: i64) -> Result<String, DomainError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .ok_or_else(|| {
            DomainError::RegistryTransport(format!("Invalid signing timestamp {}", timestamp))
        })
}

pub(crate) fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub(crate) fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, data).as_ref().to_vec()
}
