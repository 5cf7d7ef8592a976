//! Registry Resolve Domain Layer
pub mod answer_record;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod lookup_identifier;
pub mod registry;

pub use answer_record::{AnswerRecord, RecordClass};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, RegistryConfig, ServerConfig};
pub use dns_record::RecordType;
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use lookup_identifier::LookupIdentifier;
pub use registry::{RegistryAddresses, RegistryFilter, RegistryRecord};
