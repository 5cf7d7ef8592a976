use super::LookupIdentifier;

/// Filter name the registry directory API matches identifiers against.
pub const REGISTRY_NAME_FILTER: &str = "RegistryName";

/// Identifier set submitted to the registry in a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFilter {
    pub name: &'static str,
    pub values: Vec<String>,
}

impl RegistryFilter {
    pub fn single(identifier: &LookupIdentifier) -> Self {
        Self {
            name: REGISTRY_NAME_FILTER,
            values: vec![identifier.as_str().to_string()],
        }
    }

    pub fn describe(&self) -> String {
        self.values.join(",")
    }
}

/// One registry entry as returned by the directory API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryRecord {
    pub registry_name: Option<String>,
    pub internal_endpoint: Option<String>,
}

impl RegistryRecord {
    pub fn new(internal_endpoint: impl Into<String>) -> Self {
        Self {
            registry_name: None,
            internal_endpoint: Some(internal_endpoint.into()),
        }
    }

    pub fn usable_address(&self) -> Option<&str> {
        self.internal_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
    }
}

/// Non-empty, ordered set of internal addresses retained from a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryAddresses(Vec<String>);

impl RegistryAddresses {
    /// Keeps only records carrying a usable address; `None` when nothing survives.
    pub fn from_records(records: &[RegistryRecord]) -> Option<Self> {
        let addresses: Vec<String> = records
            .iter()
            .filter_map(RegistryRecord::usable_address)
            .map(str::to_string)
            .collect();

        if addresses.is_empty() {
            None
        } else {
            Some(Self(addresses))
        }
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined rendering used in diagnostics.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}
