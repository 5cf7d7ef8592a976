//! JSON bodies of the `DescribeInstanceAll` action.

use registry_resolve_domain::{RegistryFilter, RegistryRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceAllRequest<'a> {
    pub all_region: bool,
    pub filters: Vec<ApiFilter<'a>>,
}

impl<'a> DescribeInstanceAllRequest<'a> {
    pub fn from_filter(filter: &'a RegistryFilter) -> Self {
        Self {
            all_region: true,
            filters: vec![ApiFilter {
                name: filter.name,
                values: &filter.values,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiFilter<'a> {
    pub name: &'a str,
    pub values: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiEnvelope {
    pub response: DescribeInstanceAllResponse,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceAllResponse {
    #[serde(default)]
    pub registries: Option<Vec<RegistryEntry>>,

    #[serde(default)]
    pub total_count: Option<i64>,

    #[serde(default)]
    pub request_id: Option<String>,

    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistryEntry {
    #[serde(default)]
    pub registry_id: Option<String>,

    #[serde(default)]
    pub registry_name: Option<String>,

    #[serde(default)]
    pub internal_endpoint: Option<String>,

    #[serde(default)]
    pub public_domain: Option<String>,
}

impl From<RegistryEntry> for RegistryRecord {
    fn from(entry: RegistryEntry) -> Self {
        Self {
            registry_name: entry.registry_name,
            internal_endpoint: entry.internal_endpoint,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}
