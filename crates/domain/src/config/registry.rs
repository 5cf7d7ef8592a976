use serde::{de, Deserialize, Deserializer, Serialize};

/// Settings for the container-registry directory lookup.
///
/// `endpoint`, `secret_id`, `secret_key` and `ttl` are required. Any setting
/// may be written as `${VAR}` to read the value from the process environment;
/// `ttl` and `query_timeout` also accept a quoted number.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub secret_id: String,

    #[serde(default)]
    pub secret_key: String,

    #[serde(default, deserialize_with = "deserialize_ttl")]
    pub ttl: Option<u32>,

    #[serde(default = "default_region")]
    pub region: String,

    /// Upper bound, in seconds, for a single registry call or fallback lookup.
    #[serde(
        default = "default_query_timeout",
        deserialize_with = "deserialize_query_timeout"
    )]
    pub query_timeout: u64,
}

impl RegistryConfig {
    pub fn resolve_env(&mut self) {
        self.endpoint = expand_env(&self.endpoint);
        self.secret_id = expand_env(&self.secret_id);
        self.secret_key = expand_env(&self.secret_key);
        self.region = expand_env(&self.region);
    }

    /// Names of required settings that are absent or empty.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.endpoint.trim().is_empty() {
            missing.push("endpoint");
        }
        if self.secret_id.trim().is_empty() {
            missing.push("secret_id");
        }
        if self.secret_key.trim().is_empty() {
            missing.push("secret_key");
        }
        if self.ttl.is_none() {
            missing.push("ttl");
        }
        missing
    }

    pub fn ttl_or_zero(&self) -> u32 {
        self.ttl.unwrap_or(0)
    }
}

/// `${NAME}` reads `NAME` from the environment (empty when unset); other
/// values pass through untouched.
pub(crate) fn expand_env(value: &str) -> String {
    match value
        .trim()
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(var) => std::env::var(var).unwrap_or_default(),
        None => value.to_string(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberSetting {
    Number(u64),
    Text(String),
}

/// Number written literally, quoted, or as `${VAR}`. `None` when the text
/// expands to nothing (unset variable).
fn number_setting<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberSetting::deserialize(deserializer)? {
        NumberSetting::Number(n) => Ok(Some(n)),
        NumberSetting::Text(text) => {
            let expanded = expand_env(&text);
            let value = expanded.trim();
            if value.is_empty() {
                return Ok(None);
            }
            value.parse().map(Some).map_err(|_| {
                de::Error::custom(format!("expected a number or ${{VAR}}, got '{}'", text))
            })
        }
    }
}

fn deserialize_ttl<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    number_setting(deserializer)?
        .map(|n| {
            u32::try_from(n).map_err(|_| de::Error::custom(format!("ttl {} is out of range", n)))
        })
        .transpose()
}

fn deserialize_query_timeout<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_setting(deserializer)?.unwrap_or_else(default_query_timeout))
}

fn default_region() -> String {
    "ap-chengdu".to_string()
}

fn default_query_timeout() -> u64 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_passes_literals_through() {
        assert_eq!(expand_env("tcr.tencentcloudapi.com"), "tcr.tencentcloudapi.com");
        assert_eq!(expand_env("${unterminated"), "${unterminated");
    }

    #[test]
    fn test_expand_env_reads_variable() {
        std::env::set_var("REGISTRY_RESOLVE_TEST_ENDPOINT", "tcr.example.com");
        assert_eq!(
            expand_env("${REGISTRY_RESOLVE_TEST_ENDPOINT}"),
            "tcr.example.com"
        );
    }

    #[test]
    fn test_expand_env_unset_variable_is_empty() {
        assert_eq!(expand_env("${REGISTRY_RESOLVE_TEST_NEVER_SET_42}"), "");
    }

    #[test]
    fn test_missing_settings_lists_every_gap() {
        let config = RegistryConfig {
            endpoint: "tcr.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.missing_settings(), vec!["secret_id", "secret_key", "ttl"]);
    }
}
