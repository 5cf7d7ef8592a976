use super::DomainError;
use std::fmt;

/// Registry key derived from the first label of a queried name.
///
/// `testtcr.tencentcloudcr.com.` yields `testtcr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupIdentifier(String);

impl LookupIdentifier {
    /// Strips leading dots and returns the label before the next dot,
    /// lowercased since names compare case-insensitively.
    ///
    /// Fails when no dot remains after stripping, or when the label itself
    /// is empty; callers fall back to ordinary resolution in that case.
    pub fn extract(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim_start_matches('.');

        match trimmed.split_once('.') {
            Some((label, _)) if !label.is_empty() => Ok(Self(label.to_ascii_lowercase())),
            _ => Err(DomainError::MalformedQueryName(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LookupIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
