//! Registry Resolve Infrastructure Layer
pub mod dns;
pub mod metrics;
pub mod registry;
pub mod system;
