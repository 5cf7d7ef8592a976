pub mod fallback_resolver;

pub use fallback_resolver::SystemFallbackResolver;
