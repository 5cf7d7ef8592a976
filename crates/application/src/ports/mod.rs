mod fallback_resolver;
mod query_handler;
mod registry_lookup;
mod request_counter;

pub use fallback_resolver::FallbackResolver;
pub use query_handler::{HandlerStatus, QueryHandler, ResponseSink};
pub use registry_lookup::RegistryLookup;
pub use request_counter::RequestCounter;
