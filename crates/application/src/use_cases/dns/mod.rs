mod handler_chain;
mod resolve_registry_address;

pub use handler_chain::{ChainOutcome, HandlerChain};
pub use resolve_registry_address::ResolveRegistryAddressUseCase;
