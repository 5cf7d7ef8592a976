pub mod dns;

pub use dns::{ChainOutcome, HandlerChain, ResolveRegistryAddressUseCase};
