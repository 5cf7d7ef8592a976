//! Container-registry directory client (TCR API `2019-09-24`).

pub mod client;
pub mod model;
pub mod signer;

pub use client::TcrRegistryClient;
pub use signer::Tc3Signer;
