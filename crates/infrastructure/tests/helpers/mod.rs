mod mock_registry_server;
mod stub_ports;

pub use mock_registry_server::*;
pub use stub_ports::*;
