use registry_resolve_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        registry_endpoint = %config.registry.endpoint,
        region = %config.registry.region,
        ttl = config.registry.ttl_or_zero(),
        "Configuration loaded"
    );

    Ok(config)
}
