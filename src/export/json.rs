use tracing::debug;

use crate::domain::error::Result;
use crate::domain::types::NetworkConfig;

pub fn to_json(network: &NetworkConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(network)?)
}

/// Parse a network and reject it if it breaks a structural invariant.
pub fn from_json(input: &str) -> Result<NetworkConfig> {
    let network: NetworkConfig = serde_json::from_str(input)?;
    debug!("Parsed network with {} nodes", network.num_nodes());
    network.validate()?;
    Ok(network)
}
