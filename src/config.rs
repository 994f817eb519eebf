//! Wallet configuration from environment variables
//!
//! Controls where wallet files live and which Fuego node the sync worker
//! connects to by default.

use std::env;
use std::path::PathBuf;

use crate::network;

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Base directory for wallet files
    pub data_dir: PathBuf,
    /// Default daemon address for `connect_node` when the caller passes none
    pub default_node_address: String,
    /// Default daemon port
    pub default_node_port: u16,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `FUEGO_DATA_DIR`: base directory for wallet files (default `./wallets`)
    /// - `FUEGO_NODE`: default daemon as `host` or `host:port`
    pub fn from_env() -> Self {
        let data_dir = env::var("FUEGO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./wallets"));

        let (default_node_address, default_node_port) = match env::var("FUEGO_NODE") {
            Ok(node) if !node.is_empty() => {
                let (host, port) = parse_node(&node);
                log::info!("Default Fuego node: {}:{}", host, port);
                (host, port)
            }
            _ => {
                let (host, port) = network::KNOWN_NODES[0];
                (host.to_string(), port)
            }
        };

        Self {
            data_dir,
            default_node_address,
            default_node_port,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        let (host, port) = network::KNOWN_NODES[0];
        Self {
            data_dir: PathBuf::from("./wallets"),
            default_node_address: host.to_string(),
            default_node_port: port,
        }
    }
}

/// Split a `host:port` string, falling back to the default daemon port.
fn parse_node(node: &str) -> (String, u16) {
    let node = node
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    match node.rsplit_once(':') {
        Some((host, port)) => match port.parse::<u16>() {
            Ok(port) => (host.to_string(), port),
            Err(_) => {
                log::warn!("Invalid port in FUEGO_NODE '{}', using default", node);
                (host.to_string(), network::DEFAULT_NODE_PORT)
            }
        },
        None => (node.to_string(), network::DEFAULT_NODE_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_node_with_port() {
        assert_eq!(
            parse_node("fuego.spaceportx.net:18180"),
            ("fuego.spaceportx.net".to_string(), 18_180)
        );
    }

    #[test]
    fn parse_node_without_port_uses_default() {
        assert_eq!(
            parse_node("node1.fuego.network"),
            ("node1.fuego.network".to_string(), network::DEFAULT_NODE_PORT)
        );
    }

    #[test]
    fn parse_node_strips_scheme() {
        assert_eq!(
            parse_node("http://127.0.0.1:18081"),
            ("127.0.0.1".to_string(), 18_081)
        );
    }
}
