use log::warn;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 18000;

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDRESS` and `PORT`; unset or unparsable values keep defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = ServerConfig::default();

        if let Some(value) = lookup("BIND_ADDRESS") {
            match value.trim().parse() {
                Ok(address) => config.bind_address = address,
                Err(_) => warn!("ignoring invalid BIND_ADDRESS '{}'", value),
            }
        }

        if let Some(value) = lookup("PORT") {
            match value.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("ignoring invalid PORT '{}'", value),
            }
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
