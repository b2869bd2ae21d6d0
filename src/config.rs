use std::net::{IpAddr, Ipv4Addr};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub fan_sim: FanSimConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FanSimConfig {
    pub ip: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Config {
    pub async fn load(path: &str) -> Result<Self> {
        let data = fs::read(path)
            .await
            .wrap_err_with(|| format!("Failed to read {path}"))?;

        serde_yaml::from_slice(&data).wrap_err_with(|| format!("Failed to parse {path}"))
    }

    /// Missing file falls back to a simulator on the local machine.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::try_exists(path).await? {
            true => Self::load(path).await,
            false => {
                tracing::warn!("No config at {path}, assuming a local simulator");
                Ok(Config::default())
            }
        }
    }
}

impl Default for FanSimConfig {
    fn default() -> Self {
        FanSimConfig {
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: default_port(),
        }
    }
}

const fn default_port() -> u16 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults() {
        let config: Config = serde_yaml::from_str("fan_sim:\n  ip: 192.168.1.40\n").unwrap();

        assert_eq!(config.fan_sim.ip, IpAddr::V4(Ipv4Addr::new(192, 168, 1, 40)));
        assert_eq!(config.fan_sim.port, 5000);
    }
}
