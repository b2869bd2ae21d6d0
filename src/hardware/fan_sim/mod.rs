use std::net::IpAddr;

use eyre::{Context, Result};

use crate::config::FanSimConfig;

use self::protocol::Link;

pub use self::defs::{Command, InvalidTempLevel, TempLevel};

pub mod defs;
pub mod protocol;

/// Client handle for the fan simulator's HTTP API.
pub struct FanSim {
    link: Link,
}

impl FanSim {
    pub fn from_config(config: &FanSimConfig) -> Self {
        Self::new(config.ip, config.port)
    }

    pub fn new(ip: IpAddr, port: u16) -> Self {
        FanSim {
            link: Link::new(ip, port),
        }
    }

    /* == Public API == */

    /// Issues the command's requests in order on a detached task. Responses
    /// and transport errors are not observed.
    pub fn dispatch(&self, command: Command) {
        let link = self.link.clone();

        tokio::spawn(async move {
            for endpoint in command.endpoints() {
                tracing::debug!("GET {}", link.url(endpoint));
                let _ = link.get(endpoint).await;
            }
        });
    }

    /// Awaited variant for one-shot use. Transport errors surface; response
    /// bodies are still ignored.
    pub async fn execute(&self, command: Command) -> Result<()> {
        for endpoint in command.endpoints() {
            tracing::debug!("GET {}", self.link.url(endpoint));

            self.link
                .get(endpoint)
                .await
                .wrap_err_with(|| format!("GET {} failed", self.link.url(endpoint)))?;
        }

        Ok(())
    }
}
