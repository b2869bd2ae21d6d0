use std::net::{IpAddr, SocketAddr};

use reqwest::Client;

use super::defs::Command;

/* === Definitions === */

/// Thin HTTP layer over the simulator's GET-only API.
#[derive(Clone)]
pub struct Link {
    client: Client,
    base: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint {
    FanOn,
    FanOff,
    Temperature(u8),
    FanSpeed(u8),
}

/* === Implementations === */

impl Link {
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Link {
            client: Client::new(),
            base: format!("http://{}", SocketAddr::new(ip, port)),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base, endpoint.path())
    }

    /// Issues a GET and waits for the response headers. The body is never
    /// read and the status never checked.
    pub async fn get(&self, endpoint: Endpoint) -> reqwest::Result<()> {
        self.client.get(self.url(endpoint)).send().await?;
        Ok(())
    }
}

impl Endpoint {
    pub fn path(self) -> String {
        match self {
            Endpoint::FanOn => "/fan/on".to_owned(),
            Endpoint::FanOff => "/fan/off".to_owned(),
            Endpoint::Temperature(level) => format!("/temp/{level}"),
            Endpoint::FanSpeed(speed) => format!("/fan/speed/{speed}"),
        }
    }
}

impl Command {
    /// Endpoints hit by this command, in issuance order. Selecting a
    /// temperature also sets the paired fan speed.
    pub fn endpoints(self) -> Vec<Endpoint> {
        match self {
            Command::SetPowered(true) => vec![Endpoint::FanOn],
            Command::SetPowered(false) => vec![Endpoint::FanOff],

            Command::SetTemperature(level) => vec![
                Endpoint::Temperature(level.get()),
                Endpoint::FanSpeed(level.fan_speed()),
            ],

            Command::SetFanSpeed(speed) => vec![Endpoint::FanSpeed(speed)],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use crate::hardware::fan_sim::TempLevel;

    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::FanOn.path(), "/fan/on");
        assert_eq!(Endpoint::FanOff.path(), "/fan/off");
        assert_eq!(Endpoint::Temperature(7).path(), "/temp/7");
        assert_eq!(Endpoint::FanSpeed(70).path(), "/fan/speed/70");
    }

    #[test]
    fn test_power_endpoints() {
        assert_eq!(Command::SetPowered(true).endpoints(), [Endpoint::FanOn]);
        assert_eq!(Command::SetPowered(false).endpoints(), [Endpoint::FanOff]);
    }

    #[test]
    fn test_temperature_pair() {
        let level = TempLevel::new(7).unwrap();
        let endpoints = Command::SetTemperature(level).endpoints();

        assert_eq!(
            endpoints,
            [Endpoint::Temperature(7), Endpoint::FanSpeed(70)]
        );
    }

    #[test]
    fn test_ipv6_base_url() {
        let link = Link::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 5000);

        assert_eq!(link.url(Endpoint::FanOn), "http://[::1]:5000/fan/on");
    }
}
