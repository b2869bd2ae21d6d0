use eyre::Result;

use crate::{
    config::Config,
    hardware::fan_sim::{Command, FanSim},
};

pub async fn send(config_path: &str, command: Command) -> Result<()> {
    let config = Config::load_or_default(config_path).await?;
    let fan = FanSim::from_config(&config.fan_sim);

    fan.execute(command).await
}
