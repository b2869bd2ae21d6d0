use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;

use crate::{
    config::Config,
    hardware::fan_sim::{Command as FanCommand, FanSim, TempLevel},
    panel,
};

mod config;
mod send;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive button panel
    Panel {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },

    /// Turn the fan on or off
    Fan {
        state: FanState,

        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },

    /// Select a temperature level, which also sets the paired fan speed
    Temp {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=15))]
        level: u8,

        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },

    /// Set the raw fan speed
    Speed {
        speed: u8,

        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },

    /// Print the resolved configuration
    Config {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum FanState {
    On,
    Off,
}

pub async fn run() -> Result<()> {
    execute_command(Cli::parse().command).await
}

async fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Panel { config } => launch_panel(&config).await,

        Command::Fan { state, config } => {
            let powered = matches!(state, FanState::On);
            send::send(&config, FanCommand::SetPowered(powered)).await
        }

        Command::Temp { level, config } => {
            let level = TempLevel::new(level)?;
            send::send(&config, FanCommand::SetTemperature(level)).await
        }

        Command::Speed { speed, config } => {
            send::send(&config, FanCommand::SetFanSpeed(speed)).await
        }

        Command::Config { config } => self::config::read_and_print(&config).await,
    }
}

async fn launch_panel(config_path: &str) -> Result<()> {
    let config = Config::load_or_default(config_path).await?;
    let fan = FanSim::from_config(&config.fan_sim);

    panel::run(fan).await
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_temp_range() {
        assert!(Cli::try_parse_from(["fanpanel", "temp", "15"]).is_ok());
        assert!(Cli::try_parse_from(["fanpanel", "temp", "16"]).is_err());
    }
}
