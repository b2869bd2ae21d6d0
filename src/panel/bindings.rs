use std::fmt;

use crate::hardware::fan_sim::{Command, TempLevel};

/// One pressable cell of the panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    PowerOn,
    PowerOff,
    Temperature(TempLevel),
}

impl Button {
    /// The whole surface: the power pair followed by every temperature level
    /// in ascending order.
    pub fn all() -> Vec<Button> {
        [Button::PowerOn, Button::PowerOff]
            .into_iter()
            .chain(TempLevel::all().map(Button::Temperature))
            .collect()
    }

    pub fn command(self) -> Command {
        match self {
            Button::PowerOn => Command::SetPowered(true),
            Button::PowerOff => Command::SetPowered(false),
            Button::Temperature(level) => Command::SetTemperature(level),
        }
    }

    pub fn label(self) -> String {
        match self {
            Button::PowerOn => "ON".to_owned(),
            Button::PowerOff => "OFF".to_owned(),
            Button::Temperature(level) => level.to_string(),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::PowerOn => write!(f, "fan on"),
            Button::PowerOff => write!(f, "fan off"),
            Button::Temperature(level) => write!(f, "temp {level}"),
        }
    }
}
