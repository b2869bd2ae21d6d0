use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/* == TempLevel == */

/// Discrete temperature selector of the simulator. The panel exposes one
/// button per level.
#[derive(
    Copy, Clone, Debug, Default, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct TempLevel(u8);

#[derive(Debug, Error, Eq, PartialEq)]
#[error("temperature level {0} is out of range (0..=15)")]
pub struct InvalidTempLevel(pub u8);

impl TempLevel {
    pub const MAX: u8 = 15;

    pub fn new(level: u8) -> Result<Self, InvalidTempLevel> {
        match level <= Self::MAX {
            true => Ok(TempLevel(level)),
            false => Err(InvalidTempLevel(level)),
        }
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = TempLevel> {
        (0..=Self::MAX).map(TempLevel)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Fan speed paired with this level.
    pub fn fan_speed(self) -> u8 {
        self.0 * 10
    }
}

impl TryFrom<u8> for TempLevel {
    type Error = InvalidTempLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        TempLevel::new(level)
    }
}

impl From<TempLevel> for u8 {
    fn from(level: TempLevel) -> Self {
        level.0
    }
}

impl fmt::Display for TempLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* == Command == */

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum Command {
    SetPowered(bool),
    SetTemperature(TempLevel),
    SetFanSpeed(u8),
}
