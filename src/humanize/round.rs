use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum RoundMode {
    /// Half away from zero.
    #[serde(rename = "nearest")]
    #[default]
    Nearest,

    /// Toward positive infinity, never under-reports a size.
    #[serde(rename = "up")]
    Up,

    /// Toward negative infinity, never over-reports a size.
    #[serde(rename = "down")]
    Down,
}

impl RoundMode {
    /// Round `value` to `precision` digits after the decimal point.
    ///
    /// The precision is expected to be validated by the caller.
    pub fn apply(self, value: f64, precision: u32) -> f64 {
        let multiplier = 10_f64.powi(precision as i32);
        let scaled = value * multiplier;
        let rounded = match self {
            Self::Nearest => scaled.round(),
            Self::Up => scaled.ceil(),
            Self::Down => scaled.floor(),
        };
        rounded / multiplier
    }
}

impl fmt::Display for RoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}
