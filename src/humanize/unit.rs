use std::fmt;

use serde::{Deserialize, Serialize};

use super::ConvertError;

pub const BINARY_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
pub const DECIMAL_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// The index of the largest unit in both tables.
pub const MAX_UNIT_INDEX: usize = BINARY_UNITS.len() - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum UnitStandard {
    /// Base 1024: KiB, MiB, GiB, ...
    #[serde(rename = "binary")]
    #[default]
    Binary,

    /// Base 1000: KB, MB, GB, ...
    #[serde(rename = "decimal")]
    Decimal,
}

impl UnitStandard {
    #[inline]
    pub fn base(self) -> u64 {
        match self {
            Self::Binary => 1024,
            Self::Decimal => 1000,
        }
    }

    #[inline]
    pub fn units(self) -> &'static [&'static str; 7] {
        match self {
            Self::Binary => &BINARY_UNITS,
            Self::Decimal => &DECIMAL_UNITS,
        }
    }

    /// The number of bytes in the unit at `index`, as a float.
    #[inline]
    pub fn scale(self, index: usize) -> f64 {
        (self.base() as f64).powi(index as i32)
    }

    #[inline]
    pub fn label(self, index: usize) -> &'static str {
        self.units()[index]
    }

    /// Case-insensitive exact lookup of a unit label in this standard's table.
    pub fn find_unit(self, unit: &str) -> Option<usize> {
        self.units()
            .iter()
            .position(|label| label.eq_ignore_ascii_case(unit))
    }
}

impl fmt::Display for UnitStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Decimal => write!(f, "decimal"),
        }
    }
}

/// Pick the unit to render `bytes` in.
///
/// A forced unit is looked up in the table of `standard`. Otherwise the
/// largest unit whose scaled value is at least 1 is chosen, capped at the
/// last unit of the table so huge counts are reported in EiB/EB.
pub fn select_unit(
    bytes: u64,
    standard: UnitStandard,
    forced: Option<&str>,
) -> Result<usize, ConvertError> {
    if let Some(unit) = forced.filter(|unit| !unit.is_empty()) {
        return standard
            .find_unit(unit)
            .ok_or_else(|| ConvertError::InvalidUnit(unit.to_string()));
    }

    if bytes == 0 {
        return Ok(0);
    }

    // floor(log_base(bytes)), computed on integers.
    let base = standard.base();
    let mut rest = bytes;
    let mut index = 0;
    while rest >= base && index < MAX_UNIT_INDEX {
        rest /= base;
        index += 1;
    }
    Ok(index)
}

/// Resolve a parsed, upper-cased unit token to the standard that applies to it
/// and its index in that standard's table.
///
/// A decimal-style suffix such as `KB` or `GB` always means the decimal
/// standard, whatever the caller asked for. Binary-style suffixes and the bare
/// `B` keep the requested standard.
pub fn resolve_unit(
    token: &str,
    requested: UnitStandard,
) -> Result<(UnitStandard, usize), ConvertError> {
    let token = token.to_ascii_uppercase();
    let standard = if token.len() > 1 && token.ends_with('B') && !token.ends_with("IB") {
        UnitStandard::Decimal
    } else {
        requested
    };

    match standard.find_unit(&token) {
        Some(index) => Ok((standard, index)),
        None => Err(ConvertError::UnknownUnit(token)),
    }
}
