//! Conversion between byte counts and human-readable sizes such as `1.5 GiB`.
//!
//! Everything in this module is pure: no I/O, no logging and no shared
//! mutable state, so conversions can run concurrently without locking.

pub mod parse;
pub mod round;
pub mod unit;

use thiserror::Error;

pub use round::RoundMode;
pub use unit::UnitStandard;

/// The largest accepted number of digits after the decimal point.
pub const MAX_PRECISION: u32 = 6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("precision must be between 0 and 6, found {0}")]
    InvalidPrecision(u32),

    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("size out of range: {0}")]
    Overflow(String),
}

/// Options for a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub standard: UnitStandard,

    /// Digits after the decimal point, in `[0, 6]`.
    pub precision: u32,

    pub round: RoundMode,

    /// Render in this unit instead of picking one. `None` or an empty string
    /// means automatic selection.
    pub unit: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            standard: UnitStandard::default(),
            precision: 1,
            round: RoundMode::default(),
            unit: None,
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.precision > MAX_PRECISION {
            return Err(ConvertError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

/// Convert a byte count to a string like `1.0 KiB`.
///
/// A zero byte count is always rendered as `0 B`.
pub fn bytes_to_human(bytes: u64, opts: &Options) -> Result<String, ConvertError> {
    opts.validate()?;

    let index = unit::select_unit(bytes, opts.standard, opts.unit.as_deref())?;
    if bytes == 0 {
        return Ok(format!("0 {}", opts.standard.label(0)));
    }

    let value = bytes as f64 / opts.standard.scale(index);
    let value = opts.round.apply(value, opts.precision);

    Ok(format_size(value, opts.standard.label(index), opts.precision))
}

/// Convert a string like `1.5 GB` to a byte count.
///
/// Decimal suffixes (`KB`, `MB`, ...) are always read as powers of 1000, even
/// when `opts` asks for the binary standard. The fractional part of the byte
/// count is truncated.
pub fn human_to_bytes(text: &str, opts: &Options) -> Result<u64, ConvertError> {
    let parsed = parse::parse_size(text)?;
    let (standard, index) = unit::resolve_unit(&parsed.unit, opts.standard)?;

    let bytes = parsed.value * standard.scale(index);
    // 2^64 itself saturates to u64::MAX, so that "16 EiB" round trips.
    if !bytes.is_finite() || bytes > u64::MAX as f64 {
        return Err(ConvertError::Overflow(text.trim().to_string()));
    }
    Ok(bytes as u64)
}

#[inline]
pub fn format_size(value: f64, unit: &str, precision: u32) -> String {
    format!("{value:.prec$} {unit}", prec = precision as usize)
}
