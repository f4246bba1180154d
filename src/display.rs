use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// The outcome of converting one input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub input: String,

    /// Empty when the conversion failed.
    pub output: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Record {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, o: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(o).context("encode json")?;
    writeln!(out, "{json}").context("write json output")?;
    Ok(())
}

pub fn write_plain<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    writeln!(out, "{}", record.output).context("write output")?;
    Ok(())
}

pub fn write_plain_error<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    if let Some(err) = record.error.as_ref() {
        writeln!(out, "{}: error: {err}", record.input).context("write error output")?;
    }
    Ok(())
}
