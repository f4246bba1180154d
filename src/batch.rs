use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use crate::display::{self, Record};
use crate::humanize::{self, Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Byte count to human-readable size.
    #[default]
    ToHuman,

    /// Human-readable size to byte count.
    ToBytes,
}

/// Converts input values with a fixed set of options.
#[derive(Debug, Clone)]
pub struct Converter {
    direction: Direction,
    opts: Options,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Converter {
    pub fn new(direction: Direction, opts: Options) -> Self {
        Self { direction, opts }
    }

    pub fn convert(&self, input: &str) -> Result<String> {
        match self.direction {
            Direction::ToBytes => {
                let bytes = humanize::human_to_bytes(input, &self.opts)?;
                Ok(bytes.to_string())
            }
            Direction::ToHuman => {
                let bytes: u64 = match input.trim().parse() {
                    Ok(bytes) => bytes,
                    Err(_) => bail!("invalid byte count: {input}"),
                };
                Ok(humanize::bytes_to_human(bytes, &self.opts)?)
            }
        }
    }

    pub fn record(&self, input: &str) -> Record {
        match self.convert(input) {
            Ok(output) => {
                debug!("Convert '{input}' to '{output}'");
                Record {
                    input: input.to_string(),
                    output,
                    error: None,
                }
            }
            Err(err) => {
                debug!("Convert '{input}' failed: {err:#}");
                Record {
                    input: input.to_string(),
                    output: String::new(),
                    error: Some(format!("{err:#}")),
                }
            }
        }
    }

    /// Convert a single value. Failures are returned to the caller.
    pub fn run_single<W: Write>(&self, input: &str, json: bool, out: &mut W) -> Result<()> {
        let output = self.convert(input)?;
        let record = Record {
            input: input.to_string(),
            output,
            error: None,
        };
        if json {
            display::write_json(out, &record)
        } else {
            display::write_plain(out, &record)
        }
    }

    /// Convert every non-blank line of `reader`.
    ///
    /// A failing line never stops the batch. In plain mode results are written
    /// as they are produced, successes to `out` and failures to `err_out`. In
    /// JSON mode one array of records is written to `out` after the last line,
    /// in input order.
    pub fn run_batch<R, W, E>(
        &self,
        reader: R,
        json: bool,
        out: &mut W,
        err_out: &mut E,
    ) -> Result<Summary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        let mut records = Vec::new();

        for line in reader.split(b'\n') {
            let line = line.context("read input line")?;
            let record = match String::from_utf8(line) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    self.record(input)
                }
                Err(err) => {
                    let input = String::from_utf8_lossy(err.as_bytes()).trim().to_string();
                    debug!("Convert '{input}' failed: invalid utf-8 input");
                    Record {
                        input,
                        output: String::new(),
                        error: Some(String::from("invalid utf-8 input")),
                    }
                }
            };
            summary.total += 1;
            if !record.is_ok() {
                summary.failed += 1;
            }

            if json {
                if let Some(err) = record.error.as_ref() {
                    warn!("Convert '{}' failed: {err}", record.input);
                }
                records.push(record);
                continue;
            }

            if record.is_ok() {
                display::write_plain(out, &record)?;
            } else {
                display::write_plain_error(err_out, &record)?;
            }
        }

        if json {
            display::write_json(out, &records)?;
        }

        info!(
            "Batch done, {} lines converted, {} failed",
            summary.total, summary.failed
        );
        Ok(summary)
    }
}
