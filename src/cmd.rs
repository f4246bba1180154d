use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use log::debug;

use crate::batch::{Converter, Direction};
use crate::config::Config;
use crate::humanize::{Options, RoundMode, UnitStandard};
use crate::logs;

const EXAMPLES: &str = "\
Examples:
  bytes-human -h 1048576              # Convert bytes to human
  bytes-human -b \"1.5 GB\"             # Convert human to bytes
  bytes-human -h -d 1000000           # Use decimal units
  cat sizes.txt | bytes-human -B -h   # Batch mode";

/// Convert between byte counts and human-readable sizes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, after_help = EXAMPLES)]
pub struct App {
    /// The value to convert. Required unless in batch mode.
    pub value: Option<String>,

    /// Convert bytes to human-readable format (default).
    #[clap(long = "human", short = 'h', conflicts_with = "to_bytes")]
    pub to_human: bool,

    /// Convert human-readable format to bytes.
    #[clap(long = "bytes", short = 'b')]
    pub to_bytes: bool,

    /// Use decimal units (KB, MB) instead of binary (KiB, MiB).
    #[clap(long, short)]
    pub decimal: bool,

    /// Digits after the decimal point, in range [0,6].
    #[clap(long, short)]
    pub precision: Option<u32>,

    /// Round up.
    #[clap(long, short = 'u')]
    pub round_up: bool,

    /// Round down.
    #[clap(long, short = 'D')]
    pub round_down: bool,

    /// Force a specific output unit (B, KiB, MiB, etc.).
    #[clap(long, short = 'f')]
    pub unit: Option<String>,

    /// Output in JSON format.
    #[clap(long, short)]
    pub json: bool,

    /// Batch mode, read values line by line from stdin.
    #[clap(long, short = 'B')]
    pub batch: bool,

    /// The config file to use. Default is `~/.config/bytes-human.toml`.
    #[clap(long, short)]
    pub config: Option<String>,

    /// Log level: error, warn, info or debug. Logs are written to stderr.
    #[clap(long)]
    pub log_level: Option<String>,

    /// Print help.
    #[clap(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Everything a run needs, after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub direction: Direction,
    pub options: Options,
    pub json: bool,
    pub batch: bool,
    pub log_level: String,
}

impl App {
    pub fn run(&self) -> Result<()> {
        let cfg = Config::load(self.config.as_deref()).context("load config")?;
        let settings = self.settings(cfg)?;
        logs::init(&settings.log_level)?;
        debug!("Use settings: {:?}", settings);

        let conv = Converter::new(settings.direction, settings.options);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if settings.batch {
            let stdin = io::stdin();
            let mut err_out = io::stderr();
            conv.run_batch(stdin.lock(), settings.json, &mut out, &mut err_out)?;
        } else {
            let value = match self.value.as_ref() {
                Some(value) => value,
                None => bail!("no input provided, see `--help` for usage"),
            };
            conv.run_single(value, settings.json, &mut out)?;
        }

        out.flush().context("flush output")?;
        Ok(())
    }

    /// Merge flags over `cfg`. A flag always wins over its config key.
    pub fn settings(&self, cfg: Config) -> Result<Settings> {
        let direction = if self.to_bytes {
            Direction::ToBytes
        } else {
            Direction::ToHuman
        };

        let mut options = cfg.options();
        if self.decimal {
            options.standard = UnitStandard::Decimal;
        }
        if let Some(precision) = self.precision {
            options.precision = precision;
        }
        if self.round_up {
            options.round = RoundMode::Up;
        } else if self.round_down {
            options.round = RoundMode::Down;
        }
        if let Some(unit) = self.unit.as_ref() {
            options.unit = if unit.is_empty() {
                None
            } else {
                Some(unit.clone())
            };
        }
        options.validate()?;

        let log_level = self.log_level.clone().unwrap_or(cfg.log_level);
        logs::parse_level(&log_level)?;

        Ok(Settings {
            direction,
            options,
            json: self.json || cfg.json,
            batch: self.batch,
            log_level,
        })
    }
}
