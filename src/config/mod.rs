use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::humanize::{Options, RoundMode, UnitStandard, MAX_PRECISION};
use crate::logs;

mod defaults;

pub const CONFIG_ENV: &str = "BYTES_HUMAN_CONFIG";

/// Defaults read from the config file, overridden by command line flags.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "defaults::standard")]
    pub standard: UnitStandard,

    #[serde(default = "defaults::precision")]
    pub precision: u32,

    #[serde(default = "defaults::round")]
    pub round: RoundMode,

    /// Forced output unit, empty means automatic.
    #[serde(default = "defaults::empty_string")]
    pub unit: String,

    #[serde(default = "defaults::disable")]
    pub json: bool,

    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standard: defaults::standard(),
            precision: defaults::precision(),
            round: defaults::round(),
            unit: defaults::empty_string(),
            json: defaults::disable(),
            log_level: defaults::log_level(),
        }
    }
}

impl Config {
    /// Load config from `path`, the `BYTES_HUMAN_CONFIG` env, or the default
    /// location, in that order. Only a missing default file falls back to the
    /// built-in defaults.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (PathBuf::from(path.as_ref()), true),
            None => match env::var_os(CONFIG_ENV) {
                Some(path) if !path.is_empty() => (PathBuf::from(path), true),
                _ => {
                    let path = shellexpand::full(defaults::CONFIG_PATH)
                        .context("expand default config path")?;
                    (PathBuf::from(path.into_owned()), false)
                }
            },
        };

        let cfg = match fs::read_to_string(&path) {
            Ok(data) => Self::parse(&data)
                .with_context(|| format!("parse config file '{}'", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => Self::default(),
            Err(err) => {
                return Err(err).with_context(|| format!("read config file '{}'", path.display()))
            }
        };
        Ok(cfg)
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(data).context("parse toml")?;
        cfg.validate().context("validate config")?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail!(
                "precision should be in range [0,{MAX_PRECISION}], found {}",
                self.precision
            );
        }
        logs::parse_level(&self.log_level)?;
        Ok(())
    }

    /// Conversion options described by this config alone.
    pub fn options(&self) -> Options {
        Options {
            standard: self.standard,
            precision: self.precision,
            round: self.round,
            unit: if self.unit.is_empty() {
                None
            } else {
                Some(self.unit.clone())
            },
        }
    }
}
