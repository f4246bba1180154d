use std::io::{self, IsTerminal};

use anyhow::{bail, Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    Ok(match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        _ => bail!("unknown log level '{}'", level),
    })
}

fn format_level(colors: &ColoredLevelConfig, level: Level, colored: bool) -> String {
    if colored {
        colors.color(level).to_string()
    } else {
        level.to_string()
    }
}

/// Init the logger. Logs go to stderr, stdout is kept for conversion output.
pub fn init(level: &str) -> Result<()> {
    let level = parse_level(level)?;

    let is_terminal = io::stderr().is_terminal();

    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .warn(Color::Yellow)
        .debug(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = format_level(&colors, record.level(), is_terminal);
            out.finish(format_args!(
                "{} [{level}] {message}",
                humantime::format_rfc3339_millis(std::time::SystemTime::now()),
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("init logger")?;

    Ok(())
}
