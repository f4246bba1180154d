use crate::humanize::{RoundMode, UnitStandard};

pub(super) const CONFIG_PATH: &str = "~/.config/bytes-human.toml";

pub(super) fn standard() -> UnitStandard {
    UnitStandard::Binary
}

pub(super) fn precision() -> u32 {
    1
}

pub(super) fn round() -> RoundMode {
    RoundMode::Nearest
}

pub(super) fn empty_string() -> String {
    String::new()
}

pub(super) fn disable() -> bool {
    false
}

pub(super) fn log_level() -> String {
    String::from("error")
}
