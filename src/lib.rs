pub mod batch;
pub mod cmd;
pub mod config;
pub mod display;
pub mod humanize;
pub mod logs;

pub use humanize::{
    bytes_to_human, human_to_bytes, ConvertError, Options, RoundMode, UnitStandard,
};
