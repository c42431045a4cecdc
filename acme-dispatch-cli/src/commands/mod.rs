//! CLI command implementations.

pub mod connect;
pub mod providers;
pub mod resolve;

use crate::error::CliResult;
use serde::Serialize;
use std::fmt::Display;

/// Print a command report, either human readable or as JSON.
pub fn print<T: Serialize + Display>(report: &T, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
