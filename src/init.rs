//! Startup parsing and validation.
//!
//! The binary takes up to two positional counts, `<floors> <cars>`, plus
//! `key::value` options:
//!
//! ```text
//! liftbank 8 3 scenario::scenarios/morning_rush.json print_info::false
//! ```
//!
//! Supported keys: `scenario` (path to a press script), the print gates
//! (`print_fleet`, `print_err`, `print_warn`, `print_ok`, `print_info`,
//! `print_else`) and `debug` (errors only). Invalid counts are rejected
//! here, before any simulation state exists.

use anyhow::{anyhow, ensure, Result};

use crate::config::{self, SimConfig};
use crate::print;

/// Everything decided on the command line.
#[derive(Debug, Clone)]
pub struct Startup {
    /// The validated fleet geometry.
    pub config: SimConfig,
    /// Path of a scenario script, if one was given. `None` means
    /// interactive stdin input.
    pub scenario: Option<String>,
}

/// Parses program arguments (without the program name).
///
/// Positional arguments must be whole numbers; the first is the floor
/// count, the second the car count. Missing counts fall back to
/// [`config::DEFAULT_NUM_FLOORS`] / [`config::DEFAULT_NUM_CARS`].
pub fn parse_args(args: &[String]) -> Result<Startup> {
    let mut counts: Vec<u8> = Vec::new();
    let mut scenario: Option<String> = None;

    for arg in args {
        let parts: Vec<&str> = arg.split("::").collect();
        if parts.len() == 2 {
            let key = parts[0].to_lowercase();
            let value = parts[1].to_string();
            let is_true = value.to_lowercase() == "true";

            match key.as_str() {
                "scenario" => scenario = Some(value),
                "print_fleet" => *config::PRINT_FLEET_ON.lock().unwrap() = is_true,
                "print_err" => *config::PRINT_ERR_ON.lock().unwrap() = is_true,
                "print_warn" => *config::PRINT_WARN_ON.lock().unwrap() = is_true,
                "print_ok" => *config::PRINT_OK_ON.lock().unwrap() = is_true,
                "print_info" => *config::PRINT_INFO_ON.lock().unwrap() = is_true,
                "print_else" => *config::PRINT_ELSE_ON.lock().unwrap() = is_true,
                "debug" => {
                    // Debug mode: error messages only
                    *config::PRINT_FLEET_ON.lock().unwrap() = false;
                    *config::PRINT_WARN_ON.lock().unwrap() = false;
                    *config::PRINT_OK_ON.lock().unwrap() = false;
                    *config::PRINT_INFO_ON.lock().unwrap() = false;
                    *config::PRINT_ELSE_ON.lock().unwrap() = false;
                }
                _ => print::warn(format!("Unknown option '{}', ignored", arg)),
            }
        } else {
            let count: u8 = arg.parse().map_err(|_| {
                anyhow!(
                    "'{}' is not a valid count, expected a positive whole number",
                    arg
                )
            })?;
            counts.push(count);
        }
    }

    ensure!(
        counts.len() <= 2,
        "expected at most two counts: <floors> <cars>"
    );

    let num_floors = counts.first().copied().unwrap_or(config::DEFAULT_NUM_FLOORS);
    let num_cars = counts.get(1).copied().unwrap_or(config::DEFAULT_NUM_CARS);

    Ok(Startup {
        config: SimConfig::new(num_floors, num_cars)?,
        scenario,
    })
}
