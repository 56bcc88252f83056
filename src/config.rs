//! # config.rs – Centralized Parameter Store
//!
//! This module holds all static program parameters used throughout the
//! simulation, plus the validated [`SimConfig`] the rest of the system is
//! built from. Keeping configuration in one place makes tuning and testing
//! easier.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────────
//   1. FLEET GEOMETRY
// ──────────────────────────────────────────────────────────────
//

/// Number of floors used when none is given on the command line
pub const DEFAULT_NUM_FLOORS: u8 = 5;

/// Number of cars used when none is given on the command line
pub const DEFAULT_NUM_CARS: u8 = 2;

//
// ──────────────────────────────────────────────────────────────
//   2. TIMING
// ──────────────────────────────────────────────────────────────
//

/// Travel time per floor of distance
pub const FLOOR_TRAVEL_TIME: Duration = Duration::from_secs(2);

/// Duration of one door phase (opening or closing)
pub const DOOR_PHASE_TIME: Duration = Duration::from_millis(2500);

/// Full door animation as acknowledged by the renderer (open + close)
pub const DOOR_CYCLE_TIME: Duration = Duration::from_millis(5000);

/// Poll period of the stdin-to-core bridge
pub const INPUT_POLL_PERIOD: Duration = Duration::from_millis(25);

//
// ──────────────────────────────────────────────────────────────
//   3. PRINT GATES
// ──────────────────────────────────────────────────────────────
//

/// Enables/disables fleet status boxes
pub static PRINT_FLEET_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enables/disables error prints
pub static PRINT_ERR_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enables/disables warning prints
pub static PRINT_WARN_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enables/disables OK prints
pub static PRINT_OK_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enables/disables info prints
pub static PRINT_INFO_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enables/disables uncategorized prints
pub static PRINT_ELSE_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

//
// ──────────────────────────────────────────────────────────────
//   4. SIMULATION CONFIGURATION
// ──────────────────────────────────────────────────────────────
//

/// The two integers the simulation is parameterized by.
///
/// Construction goes through [`SimConfig::new`], which rejects invalid
/// geometry before any simulation state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of floors, `> 0`. Floors are indexed `0..num_floors`.
    pub num_floors: u8,
    /// Number of cars, `> 0` and `<= num_floors`.
    pub num_cars: u8,
}

impl SimConfig {
    /// Validates and builds a simulation configuration.
    ///
    /// ## Errors
    /// - zero floors
    /// - zero cars
    /// - more cars than floors
    pub fn new(num_floors: u8, num_cars: u8) -> Result<Self> {
        ensure!(num_floors > 0, "the number of floors must be at least 1");
        ensure!(num_cars > 0, "the number of cars must be at least 1");
        ensure!(
            num_cars <= num_floors,
            "the number of cars ({}) must not exceed the number of floors ({})",
            num_cars,
            num_floors
        );
        Ok(Self { num_floors, num_cars })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_floors: DEFAULT_NUM_FLOORS,
            num_cars: DEFAULT_NUM_CARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_geometry() {
        let cfg = SimConfig::new(5, 2).unwrap();
        assert_eq!(cfg.num_floors, 5);
        assert_eq!(cfg.num_cars, 2);
    }

    #[test]
    fn rejects_zero_floors() {
        assert!(SimConfig::new(0, 1).is_err());
    }

    #[test]
    fn rejects_zero_cars() {
        assert!(SimConfig::new(4, 0).is_err());
    }

    #[test]
    fn rejects_more_cars_than_floors() {
        assert!(SimConfig::new(3, 4).is_err());
    }

    #[test]
    fn car_count_may_equal_floor_count() {
        assert!(SimConfig::new(3, 3).is_ok());
    }
}
