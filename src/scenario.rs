//! Scripted scenario playback.
//!
//! A scenario is a JSON file listing timed presses, replayed against the
//! core instead of interactive input:
//!
//! ```json
//! {
//!     "presses": [
//!         { "after_ms": 0, "floor": 3, "kind": "up" },
//!         { "after_ms": 1500, "floor": 1 }
//!     ]
//! }
//! ```
//!
//! `after_ms` is the delay before the press, relative to the previous
//! step; `kind` defaults to the plain call button.

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::messaging::Press;
use crate::print;
use crate::sim_state::CallKind;

/// One timed press in a scenario script.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PressStep {
    /// Delay before this press, relative to the previous step.
    #[serde(default)]
    pub after_ms: u64,
    /// The pressed floor.
    pub floor: u8,
    /// Which button is pressed. Defaults to the call button.
    #[serde(default)]
    pub kind: CallKind,
}

/// A full press script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// The presses, replayed in order.
    pub presses: Vec<PressStep>,
}

/// Loads a scenario script from disk.
pub fn load(path: &str) -> Result<Scenario> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read scenario file '{}'", path))?;
    serde_json::from_str(&text).with_context(|| format!("scenario file '{}' is not valid", path))
}

/// Replays the script against the core. Returns when the script is done
/// or the core has shut down; dropping `press_tx` afterwards lets the
/// simulation wind down.
pub async fn play(scenario: Scenario, press_tx: mpsc::Sender<Press>) {
    for step in scenario.presses {
        sleep(Duration::from_millis(step.after_ms)).await;
        let press = Press {
            floor: step.floor,
            kind: step.kind,
        };
        if press_tx.send(press).await.is_err() {
            return;
        }
    }
    print::info("Scenario script finished".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_script_with_defaults() {
        let scenario: Scenario = serde_json::from_str(
            r#"{ "presses": [
                { "after_ms": 0, "floor": 3, "kind": "up" },
                { "floor": 1 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(scenario.presses.len(), 2);
        assert_eq!(scenario.presses[0].kind, CallKind::Up);
        assert_eq!(scenario.presses[1].after_ms, 0);
        assert_eq!(scenario.presses[1].kind, CallKind::Call);
    }

    #[test]
    fn rejects_malformed_scripts() {
        assert!(serde_json::from_str::<Scenario>(r#"{ "presses": [{ "kind": "up" }] }"#).is_err());
    }
}
