//! Console renderer.
//!
//! The only module that presents car movement to the user. It subscribes
//! to the core's [`UiEvent`] stream, prints arrivals and door activity,
//! and answers every door-cycle request after the open+close animation
//! time has elapsed. The core never prints movement itself.

use tokio::sync::{mpsc, watch};
use tokio::time::sleep;

use crate::config;
use crate::messaging::UiEvent;
use crate::print;
use crate::sim_state::SimulationState;

/// Runs until the core drops its event sender.
///
/// Door animations are spawned so a cycle on one car never delays events
/// from the others.
pub async fn run_console(
    mut ui_rx: mpsc::Receiver<UiEvent>,
    state_rx: watch::Receiver<SimulationState>,
) {
    while let Some(event) = ui_rx.recv().await {
        match event {
            UiEvent::CarPositionChanged { car_id, floor } => {
                print::ok(format!("Car {} arrived at floor {}", car_id, floor));
                print::fleet(&state_rx.borrow());
            }
            UiEvent::DoorCycleRequested { car_id, done } => {
                print::info(format!("Car {} doors opening", car_id));
                tokio::spawn(async move {
                    sleep(config::DOOR_CYCLE_TIME).await;
                    print::info(format!("Car {} doors closed", car_id));
                    let _ = done.send(());
                });
            }
        }
    }
}
