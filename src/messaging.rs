//! Typed events and channel bundles connecting the simulation core to its
//! collaborators.
//!
//! The core owns all state; collaborators talk to it over channels:
//! - presses flow in on an mpsc channel of [`Press`],
//! - presentation notifications flow out on an mpsc channel of [`UiEvent`],
//! - full state snapshots are published on a watch channel,
//! - motion drivers report back on a crate-internal mpsc channel of
//!   [`MotionEvent`].

use tokio::sync::{mpsc, oneshot, watch};

use crate::sim_state::{CallKind, SimulationState};

/// One floor-button press on its way into the core.
#[derive(Debug, Clone, Copy)]
pub struct Press {
    /// The pressed floor.
    pub floor: u8,
    /// Which button was pressed.
    pub kind: CallKind,
}

/// Notifications from the core to the presentation layer.
#[derive(Debug)]
pub enum UiEvent {
    /// A car settled at a floor. Fired once per arrival, after the car's
    /// position has been updated.
    CarPositionChanged {
        /// The car that arrived.
        car_id: u8,
        /// The floor it settled at.
        floor: u8,
    },
    /// The core asks the presentation layer to animate one door
    /// open-hold-close cycle. The receiver must send on `done` once its
    /// animation has completed; the core holds the car in its door states
    /// until then.
    DoorCycleRequested {
        /// The car whose doors should animate.
        car_id: u8,
        /// Completion ack, resolved by the presentation layer.
        done: oneshot::Sender<()>,
    },
}

/// Reports from the spawned motion drivers back to the coordinator. Every
/// state mutation they imply is applied by the coordinator, never by the
/// drivers themselves.
#[derive(Debug)]
pub(crate) enum MotionEvent {
    /// Travel finished; the car is at its target floor.
    Arrived {
        /// Reporting car.
        car_id: u8,
    },
    /// The door open phase elapsed.
    DoorOpened {
        /// Reporting car.
        car_id: u8,
    },
    /// The presentation ack arrived; the car is idle again.
    Settled {
        /// Reporting car.
        car_id: u8,
    },
}

/// The caller's side of a running simulation.
///
/// A plain bundle: the receivers are meant to be moved out and handed to
/// their designated tasks (renderer, observers), while clones of
/// `press_tx` go to the press sources.
#[derive(Debug)]
pub struct SimHandle {
    /// Press submission channel. Dropping every sender shuts the
    /// simulation down once the last car settles.
    pub press_tx: mpsc::Sender<Press>,
    /// Presentation notifications, see [`UiEvent`].
    pub ui_rx: mpsc::Receiver<UiEvent>,
    /// State snapshots, refreshed after every consumed event.
    pub state_rx: watch::Receiver<SimulationState>,
}

/// Submits one floor-button press. Returns `false` if the core has
/// already shut down.
pub async fn submit_request(press_tx: &mpsc::Sender<Press>, floor: u8, kind: CallKind) -> bool {
    press_tx.send(Press { floor, kind }).await.is_ok()
}
