//! The coordinator: one task owning the whole [`SimulationState`].
//!
//! Presses and motion reports arrive over channels and are consumed one at
//! a time, so every mutation of the fleet, the queue and the occupancy
//! ledger happens at a well-defined, non-suspending instant. After each
//! consumed event a fresh snapshot is published on the state watch.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use super::dispatch::{self, DispatchStep};
use super::motion;
use crate::config::SimConfig;
use crate::messaging::{MotionEvent, Press, SimHandle, UiEvent};
use crate::print;
use crate::sim_state::{CarBehaviour, SimulationState};

/// Starts the simulation core on the current runtime.
///
/// Returns the caller's [`SimHandle`] and the join handle of the
/// coordinator task. The core runs until every press sender is dropped and
/// the last committed car has settled.
pub fn start(cfg: SimConfig) -> (SimHandle, JoinHandle<()>) {
    let state = SimulationState::new(&cfg);
    let (press_tx, press_rx) = mpsc::channel::<Press>(100);
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (state_tx, state_rx) = watch::channel(state.clone());

    let core = tokio::spawn(run(state, press_rx, ui_tx, state_tx));

    (
        SimHandle {
            press_tx,
            ui_rx,
            state_rx,
        },
        core,
    )
}

async fn run(
    mut state: SimulationState,
    mut press_rx: mpsc::Receiver<Press>,
    ui_tx: mpsc::Sender<UiEvent>,
    state_tx: watch::Sender<SimulationState>,
) {
    let (motion_tx, mut motion_rx) = mpsc::channel::<MotionEvent>(100);

    // Committed travel legs that have not settled yet.
    let mut in_flight: usize = 0;
    let mut presses_open = true;

    loop {
        if !presses_open && in_flight == 0 {
            break;
        }

        tokio::select! {
            maybe_press = press_rx.recv(), if presses_open => match maybe_press {
                Some(press) => {
                    handle_press(&mut state, press, &ui_tx, &motion_tx, &mut in_flight).await;
                }
                None => presses_open = false,
            },
            Some(event) = motion_rx.recv() => {
                handle_motion_event(&mut state, event, &ui_tx, &motion_tx, &mut in_flight).await;
            }
        }

        let _ = state_tx.send(state.clone());
    }

    print::info("Press source closed and all cars settled, core stopping".to_string());
}

/// Entry point for one floor-button press.
///
/// Presses on occupied floors never reach the queue: they trigger a
/// reminder door cycle on the car parked there, or nothing at all if the
/// occupying car is still in transit.
async fn handle_press(
    state: &mut SimulationState,
    press: Press,
    ui_tx: &mpsc::Sender<UiEvent>,
    motion_tx: &mpsc::Sender<MotionEvent>,
    in_flight: &mut usize,
) {
    if press.floor >= state.num_floors {
        print::warn(format!(
            "Press for floor {} is outside the building, ignored",
            press.floor
        ));
        return;
    }

    if state.is_occupied(press.floor) {
        print::info(format!(
            "Floor {} is already occupied, request ignored",
            press.floor
        ));
        if let Some(car_id) = state.idle_car_at(press.floor) {
            let (done_tx, done_rx) = oneshot::channel();
            let _ = ui_tx
                .send(UiEvent::DoorCycleRequested {
                    car_id,
                    done: done_tx,
                })
                .await;
            tokio::spawn(motion::watch_reminder(car_id, done_rx));
        }
        return;
    }

    let request = state.enqueue_press(press.floor, press.kind);
    print::info(format!(
        "{:?} press queued for floor {} (seq {})",
        request.kind, request.floor, request.seq
    ));
    drain_dispatch(state, motion_tx, in_flight);
}

async fn handle_motion_event(
    state: &mut SimulationState,
    event: MotionEvent,
    ui_tx: &mpsc::Sender<UiEvent>,
    motion_tx: &mpsc::Sender<MotionEvent>,
    in_flight: &mut usize,
) {
    match event {
        MotionEvent::Arrived { car_id } => {
            let floor = match state.car(car_id).target_floor {
                Some(floor) => floor,
                None => {
                    print::err(format!("Car {} arrived without a committed target", car_id));
                    return;
                }
            };
            let car = state.car_mut(car_id);
            car.current_floor = floor;
            car.behaviour = CarBehaviour::DoorOpening;

            let _ = ui_tx
                .send(UiEvent::CarPositionChanged { car_id, floor })
                .await;

            let (done_tx, done_rx) = oneshot::channel();
            let _ = ui_tx
                .send(UiEvent::DoorCycleRequested {
                    car_id,
                    done: done_tx,
                })
                .await;
            tokio::spawn(motion::run_door_cycle(car_id, done_rx, motion_tx.clone()));
        }
        MotionEvent::DoorOpened { car_id } => {
            state.car_mut(car_id).behaviour = CarBehaviour::DoorClosing;
        }
        MotionEvent::Settled { car_id } => {
            let car = state.car_mut(car_id);
            car.behaviour = CarBehaviour::Idle;
            car.target_floor = None;
            let floor = car.current_floor;
            *in_flight -= 1;
            print::ok(format!("Car {} is idle at floor {}", car_id, floor));

            // A newly idle car may unblock the queue head.
            drain_dispatch(state, motion_tx, in_flight);
        }
    }
}

/// Commits every currently-satisfiable queue head, oldest first, and
/// spawns a travel leg per commit. Stops at the first head that has to
/// wait for an idle car; the next settle retries it.
fn drain_dispatch(
    state: &mut SimulationState,
    motion_tx: &mpsc::Sender<MotionEvent>,
    in_flight: &mut usize,
) {
    loop {
        match dispatch::try_dispatch(state) {
            DispatchStep::Committed { car_id, from, to } => {
                *in_flight += 1;
                print::ok(format!(
                    "Car {} dispatched from floor {} to floor {}",
                    car_id, from, to
                ));
                tokio::spawn(motion::run_travel(car_id, from, to, motion_tx.clone()));
            }
            DispatchStep::Deferred => {
                print::info("No idle car available, head request deferred".to_string());
                break;
            }
            DispatchStep::QueueEmpty => break,
        }
    }
}
