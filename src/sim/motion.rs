//! Travel and door-cycle timeline drivers.
//!
//! Each driver is a small spawned task that sleeps through one phase of a
//! car's journey and reports a discrete [`MotionEvent`] back to the
//! coordinator. The drivers never touch simulation state; every transition
//! they imply is applied by the coordinator when the event is consumed.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;

use crate::config;
use crate::messaging::MotionEvent;
use crate::print;

/// Travel time between two floors: two time-units per floor of distance.
pub fn travel_time(from: u8, to: u8) -> Duration {
    config::FLOOR_TRAVEL_TIME * u32::from(from.abs_diff(to))
}

/// Drives one travel leg: suspends for the travel duration, then reports
/// arrival. A zero-distance leg arrives immediately but still goes through
/// the full arrival path, door cycle included.
pub(crate) async fn run_travel(car_id: u8, from: u8, to: u8, motion_tx: mpsc::Sender<MotionEvent>) {
    sleep(travel_time(from, to)).await;
    let _ = motion_tx.send(MotionEvent::Arrived { car_id }).await;
}

/// Drives one door cycle after arrival: the open phase elapses on the
/// core's clock, the close is complete when the presentation layer acks.
pub(crate) async fn run_door_cycle(
    car_id: u8,
    done_rx: oneshot::Receiver<()>,
    motion_tx: mpsc::Sender<MotionEvent>,
) {
    sleep(config::DOOR_PHASE_TIME).await;
    let _ = motion_tx.send(MotionEvent::DoorOpened { car_id }).await;
    let _ = done_rx.await;
    let _ = motion_tx.send(MotionEvent::Settled { car_id }).await;
}

/// Observes the ack of a reminder door cycle. Reminders run on a parked
/// car and change no state, so completion is only logged.
pub(crate) async fn watch_reminder(car_id: u8, done_rx: oneshot::Receiver<()>) {
    if done_rx.await.is_ok() {
        print::info(format!("Car {} finished its reminder door cycle", car_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_time_is_two_units_per_floor() {
        assert_eq!(travel_time(0, 3), Duration::from_secs(6));
        assert_eq!(travel_time(3, 0), Duration::from_secs(6));
        assert_eq!(travel_time(2, 3), Duration::from_secs(2));
    }

    #[test]
    fn zero_distance_travel_takes_no_time() {
        assert_eq!(travel_time(4, 4), Duration::ZERO);
    }
}
