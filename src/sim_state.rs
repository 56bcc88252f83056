//! ## Simulation State Module
//!
//! This module defines the central data structures of the lift bank: the
//! [`Car`] fleet, the FIFO [`Request`] queue and the per-floor occupancy
//! ledger, all owned by a single [`SimulationState`] value.
//!
//! ### Key Responsibilities:
//! - **Defining Core Structs**: `Car`, `Request` and `SimulationState`.
//! - **Behaviour Tracking**: The [`CarBehaviour`] enum describes where in
//!   its travel/door lifecycle each car is.
//! - **Occupancy Ledger**: An exclusive boolean lock per floor, used as a
//!   gate by the dispatcher, never as a queue.
//! - **Request Queue**: Strict arrival-order queueing of button presses.
//!
//! The state is only ever mutated by the coordinator task; everything else
//! observes it through cloned snapshots.

use std::collections::VecDeque;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// The lifecycle position of a car.
///
/// A car walks `Idle → Traveling → DoorOpening → DoorClosing → Idle` and
/// never skips a state. It only accepts a new target while `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarBehaviour {
    /// Parked at `current_floor`, available for dispatch.
    Idle,
    /// Underway to `target_floor`.
    Traveling,
    /// Settled at the target floor, doors opening.
    DoorOpening,
    /// Doors closing, waiting for the presentation ack.
    DoorClosing,
}

/// The kind of button behind a press.
///
/// Direction is not used for routing; every kind just summons a car to the
/// pressed floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    /// The single ground-floor call button.
    Call,
    /// An up button.
    Up,
    /// A down button.
    Down,
}

impl Default for CallKind {
    fn default() -> Self {
        CallKind::Call
    }
}

impl FromStr for CallKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(CallKind::Call),
            "up" => Ok(CallKind::Up),
            "down" => Ok(CallKind::Down),
            _ => Err(()),
        }
    }
}

/// One call-button press awaiting a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The floor the press came from.
    pub floor: u8,
    /// Which button was pressed.
    pub kind: CallKind,
    /// Monotonic creation order, assigned at enqueue time.
    pub seq: u64,
}

/// One lift car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Fleet index, unique and immutable.
    pub id: u8,
    /// The last floor the car settled at (or is leaving).
    pub current_floor: u8,
    /// The committed destination. `None` whenever the car is idle.
    pub target_floor: Option<u8>,
    /// Lifecycle position, see [`CarBehaviour`].
    pub behaviour: CarBehaviour,
}

impl Car {
    fn new(id: u8) -> Self {
        Self {
            id,
            current_floor: 0,
            target_floor: None,
            behaviour: CarBehaviour::Idle,
        }
    }

    /// True from dispatch commit until the door cycle has completed.
    pub fn is_moving(&self) -> bool {
        self.behaviour != CarBehaviour::Idle
    }
}

/// The full state of the lift bank.
///
/// Owned by the coordinator; the dispatcher and the motion event handlers
/// receive it by reference. Snapshots are published on a watch channel for
/// the renderer and for tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Number of floors, indexed `0..num_floors`.
    pub num_floors: u8,
    /// The car fleet, indexed by car id.
    pub cars: Vec<Car>,
    /// Pending presses in strict arrival order.
    pub queue: VecDeque<Request>,
    /// Occupancy ledger: `true` means a car is assigned to or parked at the
    /// floor.
    pub occupancy: Vec<bool>,
    /// Source of the monotonic press sequence numbers.
    press_seq: u64,
}

impl SimulationState {
    /// Builds the initial state: all cars idle on floor 0, empty queue,
    /// every floor unoccupied.
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            num_floors: cfg.num_floors,
            cars: (0..cfg.num_cars).map(Car::new).collect(),
            queue: VecDeque::new(),
            occupancy: vec![false; cfg.num_floors as usize],
            press_seq: 0,
        }
    }

    /// Ledger read: is a car assigned to or parked at `floor`?
    pub fn is_occupied(&self, floor: u8) -> bool {
        self.occupancy[floor as usize]
    }

    /// Ledger write. The stored bit is the only effect.
    pub fn set_occupied(&mut self, floor: u8, occupied: bool) {
        self.occupancy[floor as usize] = occupied;
    }

    /// Appends a press to the queue and returns the created request.
    ///
    /// No deduplication happens here; rejecting presses on occupied floors
    /// is the coordinator's job, before this is called.
    pub fn enqueue_press(&mut self, floor: u8, kind: CallKind) -> Request {
        let request = Request {
            floor,
            kind,
            seq: self.press_seq,
        };
        self.press_seq += 1;
        self.queue.push_back(request);
        request
    }

    /// The earliest pending request, without removing it.
    pub fn peek_request(&self) -> Option<&Request> {
        self.queue.front()
    }

    /// Removes and returns the earliest pending request.
    pub fn pop_request(&mut self) -> Option<Request> {
        self.queue.pop_front()
    }

    /// First idle car parked at `floor`, if any. Used for the reminder
    /// door cycle on occupied-floor presses.
    pub fn idle_car_at(&self, floor: u8) -> Option<u8> {
        self.cars
            .iter()
            .find(|car| car.current_floor == floor && !car.is_moving())
            .map(|car| car.id)
    }

    /// Shared access to a car by id.
    pub fn car(&self, car_id: u8) -> &Car {
        &self.cars[car_id as usize]
    }

    /// Mutable access to a car by id.
    pub fn car_mut(&mut self, car_id: u8) -> &mut Car {
        &mut self.cars[car_id as usize]
    }

    /// True when every car is idle and nothing is queued.
    pub fn is_settled(&self) -> bool {
        self.queue.is_empty() && self.cars.iter().all(|car| !car.is_moving())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(floors: u8, cars: u8) -> SimulationState {
        SimulationState::new(&SimConfig::new(floors, cars).unwrap())
    }

    #[test]
    fn initial_fleet_is_idle_on_ground_floor() {
        let state = state(5, 3);
        assert_eq!(state.cars.len(), 3);
        for (i, car) in state.cars.iter().enumerate() {
            assert_eq!(car.id, i as u8);
            assert_eq!(car.current_floor, 0);
            assert_eq!(car.target_floor, None);
            assert!(!car.is_moving());
        }
        assert!(state.queue.is_empty());
        assert!(!state.occupancy.iter().any(|&b| b));
    }

    #[test]
    fn ledger_stores_exactly_the_written_bit() {
        let mut state = state(4, 1);
        assert!(!state.is_occupied(2));
        state.set_occupied(2, true);
        assert!(state.is_occupied(2));
        assert!(!state.is_occupied(1));
        state.set_occupied(2, false);
        assert!(!state.is_occupied(2));
    }

    #[test]
    fn presses_queue_in_arrival_order_with_monotonic_seq() {
        let mut state = state(5, 1);
        let a = state.enqueue_press(3, CallKind::Up);
        let b = state.enqueue_press(3, CallKind::Up);
        let c = state.enqueue_press(1, CallKind::Down);
        assert!(a.seq < b.seq && b.seq < c.seq);
        assert_eq!(state.pop_request(), Some(a));
        assert_eq!(state.peek_request(), Some(&b));
        assert_eq!(state.pop_request(), Some(b));
        assert_eq!(state.pop_request(), Some(c));
        assert_eq!(state.pop_request(), None);
    }

    #[test]
    fn idle_car_lookup_skips_moving_cars() {
        let mut state = state(5, 2);
        state.car_mut(0).current_floor = 3;
        state.car_mut(0).behaviour = CarBehaviour::Traveling;
        state.car_mut(1).current_floor = 3;
        assert_eq!(state.idle_car_at(3), Some(1));
        state.car_mut(1).behaviour = CarBehaviour::DoorOpening;
        assert_eq!(state.idle_car_at(3), None);
    }

    #[test]
    fn call_kind_parses_button_names() {
        assert_eq!("up".parse(), Ok(CallKind::Up));
        assert_eq!("down".parse(), Ok(CallKind::Down));
        assert_eq!("call".parse(), Ok(CallKind::Call));
        assert!("sideways".parse::<CallKind>().is_err());
    }
}
