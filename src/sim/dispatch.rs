//! Request-to-car assignment.
//!
//! The dispatcher looks at the head of the request queue and tries to
//! commit it to the nearest idle car. Stale heads (floors that became
//! occupied after enqueueing) are dropped on the way. Nothing here can
//! fail: a head that cannot be served yet is simply left in place.

use crate::sim_state::{CarBehaviour, SimulationState};

/// Outcome of one [`try_dispatch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStep {
    /// The head request was committed to a car; a travel leg must be
    /// started for it.
    Committed {
        /// The assigned car.
        car_id: u8,
        /// The floor the car is leaving.
        from: u8,
        /// The committed destination.
        to: u8,
    },
    /// A head request is pending but no car is idle. Retry after the next
    /// state change.
    Deferred,
    /// Nothing left to dispatch.
    QueueEmpty,
}

/// The idle car closest to `target` by absolute floor distance.
///
/// Ties go to the first car in fleet order, which keeps assignment
/// deterministic.
pub fn nearest_idle_car(state: &SimulationState, target: u8) -> Option<u8> {
    let mut nearest: Option<u8> = None;
    let mut min_distance = u8::MAX;

    for car in &state.cars {
        if car.is_moving() {
            continue;
        }
        let distance = car.current_floor.abs_diff(target);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(car.id);
        }
    }
    nearest
}

/// Advances the queue by at most one commit.
///
/// Walks the queue head: requests whose floor has become occupied since
/// they were enqueued are discarded, the first live head is matched against
/// the fleet. On a match the request is dequeued and the assignment is
/// committed: the target floor is locked in the ledger, the car's pre-move
/// floor is freed, and the car leaves `Idle`. The caller starts the actual
/// travel leg.
pub fn try_dispatch(state: &mut SimulationState) -> DispatchStep {
    loop {
        let request = match state.peek_request() {
            Some(request) => *request,
            None => return DispatchStep::QueueEmpty,
        };

        // Stale head: the floor was claimed by an earlier commit.
        if state.is_occupied(request.floor) {
            state.pop_request();
            continue;
        }

        let car_id = match nearest_idle_car(state, request.floor) {
            Some(car_id) => car_id,
            None => return DispatchStep::Deferred,
        };

        state.pop_request();

        let from = state.car(car_id).current_floor;
        let to = request.floor;

        // Target locked before the origin is freed. For a zero-distance
        // trip the second write wins and the floor stays free.
        state.set_occupied(to, true);
        state.set_occupied(from, false);

        let car = state.car_mut(car_id);
        car.target_floor = Some(to);
        car.behaviour = CarBehaviour::Traveling;

        return DispatchStep::Committed { car_id, from, to };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim_state::CallKind;

    fn state(floors: u8, cars: u8) -> SimulationState {
        SimulationState::new(&SimConfig::new(floors, cars).unwrap())
    }

    #[test]
    fn nearest_car_tie_breaks_in_fleet_order() {
        // Both cars are at distance 1 from floor 1; car 0 must win.
        let mut state = state(3, 2);
        state.enqueue_press(1, CallKind::Up);
        match try_dispatch(&mut state) {
            DispatchStep::Committed { car_id, from, to } => {
                assert_eq!(car_id, 0);
                assert_eq!(from, 0);
                assert_eq!(to, 1);
            }
            other => panic!("expected a commit, got {:?}", other),
        }
    }

    #[test]
    fn nearest_car_wins_over_farther_idle_cars() {
        let mut state = state(10, 2);
        state.car_mut(1).current_floor = 8;
        state.enqueue_press(7, CallKind::Down);
        match try_dispatch(&mut state) {
            DispatchStep::Committed { car_id, .. } => assert_eq!(car_id, 1),
            other => panic!("expected a commit, got {:?}", other),
        }
    }

    #[test]
    fn queue_head_is_served_before_a_nearer_later_request() {
        // The older request wins even though the younger one is closer.
        let mut state = state(10, 1);
        state.enqueue_press(9, CallKind::Down);
        state.enqueue_press(1, CallKind::Up);
        match try_dispatch(&mut state) {
            DispatchStep::Committed { to, .. } => assert_eq!(to, 9),
            other => panic!("expected a commit, got {:?}", other),
        }
        assert_eq!(state.queue.len(), 1);
        assert_eq!(state.peek_request().unwrap().floor, 1);
    }

    #[test]
    fn commit_locks_target_and_frees_origin() {
        let mut state = state(5, 1);
        state.car_mut(0).current_floor = 2;
        state.set_occupied(2, true);
        state.enqueue_press(4, CallKind::Up);
        assert!(matches!(
            try_dispatch(&mut state),
            DispatchStep::Committed { .. }
        ));
        assert!(state.is_occupied(4));
        assert!(!state.is_occupied(2));
        let car = state.car(0);
        assert_eq!(car.target_floor, Some(4));
        assert_eq!(car.behaviour, CarBehaviour::Traveling);
    }

    #[test]
    fn zero_distance_commit_leaves_the_floor_free() {
        // Matches the assignment-time occupancy semantics: the target bit
        // is written first, then the origin bit is cleared, and for a
        // same-floor trip the clear wins.
        let mut state = state(5, 1);
        state.enqueue_press(0, CallKind::Call);
        assert!(matches!(
            try_dispatch(&mut state),
            DispatchStep::Committed { car_id: 0, from: 0, to: 0 }
        ));
        assert!(!state.is_occupied(0));
    }

    #[test]
    fn defers_when_no_car_is_idle() {
        let mut state = state(5, 1);
        state.car_mut(0).behaviour = CarBehaviour::Traveling;
        state.enqueue_press(3, CallKind::Up);
        assert_eq!(try_dispatch(&mut state), DispatchStep::Deferred);
        // The head stays queued for the next attempt.
        assert_eq!(state.queue.len(), 1);
    }

    #[test]
    fn stale_heads_are_dropped_not_dispatched() {
        // Two presses on the same floor, queued before any dispatch ran.
        // The first commit occupies the floor; the second request must be
        // discarded, not handed to the second car.
        let mut state = state(5, 2);
        state.enqueue_press(4, CallKind::Up);
        state.enqueue_press(4, CallKind::Up);
        assert!(matches!(
            try_dispatch(&mut state),
            DispatchStep::Committed { car_id: 0, .. }
        ));
        assert_eq!(state.queue.len(), 1);
        assert_eq!(try_dispatch(&mut state), DispatchStep::QueueEmpty);
        assert!(state.queue.is_empty());
        assert!(!state.car(1).is_moving());
    }

    #[test]
    fn empty_queue_is_reported_as_such() {
        let mut state = state(5, 1);
        assert_eq!(try_dispatch(&mut state), DispatchStep::QueueEmpty);
    }
}
