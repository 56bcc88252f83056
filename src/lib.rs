#![warn(missing_docs)]
//! # Lift bank simulation library
//!
//! This library simulates a small multi-car lift bank: floors issue call
//! requests, a dispatcher assigns the nearest idle car to the oldest pending
//! request, assigned cars travel and run a door cycle, and a per-floor
//! occupancy ledger prevents two cars from being sent to the same floor.
//!
//! ## Overview
//! - **Config**: Timing constants, fleet geometry and print gates.
//! - **Init**: Command-line parsing and configuration validation.
//! - **Print**: Color-coded terminal logging and the fleet status box.
//! - **Sim State**: The fleet, the request queue and the occupancy ledger.
//! - **Messaging**: Typed events and channel bundles between core, renderer
//!   and input sources.
//! - **Sim**: The coordinator event loop, the dispatcher and the motion
//!   drivers.
//! - **Render**: Console presentation of car arrivals and door cycles.
//! - **Input**: Interactive stdin presses bridged into the async core.
//! - **Scenario**: Scripted press playback from JSON files.

/// Global parameters and the validated simulation configuration
pub mod config;

/// Command-line parsing and startup validation
pub mod init;

/// Print functions with color coding
pub mod print;

/// Central simulation state: cars, request queue, occupancy ledger
pub mod sim_state;

/// Events and channel bundles connecting the core to its collaborators
pub mod messaging;

/// The simulation core.
pub mod sim {
    /// Coordinator task owning the simulation state.
    mod coordinator;
    /// Request-to-car assignment.
    pub mod dispatch;
    /// Travel and door-cycle timeline drivers.
    pub mod motion;

    pub use self::coordinator::start;
}

/// Console renderer for the simulation's presentation events
pub mod render;

/// Interactive floor-button input from stdin
pub mod input;

/// Scripted scenario playback
pub mod scenario;
