//! Single-car elevator engine scheduling a SCAN sweep over ten floors.
//!
//! Build an [`ElevatorController`], `start` it, and feed it passengers with
//! `submit_request`. A worker thread moves the car and a
//! [`StatusSnapshot`] can be taken at any time.

/* Modules */
pub mod config;
pub mod elevator;
pub mod shared;

pub use elevator::{ElevatorController, ElevatorFSM, Shutdown, StatusSnapshot};
pub use shared::{EngineError, Mode, Passenger, PassengerKind};
