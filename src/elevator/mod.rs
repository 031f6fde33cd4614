pub mod car;
pub mod controller;
pub mod fsm;
pub mod queue;
pub mod state;
pub mod status;

mod controller_tests;

pub use car::Car;
pub use controller::ElevatorController;
pub use fsm::{ElevatorFSM, Shutdown};
pub use queue::FloorQueue;
pub use state::SharedState;
pub use status::{FloorStatus, StatusSnapshot};
