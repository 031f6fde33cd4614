pub mod error;
pub mod macros;
pub mod structs;

pub use error::status_code;
pub use error::EngineError;
pub use structs::Mode;
pub use structs::Passenger;
pub use structs::PassengerKind;
pub use structs::{MAX_CAPACITY, MAX_FLOOR, MAX_WEIGHT, MIN_FLOOR, N_FLOORS};
