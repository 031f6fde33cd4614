/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidPassengerKind(i32),
    FloorOutOfRange(i32),
    SameFloor(u8),
    AlreadyRunning,
    AlreadyStopping,
    SpawnFailed(String),
}

impl EngineError {
    /// Integer status handed back through the request and command surface.
    pub fn code(&self) -> i32 {
        match self {
            EngineError::SpawnFailed(_) => -1,
            _ => 1,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, EngineError::AlreadyRunning | EngineError::AlreadyStopping)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPassengerKind(kind) => write!(f, "unknown passenger type {}", kind),
            EngineError::FloorOutOfRange(floor) => write!(f, "floor {} is out of range", floor),
            EngineError::SameFloor(floor) => {
                write!(f, "start and destination are both floor {}", floor)
            }
            EngineError::AlreadyRunning => write!(f, "elevator is already running"),
            EngineError::AlreadyStopping => write!(f, "elevator is already stopping"),
            EngineError::SpawnFailed(e) => write!(f, "failed to spawn elevator thread: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

/// Maps a command result to the integer status code.
pub fn status_code(result: &Result<(), EngineError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}
