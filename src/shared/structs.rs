/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::EngineError;

/***************************************/
/*             Constants               */
/***************************************/
pub const MIN_FLOOR: u8 = 1;
pub const MAX_FLOOR: u8 = 10;
pub const N_FLOORS: usize = MAX_FLOOR as usize;
pub const MAX_CAPACITY: u32 = 10;
pub const MAX_WEIGHT: u32 = 150;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[serde(rename = "offline")]
    Offline,
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "loading")]
    Loading,
    #[serde(rename = "up")]
    Ascending,
    #[serde(rename = "down")]
    Descending,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Offline => "OFFLINE",
            Mode::Idle => "IDLE",
            Mode::Loading => "LOADING",
            Mode::Ascending => "UP",
            Mode::Descending => "DOWN",
        };
        write!(f, "{}", name)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PassengerKind {
    Adult,
    Child,
    RoomService,
    Bellhop,
}

impl PassengerKind {
    /// Capacity units taken by a passenger of this kind.
    pub fn capacity_units(&self) -> u32 {
        match *self {
            PassengerKind::Adult | PassengerKind::Child => 1,
            PassengerKind::RoomService | PassengerKind::Bellhop => 2,
        }
    }

    pub fn weight_units(&self) -> u32 {
        match *self {
            PassengerKind::Adult => 10,
            PassengerKind::Child => 5,
            PassengerKind::RoomService => 20,
            PassengerKind::Bellhop => 40,
        }
    }
}

impl TryFrom<i32> for PassengerKind {
    type Error = EngineError;

    fn try_from(item: i32) -> Result<Self, Self::Error> {
        match item {
            1 => Ok(PassengerKind::Adult),
            2 => Ok(PassengerKind::Child),
            3 => Ok(PassengerKind::RoomService),
            4 => Ok(PassengerKind::Bellhop),
            other => Err(EngineError::InvalidPassengerKind(other)),
        }
    }
}

/// A single rider. Never changes after creation; moved from the floor queue
/// into the car and dropped once delivered. Only `Passenger::new` builds one,
/// so both floors are always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    kind: PassengerKind,
    origin: u8,
    destination: u8,
}

impl Passenger {
    pub fn new(kind: PassengerKind, origin: u8, destination: u8) -> Result<Passenger, EngineError> {
        let origin = validate_floor(origin as i32)?;
        let destination = validate_floor(destination as i32)?;
        if origin == destination {
            return Err(EngineError::SameFloor(origin));
        }

        Ok(Passenger {
            kind,
            origin,
            destination,
        })
    }

    pub fn kind(&self) -> PassengerKind {
        self.kind
    }

    pub fn origin(&self) -> u8 {
        self.origin
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn capacity_units(&self) -> u32 {
        self.kind.capacity_units()
    }

    pub fn weight_units(&self) -> u32 {
        self.kind.weight_units()
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn validate_floor(floor: i32) -> Result<u8, EngineError> {
    if floor < MIN_FLOOR as i32 || floor > MAX_FLOOR as i32 {
        return Err(EngineError::FloorOutOfRange(floor));
    }
    Ok(floor as u8)
}

/// Bucket index of a floor in the per-floor arrays.
///
/// # Panics
/// If `floor` is below `MIN_FLOOR`.
pub fn floor_index(floor: u8) -> usize {
    (floor - MIN_FLOOR) as usize
}
