/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::car::Car;
use crate::elevator::queue::FloorQueue;
use crate::shared::structs::floor_index;
use crate::shared::{Mode, MAX_FLOOR, MIN_FLOOR};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FloorStatus {
    pub floor: u8,
    pub waiting: usize,
    #[serde(rename = "passengerLoad")]
    pub capacity: u32,
    #[serde(rename = "weightLoad")]
    pub weight: u32,
    pub serviced: u32,
}

/// Point-in-time copy of the engine state, taken with both locks held.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub mode: Mode,
    #[serde(rename = "currentFloor")]
    pub current_floor: u8,
    #[serde(rename = "targetFloor")]
    pub target_floor: u8,
    #[serde(rename = "passengerLoad")]
    pub capacity: u32,
    #[serde(rename = "weightLoad")]
    pub weight: u32,
    pub onboard: usize,
    #[serde(rename = "stopRequested")]
    pub stop_requested: bool,
    pub waiting: usize,
    /// Ordered from the bottom floor up.
    pub floors: Vec<FloorStatus>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl StatusSnapshot {
    pub fn capture(car: &Car, queue: &FloorQueue) -> StatusSnapshot {
        let floors = (MIN_FLOOR..=MAX_FLOOR)
            .map(|floor| FloorStatus {
                floor,
                waiting: queue.waiting_on(floor),
                capacity: queue.capacity_on(floor),
                weight: queue.weight_on(floor),
                serviced: car.serviced(floor),
            })
            .collect();

        StatusSnapshot {
            mode: car.mode(),
            current_floor: car.current_floor(),
            target_floor: car.target_floor(),
            capacity: car.capacity(),
            weight: car.weight(),
            onboard: car.onboard(),
            stop_requested: car.stop_requested(),
            waiting: queue.waiting(),
            floors,
        }
    }

    /// Status of a single floor.
    ///
    /// # Panics
    /// If `floor` is outside `MIN_FLOOR..=MAX_FLOOR`.
    pub fn floor(&self, floor: u8) -> &FloorStatus {
        &self.floors[floor_index(floor)]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Weight units are tenths, printed as a decimal.
struct Weight(u32);

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevator state: {}", self.mode)?;
        writeln!(f, "Current floor: {}", self.current_floor)?;
        writeln!(f, "Destination floor: {}", self.target_floor)?;
        writeln!(f, "Current passenger load: {}", self.capacity)?;
        writeln!(f, "Current weight load: {}", Weight(self.weight))?;
        writeln!(f, "*********************************************")?;

        for floor in self.floors.iter().rev() {
            writeln!(f, "Floor {}:", floor.floor)?;
            writeln!(f, "\tPassenger load: {}", floor.capacity)?;
            writeln!(f, "\tWeight load: {}", Weight(floor.weight))?;
            writeln!(f, "\tPassengers serviced: {}", floor.serviced)?;
        }

        Ok(())
    }
}
