/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::floor_index;
use crate::shared::{Passenger, N_FLOORS};

/**
 * Passengers waiting on each floor, in arrival order.
 *
 * `waiting` is the sum of the per-floor counts. Both are kept as explicit
 * counters so status reads do not have to walk the buckets.
 */
#[derive(Debug, Clone)]
pub struct FloorQueue {
    floors: Vec<VecDeque<Passenger>>,
    floor_size: [usize; N_FLOORS],
    waiting: usize,
}

impl FloorQueue {
    pub fn new() -> FloorQueue {
        FloorQueue {
            floors: vec![VecDeque::new(); N_FLOORS],
            floor_size: [0; N_FLOORS],
            waiting: 0,
        }
    }

    pub fn push(&mut self, passenger: Passenger) {
        let index = floor_index(passenger.origin());
        self.floors[index].push_back(passenger);
        self.floor_size[index] += 1;
        self.waiting += 1;
    }

    pub fn waiting(&self) -> usize {
        self.waiting
    }

    pub fn is_empty(&self) -> bool {
        self.waiting == 0
    }

    /// # Panics
    /// If `floor` is outside `MIN_FLOOR..=MAX_FLOOR`.
    pub fn waiting_on(&self, floor: u8) -> usize {
        self.floor_size[floor_index(floor)]
    }

    pub fn passengers_on(&self, floor: u8) -> impl Iterator<Item = &Passenger> {
        self.floors[floor_index(floor)].iter()
    }

    /// Sum of capacity units waiting on a floor.
    pub fn capacity_on(&self, floor: u8) -> u32 {
        self.passengers_on(floor).map(Passenger::capacity_units).sum()
    }

    pub fn weight_on(&self, floor: u8) -> u32 {
        self.passengers_on(floor).map(Passenger::weight_units).sum()
    }

    /// Hands the bucket of a floor over to the caller, leaving it empty.
    /// Counts are left alone; give back what was not taken with `restore`.
    pub(crate) fn take_floor(&mut self, floor: u8) -> VecDeque<Passenger> {
        std::mem::take(&mut self.floors[floor_index(floor)])
    }

    /// Puts the remaining passengers back and accounts for the `removed` ones.
    pub(crate) fn restore(&mut self, floor: u8, remaining: VecDeque<Passenger>, removed: usize) {
        let index = floor_index(floor);
        self.floors[index] = remaining;
        self.floor_size[index] -= removed;
        self.waiting -= removed;
    }
}

impl Default for FloorQueue {
    fn default() -> Self {
        FloorQueue::new()
    }
}
