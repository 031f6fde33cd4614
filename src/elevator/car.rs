/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::queue::FloorQueue;
use crate::shared::structs::floor_index;
use crate::shared::{Mode, Passenger, MAX_CAPACITY, MAX_FLOOR, MAX_WEIGHT, MIN_FLOOR, N_FLOORS};

/**
 * State of the elevator car.
 *
 * Onboard passengers are bucketed by destination floor so that unloading a
 * floor is a single drain of one bucket.
 *
 * # Fields
 * - `mode`:            What the car is doing right now.
 * - `prev_mode`:       Mode to resume once `Loading` is done.
 * - `current_floor`:   Floor the car is at.
 * - `target_floor`:    Floor the car is heading to, at most one floor away.
 * - `capacity`:        Onboard capacity units, never above `MAX_CAPACITY`.
 * - `weight`:          Onboard weight units, never above `MAX_WEIGHT`.
 * - `onboard`:         Number of passengers in the car.
 * - `serviced`:        Passengers delivered to each floor since start.
 * - `stop_requested`:  Set by a stop command, observed by the worker loop.
 */
#[derive(Debug, Clone)]
pub struct Car {
    pub(crate) mode: Mode,
    pub(crate) prev_mode: Mode,
    pub(crate) current_floor: u8,
    pub(crate) target_floor: u8,
    pub(crate) capacity: u32,
    pub(crate) weight: u32,
    pub(crate) onboard: usize,
    pub(crate) serviced: [u32; N_FLOORS],
    pub(crate) stop_requested: bool,
    destinations: Vec<Vec<Passenger>>,
}

impl Car {
    pub fn new() -> Car {
        Car {
            mode: Mode::Offline,
            prev_mode: Mode::Offline,
            current_floor: MIN_FLOOR,
            target_floor: MIN_FLOOR,
            capacity: 0,
            weight: 0,
            onboard: 0,
            serviced: [0; N_FLOORS],
            stop_requested: false,
            destinations: vec![Vec::new(); N_FLOORS],
        }
    }

    /// Puts the car back at the bottom floor, empty, idle and with all
    /// counters cleared.
    pub fn reset(&mut self) {
        *self = Car {
            mode: Mode::Idle,
            prev_mode: Mode::Idle,
            ..Car::new()
        };
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn target_floor(&self) -> u8 {
        self.target_floor
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn onboard(&self) -> usize {
        self.onboard
    }

    /// Passengers delivered to `floor` since the last start.
    ///
    /// # Panics
    /// If `floor` is outside `MIN_FLOOR..=MAX_FLOOR`.
    pub fn serviced(&self, floor: u8) -> u32 {
        self.serviced[floor_index(floor)]
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    fn at_max(&self) -> bool {
        self.capacity == MAX_CAPACITY || self.weight == MAX_WEIGHT
    }

    /// Whether `passenger` may board right now.
    ///
    /// The bottom floor counts as going up and the top floor as going down,
    /// whatever the current mode is.
    pub fn loadable(&self, passenger: &Passenger) -> bool {
        if passenger.weight_units() > MAX_WEIGHT - self.weight {
            return false;
        }
        if passenger.capacity_units() > MAX_CAPACITY - self.capacity {
            return false;
        }
        if passenger.origin() != self.current_floor {
            return false;
        }

        let going_up = self.mode == Mode::Ascending || self.current_floor == MIN_FLOOR;
        let going_down = self.mode == Mode::Descending || self.current_floor == MAX_FLOOR;

        (going_up && passenger.destination() > self.current_floor)
            || (going_down && passenger.destination() < self.current_floor)
    }

    /// Boards every admissible passenger waiting on the current floor, in
    /// arrival order, until the car is full. Returns the number boarded.
    ///
    /// A car with a pending stop boards nobody.
    pub fn load(&mut self, queue: &mut FloorQueue) -> usize {
        if self.stop_requested {
            return 0;
        }

        let floor = self.current_floor;
        let mut waiting = queue.take_floor(floor).into_iter();
        let mut remaining = VecDeque::with_capacity(waiting.len());
        let mut counter = 0;

        for passenger in waiting.by_ref() {
            if self.loadable(&passenger) {
                self.board(passenger);
                counter += 1;
            } else {
                remaining.push_back(passenger);
            }

            if self.at_max() {
                break;
            }
        }

        remaining.extend(waiting);
        queue.restore(floor, remaining, counter);
        counter
    }

    fn board(&mut self, passenger: Passenger) {
        self.onboard += 1;
        self.capacity += passenger.capacity_units();
        self.weight += passenger.weight_units();
        self.destinations[floor_index(passenger.destination())].push(passenger);
    }

    /// Lets off everyone bound for the current floor and credits the floor
    /// with the delivered passengers. Returns the number unloaded.
    pub fn unload(&mut self) -> usize {
        let index = floor_index(self.current_floor);
        let arrived = std::mem::take(&mut self.destinations[index]);

        for passenger in &arrived {
            self.onboard -= 1;
            self.capacity -= passenger.capacity_units();
            self.weight -= passenger.weight_units();
        }

        self.serviced[index] += arrived.len() as u32;
        arrived.len()
    }

    /// Enters `Loading`, remembering the mode to resume afterwards.
    pub fn begin_loading(&mut self) {
        if self.mode != Mode::Loading {
            self.prev_mode = self.mode;
        }
        self.mode = Mode::Loading;
    }

    /// Moves the target one floor along the current sweep, reversing only at
    /// the bottom and top floors.
    ///
    /// `waiting` is the number of passengers queued on any floor. An idle car
    /// starts sweeping upwards as soon as there is anyone waiting or onboard.
    pub fn next_floor(&mut self, waiting: usize) {
        match self.mode {
            Mode::Descending => {
                if self.current_floor > MIN_FLOOR {
                    self.target_floor = self.current_floor - 1;
                } else {
                    self.mode = Mode::Ascending;
                    self.target_floor = self.current_floor + 1;
                }
            }
            Mode::Ascending => {
                if self.current_floor < MAX_FLOOR {
                    self.target_floor = self.current_floor + 1;
                } else {
                    self.mode = Mode::Descending;
                    self.target_floor = self.current_floor - 1;
                }
            }
            Mode::Idle => {
                if waiting > 0 || self.onboard > 0 {
                    self.mode = Mode::Ascending;
                }
            }
            Mode::Loading => {
                self.mode = self.prev_mode;
                if self.mode == Mode::Idle && (waiting > 0 || self.onboard > 0) {
                    self.mode = Mode::Ascending;
                }
            }
            Mode::Offline => {}
        }
    }

    /// Commits the move to the target floor.
    pub fn arrive(&mut self) {
        self.current_floor = self.target_floor;
    }
}

impl Default for Car {
    fn default() -> Self {
        Car::new()
    }
}
