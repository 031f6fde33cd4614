use crate::config::ElevatorConfig;
use crate::elevator::state::SharedState;
use crate::shared::Mode;
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/**
 * Worker loop driving the elevator car.
 *
 * The `ElevatorFSM` runs on its own thread. Every cycle it unloads and loads
 * passengers at the current floor, picks the next floor following a SCAN
 * sweep and moves there. Locks are only held for the bookkeeping; the door
 * and travel pauses happen with nothing locked so requests and status reads
 * go through while the car is busy.
 *
 * Once a stop is requested it stops boarding, delivers everyone still in the
 * car and goes `Offline`.
 *
 * # Fields
 * - `state`:           Car and floor queue shared with the controller.
 * - `terminate_rx`:    Forced stop. Checked between drain iterations.
 * - `door_open_time`:  Pause after anyone got on or off.
 * - `travel_time`:     Pause for moving one floor.
 */
pub struct ElevatorFSM {
    state: Arc<SharedState>,
    terminate_rx: cbc::Receiver<()>,
    door_open_time: Duration,
    travel_time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    Drained,
    Terminated,
}

impl ElevatorFSM {
    pub fn new(
        config: &ElevatorConfig,
        state: Arc<SharedState>,
        terminate_rx: cbc::Receiver<()>,
    ) -> ElevatorFSM {
        ElevatorFSM {
            state,
            terminate_rx,
            door_open_time: config.door_open_duration(),
            travel_time: config.travel_duration(),
        }
    }

    pub fn run(self) -> Shutdown {
        info!("Elevator thread started");

        while !self.state.lock_car().stop_requested() {
            self.cycle();
        }

        info!("Stop requested, delivering remaining passengers");
        let shutdown = self.drain();

        let mut car = self.state.lock_car();
        car.mode = Mode::Offline;
        match shutdown {
            Shutdown::Drained => info!("Elevator offline at floor {}", car.current_floor()),
            Shutdown::Terminated => warn!(
                "Elevator terminated at floor {} with {} passenger(s) onboard",
                car.current_floor(),
                car.onboard()
            ),
        }

        shutdown
    }

    fn cycle(&self) {
        if self.service_floor() > 0 {
            thread::sleep(self.door_open_time);
        }

        let (current, target) = self.choose_target();
        if current != target {
            thread::sleep(self.travel_time);
        }

        self.arrive();
    }

    /// Unload, then load, at the current floor. Enters `Loading` if anybody
    /// got on or off.
    fn service_floor(&self) -> usize {
        let (mut car, mut queue) = self.state.lock_both();

        let unloaded = car.unload();
        let loaded = car.load(&mut queue);

        if unloaded + loaded > 0 {
            debug!(
                "Floor {}: {} off, {} on, load {}/{}",
                car.current_floor(),
                unloaded,
                loaded,
                car.capacity(),
                car.weight()
            );
            car.begin_loading();
        }

        unloaded + loaded
    }

    fn choose_target(&self) -> (u8, u8) {
        let (mut car, queue) = self.state.lock_both();

        if !queue.is_empty() || !car.is_empty() {
            let before = car.mode();
            car.next_floor(queue.waiting());
            if car.mode() != before {
                debug!("Mode {} -> {}", before, car.mode());
            }
        } else if car.mode() != Mode::Idle {
            debug!("Nothing to do, going idle at floor {}", car.current_floor());
            car.mode = Mode::Idle;
        }

        (car.current_floor(), car.target_floor())
    }

    fn arrive(&self) {
        let mut car = self.state.lock_car();
        if car.current_floor() != car.target_floor() {
            car.arrive();
            debug!("Arrived at floor {}", car.current_floor());
        }
    }

    /// Keeps sweeping until the car is empty, without boarding anyone.
    fn drain(&self) -> Shutdown {
        while !self.state.lock_car().is_empty() {
            if self.terminate_requested() {
                return Shutdown::Terminated;
            }

            if self.unload_floor() > 0 {
                thread::sleep(self.door_open_time);
            }

            let (current, target) = {
                let mut car = self.state.lock_car();
                if car.is_empty() {
                    break;
                }
                car.next_floor(0);
                (car.current_floor(), car.target_floor())
            };

            if current != target {
                thread::sleep(self.travel_time);
            }

            self.arrive();
        }

        Shutdown::Drained
    }

    fn unload_floor(&self) -> usize {
        let mut car = self.state.lock_car();

        let unloaded = car.unload();
        if unloaded > 0 {
            debug!("Floor {}: {} off while draining", car.current_floor(), unloaded);
            car.begin_loading();
        }

        unloaded
    }

    fn terminate_requested(&self) -> bool {
        self.terminate_rx.try_recv().is_ok()
    }
}
