/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, error, info, warn};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::fsm::{ElevatorFSM, Shutdown};
use crate::elevator::state::SharedState;
use crate::elevator::status::StatusSnapshot;
use crate::shared::structs::validate_floor;
use crate::shared::{status_code, EngineError, Mode, Passenger, PassengerKind};

struct Worker {
    handle: JoinHandle<Shutdown>,
    terminate_tx: cbc::Sender<()>,
}

/**
 * Command surface of the elevator engine.
 *
 * Owns the shared car/queue state and the worker thread running the
 * `ElevatorFSM`. Cheap commands only: none of them waits for the car.
 *
 * Dropping the controller forces the worker to stop and joins it.
 */
pub struct ElevatorController {
    config: ElevatorConfig,
    state: Arc<SharedState>,
    worker: Mutex<Option<Worker>>,
}

impl ElevatorController {
    pub fn new(config: &ElevatorConfig) -> ElevatorController {
        ElevatorController {
            config: config.clone(),
            state: Arc::new(SharedState::new()),
            worker: Mutex::new(None),
        }
    }

    /// Starts the elevator if it is offline: back to floor 1, empty, counters
    /// cleared, and a fresh worker thread.
    pub fn start(&self) -> Result<(), EngineError> {
        let mut car = self.state.lock_car();

        if car.mode() != Mode::Offline {
            debug!("Start ignored, elevator is {}", car.mode());
            return Err(EngineError::AlreadyRunning);
        }

        let mut worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner);

        // An offline car means the previous worker already gave up its locks.
        if let Some(previous) = worker.take() {
            if previous.handle.join().is_err() {
                error!("Previous elevator thread panicked");
            }
        }

        let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
        let fsm = ElevatorFSM::new(&self.config, Arc::clone(&self.state), terminate_rx);

        // The new thread blocks on the car lock until the reset below is done.
        let handle = Builder::new()
            .name("elevator".into())
            .spawn(move || fsm.run())
            .map_err(|e| {
                error!("Elevator thread failed to spawn: {}", e);
                EngineError::SpawnFailed(e.to_string())
            })?;

        car.reset();
        *worker = Some(Worker {
            handle,
            terminate_tx,
        });

        info!("Elevator started");
        Ok(())
    }

    /// Queues a passenger on its start floor.
    pub fn submit_request(&self, kind: i32, start: i32, destination: i32) -> Result<(), EngineError> {
        let passenger = PassengerKind::try_from(kind)
            .and_then(|kind| {
                let start = validate_floor(start)?;
                let destination = validate_floor(destination)?;
                Passenger::new(kind, start, destination)
            })
            .map_err(|e| {
                warn!("Rejected request ({}, {}, {}): {}", kind, start, destination, e);
                e
            })?;

        info!(
            "New {:?} waiting on floor {} for floor {}",
            passenger.kind(),
            passenger.origin(),
            passenger.destination()
        );
        self.state.lock_queue().push(passenger);
        Ok(())
    }

    /// Asks the elevator to stop once everyone onboard has been delivered.
    pub fn stop(&self) -> Result<(), EngineError> {
        let mut car = self.state.lock_car();

        if car.stop_requested {
            debug!("Stop ignored, already stopping");
            return Err(EngineError::AlreadyStopping);
        }

        car.stop_requested = true;
        info!("Elevator stopping");
        Ok(())
    }

    /// Abandons the drain as soon as the worker gets to check, leaving anyone
    /// still onboard in the car.
    pub fn force_stop(&self) {
        self.state.lock_car().stop_requested = true;

        let worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(worker) = worker.as_ref() {
            warn!("Forcing elevator to stop");
            let _ = worker.terminate_tx.send(());
        }
    }

    /// Waits for the worker thread to exit. Returns `None` if there was no
    /// worker to wait for.
    pub fn join(&self) -> Option<Shutdown> {
        let worker = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;

        match worker.handle.join() {
            Ok(shutdown) => Some(shutdown),
            Err(_) => {
                error!("Elevator thread panicked");
                None
            }
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.state.snapshot()
    }

    /***************************************/
    /*      Integer status entry points     */
    /***************************************/
    pub fn start_elevator(&self) -> i32 {
        status_code(&self.start())
    }

    pub fn issue_request(&self, kind: i32, start: i32, destination: i32) -> i32 {
        status_code(&self.submit_request(kind, start, destination))
    }

    pub fn stop_elevator(&self) -> i32 {
        status_code(&self.stop())
    }
}

impl Drop for ElevatorController {
    fn drop(&mut self) {
        self.force_stop();
        self.join();
    }
}
