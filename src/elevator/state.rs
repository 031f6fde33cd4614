/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::{Mutex, MutexGuard, PoisonError};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::car::Car;
use crate::elevator::queue::FloorQueue;
use crate::elevator::status::StatusSnapshot;

/**
 * Car and floor queue shared between the command surface and the worker
 * thread.
 *
 * Lock order is always car, then queue. `lock_both` is the only place that
 * takes both.
 */
#[derive(Debug, Default)]
pub struct SharedState {
    car: Mutex<Car>,
    queue: Mutex<FloorQueue>,
}

impl SharedState {
    pub fn new() -> SharedState {
        SharedState::default()
    }

    // Poisoned locks are recovered, the status must stay readable.
    pub fn lock_car(&self) -> MutexGuard<'_, Car> {
        self.car.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock_queue(&self) -> MutexGuard<'_, FloorQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock_both(&self) -> (MutexGuard<'_, Car>, MutexGuard<'_, FloorQueue>) {
        let car = self.lock_car();
        let queue = self.lock_queue();
        (car, queue)
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        let (car, queue) = self.lock_both();
        StatusSnapshot::capture(&car, &queue)
    }
}
