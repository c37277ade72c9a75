//! Shared state fed by the streaming socket.

use std::sync::Mutex;
use xtb_core::types::BalanceSnapshot;

/// Concurrency-safe single-value cell.
///
/// One writer (the streaming callback) keeps replacing the value while any
/// number of readers take clones of the last one. The lock is scoped to the
/// single slot and held only for the assignment or the clone, so readers
/// never observe a half-written value and writers never deadlock.
#[derive(Debug)]
pub struct StateCell<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Default for StateCell<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T: Clone> StateCell<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored value atomically.
    pub fn set(&self, value: T) {
        *self.slot.lock().unwrap() = Some(value);
    }

    /// Get a clone of the last stored value, or `None` before the first
    /// `set`. Callers must tolerate `None` rather than fail.
    pub fn get(&self) -> Option<T> {
        self.slot.lock().unwrap().clone()
    }

    /// Whether a value has been stored yet.
    pub fn is_set(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}

/// Mutable state shared between the streaming path and the query path.
///
/// The balance cell is the only resource touched from both execution
/// contexts; everything else in the adapter is read-mostly after startup.
#[derive(Debug, Default)]
pub struct ExchangeState {
    /// Most recently pushed account balance snapshot
    pub balance: StateCell<BalanceSnapshot>,
}

impl ExchangeState {
    pub fn new() -> Self {
        Self::default()
    }
}
