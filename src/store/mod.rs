//! In-memory repositories shared by the HTTP handlers.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

mod gardens;
mod plants;

pub use gardens::GardenStore;
pub use plants::{starter_catalogue, PlantStore};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// A panicked writer leaves the map consistent, so a poisoned lock is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
