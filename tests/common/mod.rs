//! In-memory doubles for the persistence and page-cache seams. Every write
//! is recorded so tests can assert exactly what reached the backend.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use wildhaven::cache::PageCache;
use wildhaven::models::booking::{BookingPatch, NewBooking};
use wildhaven::models::guest::ProfileUpdate;
use wildhaven::store::{BookingStore, GuestStore};

pub const GUEST_ID: i64 = 7;

#[derive(Default)]
pub struct MemStore {
    pub profiles: Mutex<HashMap<i64, ProfileUpdate>>,
    /// guest id -> booking ids that guest owns
    pub owned: Mutex<HashMap<i64, Vec<i64>>>,
    pub created: Mutex<Vec<NewBooking>>,
    pub updated: Mutex<Vec<(i64, BookingPatch)>>,
    pub deleted: Mutex<Vec<i64>>,
    pub fail_writes: AtomicBool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store where `guest_id` owns exactly the given bookings.
    pub fn owning(guest_id: i64, booking_ids: &[i64]) -> Self {
        let store = Self::default();
        store
            .owned
            .lock()
            .unwrap()
            .insert(guest_id, booking_ids.to_vec());
        store
    }

    /// A store whose writes all fail, as if the backend rejected them.
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail_writes.store(true, Ordering::Relaxed);
        store
    }

    /// Make all subsequent writes fail (reads keep working).
    pub fn set_failing(&self) {
        self.fail_writes.store(true, Ordering::Relaxed);
    }

    fn check_writable(&self) -> Result<(), sqlx::Error> {
        if self.fail_writes.load(Ordering::Relaxed) {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

impl GuestStore for MemStore {
    async fn update_profile(
        &self,
        guest_id: i64,
        update: &ProfileUpdate,
    ) -> Result<(), sqlx::Error> {
        self.check_writable()?;
        self.profiles.lock().unwrap().insert(guest_id, update.clone());
        Ok(())
    }
}

impl BookingStore for MemStore {
    async fn owns(&self, guest_id: i64, booking_id: i64) -> Result<bool, sqlx::Error> {
        let owned = self.owned.lock().unwrap();
        Ok(owned
            .get(&guest_id)
            .is_some_and(|ids| ids.contains(&booking_id)))
    }

    async fn create(&self, booking: &NewBooking) -> Result<i64, sqlx::Error> {
        self.check_writable()?;
        let mut created = self.created.lock().unwrap();
        created.push(booking.clone());
        Ok(created.len() as i64)
    }

    async fn update(&self, booking_id: i64, patch: &BookingPatch) -> Result<(), sqlx::Error> {
        self.check_writable()?;
        self.updated.lock().unwrap().push((booking_id, patch.clone()));
        Ok(())
    }

    async fn delete(&self, booking_id: i64) -> Result<(), sqlx::Error> {
        self.check_writable()?;
        self.deleted.lock().unwrap().push(booking_id);
        Ok(())
    }
}

/// Page-cache double that records every invalidated path in order.
#[derive(Default)]
pub struct SpyCache {
    pub invalidated: Mutex<Vec<String>>,
}

impl SpyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.invalidated.lock().unwrap().clone()
    }
}

impl PageCache for SpyCache {
    fn invalidate(&self, path: &str) {
        self.invalidated.lock().unwrap().push(path.to_string());
    }
}
