//! Time-limited memo of an expensive computation
//!
//! Holds at most one value together with the instant it was stored. Used by
//! front ends that re-read the result table on every refresh.

use std::time::{Duration, Instant};

use crate::constants::cache::DEFAULT_TTL;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ResultCache<T> {
    ttl: Duration,
    entry: Option<(T, Instant)>,
}

impl<T> Default for ResultCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<T> ResultCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a value is stored and younger than the TTL
    pub fn is_fresh(&self) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|(_, stored)| stored.elapsed() < self.ttl)
    }

    /// Return the cached value, recomputing it first if missing or expired
    ///
    /// # Errors
    ///
    /// Propagates the error of `compute`. Failures are not cached, so the
    /// next call computes again.
    pub fn get_or_compute<F>(&mut self, compute: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        let fresh = self.is_fresh();
        let entry = match self.entry.take() {
            Some(entry) if fresh => entry,
            _ => (compute()?, Instant::now()),
        };
        let (value, _) = self.entry.insert(entry);
        Ok(value)
    }

    /// Drop the stored value
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
