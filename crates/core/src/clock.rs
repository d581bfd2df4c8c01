//! Injectable time source.
//!
//! The engine never reads the wall clock directly; every component that
//! needs the current time takes a [`Clock`]. Production code uses
//! [`SystemClock`], tests use [`ManualClock`] with a fixed or manually
//! advanced instant.
//!
//! CareAlert runs in a single local time zone (time-zone normalization is
//! deliberately unsupported), so "now" is a naive local timestamp.

use std::sync::Mutex;

use chrono::{Duration, Local, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test clock returning a manually controlled instant.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Replaces the current instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }

    /// Moves the clock forward (or backward, with a negative duration).
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}
