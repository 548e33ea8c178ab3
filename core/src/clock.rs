//! Time source for record timestamps.

use chrono::{DateTime, Utc};

/// Supplies "now" to the store.
///
/// Production code uses `SystemClock`; tests substitute a clock they can
/// advance so ordering by `created_at` is deterministic.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
