//! Time source abstraction for testable expiry behavior.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// All expiry decisions and click timestamps go through this trait so tests
/// can drive time deterministically instead of sleeping through validity
/// windows.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
