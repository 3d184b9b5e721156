//! Time Abstraction
//!
//! Provides an injectable time source so cache timestamps stay deterministic
//! under test.

use chrono::{DateTime, Utc};

use crate::platform::PlatformSendSync;

/// Time source trait
///
/// Abstracts system time to enable deterministic testing. The offline cache
/// stamps `cached_at` from this source rather than reading the system clock
/// directly.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::time::Clock;
///
/// fn stamp(clock: &dyn Clock) -> i64 {
///     clock.unix_timestamp_millis()
/// }
/// ```
pub trait Clock: PlatformSendSync {
    /// Get current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Get current Unix timestamp in seconds
    fn unix_timestamp(&self) -> i64 {
        self.now().timestamp()
    }

    /// Get current Unix timestamp in milliseconds
    fn unix_timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// System clock implementation using actual system time
#[derive(Debug, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock;
        let now = clock.now();
        let millis = clock.unix_timestamp_millis();

        assert!(millis > 0);
        assert!(millis >= now.timestamp() * 1000);
    }
}
