//! Time Provider Abstraction
//!
//! Provides a trait-based abstraction for time operations so note timestamps
//! can be tested deterministically without thread sleeps.
//!
//! # Examples
//!
//! ```rust
//! use notecrud_core::models::time::{TimeProvider, SystemTimeProvider};
//! use chrono::Utc;
//!
//! let provider = SystemTimeProvider;
//! let now = provider.now();
//! assert!(now <= Utc::now());
//! ```

use chrono::{DateTime, Utc};

/// Trait for providing current time
///
/// `NoteStore` stamps `created_at` / `updated_at` through this trait.
pub trait TimeProvider: Send + Sync {
    /// Get the current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// System time provider using actual system clock
///
/// This is the default implementation for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock time provider for testing
///
/// Clones share the same clock, so a test can hand one clone to a
/// `NoteStore` and keep another to advance time between operations.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    current_time: std::sync::Arc<std::sync::Mutex<DateTime<Utc>>>,
}

#[cfg(test)]
impl MockTimeProvider {
    /// Create a new mock time provider starting at the current time
    pub fn new() -> Self {
        Self::with_time(Utc::now())
    }

    /// Create a mock time provider with a specific starting time
    pub fn with_time(time: DateTime<Utc>) -> Self {
        Self {
            current_time: std::sync::Arc::new(std::sync::Mutex::new(time)),
        }
    }

    /// Set the current time to a specific value
    pub fn set_time(&self, time: DateTime<Utc>) {
        *self.current_time.lock().unwrap() = time;
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: chrono::Duration) {
        *self.current_time.lock().unwrap() += duration;
    }
}

#[cfg(test)]
impl TimeProvider for MockTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        *self.current_time.lock().unwrap()
    }
}

#[cfg(test)]
impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_system_time_provider() {
        let provider = SystemTimeProvider;
        let now1 = provider.now();
        let now2 = Utc::now();

        // Should be very close (within 1 second)
        assert!((now2 - now1).num_milliseconds().abs() < 1000);
    }

    #[test]
    fn test_mock_time_provider_with_time() {
        let specific_time = Utc::now() - Duration::days(7);
        let provider = MockTimeProvider::with_time(specific_time);

        assert_eq!(provider.now(), specific_time);
    }

    #[test]
    fn test_mock_time_provider_set_time() {
        let provider = MockTimeProvider::new();
        let target = Utc::now() + Duration::days(30);

        provider.set_time(target);
        assert_eq!(provider.now(), target);
    }

    #[test]
    fn test_mock_time_provider_advance_is_shared_between_clones() {
        let provider = MockTimeProvider::new();
        let handle = provider.clone();
        let start = provider.now();

        handle.advance(Duration::hours(1));

        assert_eq!(provider.now() - start, Duration::hours(1));
    }
}
