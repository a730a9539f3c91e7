/// Source of the current time in epoch seconds.
pub trait TimeSource {
    fn now(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl TimeSource for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
