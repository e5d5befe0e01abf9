//! Where a session gets "now" from.

use jiff::Zoned;

/// Source of the current date and time.
pub trait Clock {
    fn now(&self) -> Zoned;
}

/// Wall clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Zoned);

impl FixedClock {
    pub fn new(now: Zoned) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}
