//! Wall-clock access
//!
//! "Current month" always means the clock's month at the moment a figure is
//! computed. Tests pin it with [`FixedClock`].

use chrono::{DateTime, Local};

use crate::models::MonthKey;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn current_month(&self) -> MonthKey {
        MonthKey::of(&self.now())
    }
}

/// The system clock in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
