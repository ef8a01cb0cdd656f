use crate::ports::outbound::Clock;
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Wall-clock time. "Today" is the local calendar date, matching what a user
/// running the check would consider today.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
