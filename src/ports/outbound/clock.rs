use chrono::{DateTime, NaiveDate, Utc};

/// Clock port supplying "now" for cache expiry and "today" for EOL arithmetic
pub trait Clock: Send + Sync {
    /// Current instant, used for cache expiry
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date, used for days-remaining calculations
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
