use chrono::{Duration, NaiveDate};

/// The validity window for evidence as of an evaluation date.
///
/// An event counts when `as_of - window_days <= event.date <= as_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceWindow {
    pub as_of: NaiveDate,
    pub window_days: i64,
}

impl EvidenceWindow {
    pub fn new(as_of: NaiveDate, window_days: i64) -> Self {
        Self { as_of, window_days }
    }

    /// Days between `date` and the evaluation date. Negative for future dates.
    pub fn age_days(&self, date: NaiveDate) -> i64 {
        (self.as_of - date).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let age = self.age_days(date);
        (0..=self.window_days).contains(&age)
    }

    /// First date still inside the window. `None` when it precedes the
    /// earliest representable date.
    pub fn start(&self) -> Option<NaiveDate> {
        self.as_of.checked_sub_signed(Duration::try_days(self.window_days)?)
    }

    /// Last date on which evidence dated `date` still counts. `None` means
    /// the evidence never expires within the representable calendar.
    pub fn expires_on(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_signed(Duration::try_days(self.window_days)?)
    }
}
