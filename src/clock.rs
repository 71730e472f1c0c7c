use chrono::{Local, NaiveDate};

/// Source of "today" for everything that depends on the calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    #[must_use]
    pub fn fixed(date: NaiveDate) -> Self {
        Self::Fixed(date)
    }

    /// Local calendar date according to the clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}
