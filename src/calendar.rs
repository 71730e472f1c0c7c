use crate::completion::{format_date, parse_date, CompletedDates};
use crate::errors::TrackerError;
use crate::progress::{days_in_month, month_name};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    Pending,
    Completed,
}

impl DayState {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            DayState::Completed
        } else {
            DayState::Pending
        }
    }

    pub fn tooltip(self, is_today: bool) -> &'static str {
        match (self, is_today) {
            (DayState::Completed, true) => "Hoje: Treino concluído",
            (DayState::Completed, false) => "Treino concluído",
            (DayState::Pending, true) => "Hoje: Treino pendente",
            (DayState::Pending, false) => "Treino pendente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    pub completed: bool,
    pub is_today: bool,
    pub tooltip: &'static str,
}

impl DayCell {
    fn new(date: NaiveDate, completed: bool, today: NaiveDate) -> Self {
        let is_today = date == today;
        Self {
            date: format_date(date),
            day: date.day(),
            completed,
            is_today,
            tooltip: DayState::from_completed(completed).tooltip(is_today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub name: &'static str,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarYear {
    pub year: i32,
    pub months: Vec<CalendarMonth>,
}

impl CalendarYear {
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.year {
            return None;
        }
        self.months
            .get(date.month0() as usize)
            .and_then(|month| month.days.get(date.day0() as usize))
    }
}

/// Builds the twelve-month grid for `year`, marking days present in `dates`.
pub fn render(year: i32, dates: &CompletedDates, today: NaiveDate) -> CalendarYear {
    let months = (1..=12)
        .map(|month| CalendarMonth {
            month,
            name: month_name(month),
            days: (1..=days_in_month(year, month))
                .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
                .map(|date| DayCell::new(date, dates.contains(date), today))
                .collect(),
        })
        .collect();

    CalendarYear { year, months }
}

/// Accepts only strict `YYYY-MM-DD` dates that fall inside the rendered year.
pub fn validate_day(raw: &str, year: i32) -> Result<NaiveDate, TrackerError> {
    let date = parse_date(raw).ok_or_else(|| TrackerError::InvalidDate(raw.to_owned()))?;
    if date.year() != year {
        return Err(TrackerError::DateOutOfRange {
            date: raw.to_owned(),
            year,
        });
    }
    Ok(date)
}

/// Flips membership of `date` and returns the new completed state.
pub fn toggle_day(dates: &mut CompletedDates, date: NaiveDate) -> bool {
    if dates.remove(date) {
        false
    } else {
        dates.insert(date);
        true
    }
}

/// Applies the live completion result to today's cell only.
///
/// Returns `true` when the set changed.
pub fn apply_today(dates: &mut CompletedDates, today: NaiveDate, completed: bool) -> bool {
    if completed {
        dates.insert(today)
    } else {
        dates.remove(today)
    }
}
