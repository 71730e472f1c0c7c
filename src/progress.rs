use crate::catalog::Category;
use crate::completion::CompletedDates;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Sessions per complete week the monthly goal is measured against.
pub const WORKOUTS_PER_WEEK: u32 = 6;

const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub checked: usize,
    pub total: usize,
}

impl CategoryProgress {
    pub fn is_complete(&self) -> bool {
        evaluate_category(self.checked, self.total)
    }

    /// `"checked/total"`, as shown next to each category.
    pub fn label(&self) -> String {
        format!("{}/{}", self.checked, self.total)
    }
}

/// A category is complete when every one of its (at least one) items is checked.
pub fn evaluate_category(checked: usize, total: usize) -> bool {
    total > 0 && checked == total
}

/// Finishing any single category marks the day as done.
pub fn is_today_complete(categories: &[CategoryProgress]) -> bool {
    categories.iter().any(CategoryProgress::is_complete)
}

/// Number of days in `month` (1-based) of `year`; zero for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|next| (next - first).num_days() as u32).unwrap_or(0)
}

/// Workout target for a month: six sessions per complete week, the partial
/// trailing week excluded.
pub fn max_workouts(days_in_month: u32) -> u32 {
    (days_in_month / 7) * WORKOUTS_PER_WEEK
}

/// Percentage of the monthly target reached, clamped to `[0, 100]`.
pub fn complete_weeks_percentage(completed: usize, days_in_month: u32) -> f64 {
    let max = max_workouts(days_in_month);
    if max == 0 {
        return 0.0;
    }
    (completed as f64 / f64::from(max) * 100.0).min(100.0)
}

pub fn monthly_percentage(dates: &CompletedDates, year: i32, month: u32) -> f64 {
    complete_weeks_percentage(dates.count_in_month(year, month), days_in_month(year, month))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProgress {
    pub year: i32,
    pub month: u32,
    pub completed: usize,
    pub max_workouts: u32,
    pub percentage: f64,
    pub label: String,
}

impl MonthlyProgress {
    pub fn compute(dates: &CompletedDates, year: i32, month: u32) -> Self {
        let percentage = monthly_percentage(dates, year, month);
        Self {
            year,
            month,
            completed: dates.count_in_month(year, month),
            max_workouts: max_workouts(days_in_month(year, month)),
            percentage,
            label: format!("{}% concluído", percentage.round() as u32),
        }
    }

    pub fn for_date(dates: &CompletedDates, today: NaiveDate) -> Self {
        Self::compute(dates, today.year(), today.month())
    }
}

/// Portuguese month name for a 1-based month.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Header text such as `março 2025 - Dia 07/03`.
pub fn header_label(today: NaiveDate) -> String {
    format!(
        "{} {} - Dia {:02}/{:02}",
        month_name(today.month()),
        today.year(),
        today.day(),
        today.month()
    )
}
