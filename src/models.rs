use crate::calendar::CalendarYear;
use crate::catalog::Category;
use crate::keys::CheckboxId;
use crate::progress::MonthlyProgress;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CheckboxRequest {
    pub id: String,
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    pub prefers_dark: bool,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Non-fatal problem reported alongside a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseView {
    pub id: CheckboxId,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub label: &'static str,
    pub suffix: &'static str,
    pub checked: usize,
    pub total: usize,
    pub complete: bool,
    pub progress_label: String,
    pub reset_label: String,
    pub reset_confirmation: String,
    pub exercises: Vec<ExerciseView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    pub today: String,
    pub header: String,
    pub today_completed: bool,
    pub categories: Vec<CategoryView>,
    pub monthly: MonthlyProgress,
    pub calendar: CalendarYear,
    pub notices: Vec<Notice>,
}

impl TrackerView {
    pub fn category(&self, category: Category) -> Option<&CategoryView> {
        self.categories.iter().find(|view| view.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub notices: Vec<Notice>,
}
