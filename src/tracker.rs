//! Command interface over the checklist, the completed-date set and the
//! calendar. Every command returns the refreshed view.

use crate::calendar::{self, CalendarYear};
use crate::catalog::{Catalog, Category};
use crate::clock::Clock;
use crate::completion::{self, CompletedDates};
use crate::errors::{StorageError, TrackerError};
use crate::keys::{CheckboxId, StorageKey};
use crate::models::{CategoryView, ExerciseView, Notice, ThemeResponse, TrackerView};
use crate::progress::{self, CategoryProgress, MonthlyProgress};
use crate::storage::KeyValueStore;
use crate::theme::{self, Theme};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, error, info, warn};

pub struct Tracker<S> {
    store: S,
    catalog: Catalog,
    clock: Clock,
    calendar_year: Option<i32>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// The calendar follows the clock's current year unless pinned with
    /// [`Tracker::with_calendar_year`].
    pub fn new(store: S, catalog: Catalog, clock: Clock) -> Self {
        Self {
            store,
            catalog,
            clock,
            calendar_year: None,
        }
    }

    #[must_use]
    pub fn with_calendar_year(mut self, year: i32) -> Self {
        self.calendar_year = Some(year);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn calendar_year(&self) -> i32 {
        self.calendar_year.unwrap_or_else(|| self.today().year())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn is_checked(&self, id: &CheckboxId) -> bool {
        match self.store.get(&StorageKey::Checkbox(id.clone())).as_deref() {
            Some("true") => true,
            Some("false") | None => false,
            Some(other) => {
                debug!(checkbox = %id, value = other, "treating unknown checkbox value as unchecked");
                false
            }
        }
    }

    /// Live `(checked, total)` for each category.
    pub fn category_counts(&self) -> Vec<CategoryProgress> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let exercises = self.catalog.exercises(category);
                CategoryProgress {
                    category,
                    checked: exercises.iter().filter(|e| self.is_checked(&e.id)).count(),
                    total: exercises.len(),
                }
            })
            .collect()
    }

    /// Completed dates, or the empty set when the stored payload is unusable.
    pub fn completed_dates(&self, notices: &mut Vec<Notice>) -> CompletedDates {
        completion::load_completed_dates(&self.store).unwrap_or_else(|err| {
            warn!("recovering from unreadable completed dates: {err}");
            notices.push(Notice::warning(
                "Histórico de treinos ilegível; iniciando um histórico vazio.",
            ));
            CompletedDates::new()
        })
    }

    pub fn apply_checkbox_change(
        &mut self,
        id: &str,
        checked: bool,
    ) -> Result<TrackerView, TrackerError> {
        let (_, exercise) = self
            .catalog
            .find(id)
            .ok_or_else(|| TrackerError::UnknownCheckbox(id.to_owned()))?;
        let key = StorageKey::Checkbox(exercise.id.clone());

        let mut notices = Vec::new();
        let value = if checked { "true" } else { "false" };
        let written = self.store.set(&key, value.to_owned());
        report_write(written, &mut notices);
        debug!(checkbox = id, checked, "checkbox changed");

        let dates = self.update_progress(&mut notices);
        Ok(self.build_view(&dates, notices))
    }

    /// Flips one calendar day. Live checkbox state is not consulted.
    pub fn apply_calendar_toggle(&mut self, date: &str) -> Result<TrackerView, TrackerError> {
        let day = calendar::validate_day(date, self.calendar_year())?;

        let mut notices = Vec::new();
        let mut dates = self.completed_dates(&mut notices);
        let completed = calendar::toggle_day(&mut dates, day);
        let written = completion::save_completed_dates(&mut self.store, &dates);
        report_write(written, &mut notices);
        info!(date, completed, "calendar day toggled");

        Ok(self.build_view(&dates, notices))
    }

    pub fn apply_reset(&mut self, category: &str) -> Result<TrackerView, TrackerError> {
        let category: Category = category.parse().map_err(TrackerError::UnknownCategory)?;

        let mut notices = Vec::new();
        let keys: Vec<StorageKey> = self
            .catalog
            .exercises(category)
            .iter()
            .map(|exercise| StorageKey::Checkbox(exercise.id.clone()))
            .collect();
        for key in &keys {
            let written = self.store.set(key, "false".to_owned());
            report_write(written, &mut notices);
        }
        info!(category = category.id(), "category reset");

        let dates = self.update_progress(&mut notices);
        Ok(self.build_view(&dates, notices))
    }

    /// Re-applies the live checklist to today's entry and returns the view.
    /// Served on every page load, so a new day picks up the stored checklist.
    pub fn refresh(&mut self) -> TrackerView {
        let mut notices = Vec::new();
        let dates = self.update_progress(&mut notices);
        self.build_view(&dates, notices)
    }

    /// Read-only snapshot; today's entry is not reconciled.
    pub fn view(&self) -> TrackerView {
        let mut notices = Vec::new();
        let dates = self.completed_dates(&mut notices);
        self.build_view(&dates, notices)
    }

    pub fn calendar(&self, year: i32) -> CalendarYear {
        let mut notices = Vec::new();
        let dates = self.completed_dates(&mut notices);
        calendar::render(year, &dates, self.today())
    }

    pub fn theme(&self, prefers_dark: bool) -> Theme {
        theme::load_theme(&self.store, prefers_dark)
    }

    pub fn set_theme(&mut self, theme: Theme) -> ThemeResponse {
        let mut notices = Vec::new();
        report_write(theme::save_theme(&mut self.store, theme), &mut notices);
        ThemeResponse { theme, notices }
    }

    /// Only today's entry follows the checklist; past days are left alone.
    fn update_progress(&mut self, notices: &mut Vec<Notice>) -> CompletedDates {
        let today = self.today();
        let complete = progress::is_today_complete(&self.category_counts());
        let mut dates = self.completed_dates(notices);
        if calendar::apply_today(&mut dates, today, complete) {
            let written = completion::save_completed_dates(&mut self.store, &dates);
            report_write(written, notices);
            debug!(%today, complete, "today's completion updated");
        }
        dates
    }

    fn build_view(&self, dates: &CompletedDates, notices: Vec<Notice>) -> TrackerView {
        let today = self.today();

        let categories = self
            .category_counts()
            .into_iter()
            .map(|counts| {
                let category = counts.category;
                CategoryView {
                    category,
                    label: category.label(),
                    suffix: category.suffix(),
                    checked: counts.checked,
                    total: counts.total,
                    complete: counts.is_complete(),
                    progress_label: counts.label(),
                    reset_label: category.reset_label(),
                    reset_confirmation: category.reset_confirmation(),
                    exercises: self
                        .catalog
                        .exercises(category)
                        .iter()
                        .map(|exercise| ExerciseView {
                            id: exercise.id.clone(),
                            label: exercise.label.clone(),
                            checked: self.is_checked(&exercise.id),
                        })
                        .collect(),
                }
            })
            .collect();

        TrackerView {
            today: completion::format_date(today),
            header: progress::header_label(today),
            today_completed: dates.contains(today),
            categories,
            monthly: MonthlyProgress::for_date(dates, today),
            calendar: calendar::render(self.calendar_year(), dates, today),
            notices,
        }
    }
}

fn report_write(result: Result<(), StorageError>, notices: &mut Vec<Notice>) {
    if let Err(err) = result {
        error!("{err}");
        notices.push(Notice::error(format!(
            "Não foi possível salvar o progresso: {err}"
        )));
    }
}
