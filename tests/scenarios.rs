use chrono::NaiveDate;
use workout_tracker::catalog::{Catalog, Category, CategoryGroup, Exercise};
use workout_tracker::clock::Clock;
use workout_tracker::completion::{load_completed_dates, save_completed_dates, CompletedDates};
use workout_tracker::keys::CheckboxId;
use workout_tracker::{MemoryStore, Tracker};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
}

fn exercise(id: &str) -> Exercise {
    Exercise {
        id: CheckboxId::new(id).unwrap(),
        label: id.to_owned(),
    }
}

/// Three items in Treino A, five in Treino B, four in Treino de Perna.
fn small_catalog() -> Catalog {
    let group = |category, ids: &[&str]| CategoryGroup {
        category,
        exercises: ids.iter().map(|id| exercise(id)).collect(),
    };
    Catalog::new(vec![
        group(Category::TreinoA, &["a1", "a2", "a3"]),
        group(Category::TreinoB, &["b1", "b2", "b3", "b4", "b5"]),
        group(Category::TreinoPerna, &["p1", "p2", "p3", "p4"]),
    ])
    .unwrap()
}

fn tracker() -> Tracker<MemoryStore> {
    Tracker::new(MemoryStore::new(), small_catalog(), Clock::fixed(today()))
}

#[test]
fn finishing_treino_a_completes_today() {
    let mut tracker = tracker();
    tracker.apply_checkbox_change("a1", true).unwrap();
    tracker.apply_checkbox_change("a2", true).unwrap();
    tracker.apply_checkbox_change("b1", true).unwrap();

    let view = tracker.apply_checkbox_change("a3", true).unwrap();

    let treino_a = view.category(Category::TreinoA).unwrap();
    assert_eq!(treino_a.progress_label, "3/3");
    assert_eq!(view.category(Category::TreinoB).unwrap().progress_label, "1/5");
    assert_eq!(view.category(Category::TreinoPerna).unwrap().progress_label, "0/4");

    let cell = view.calendar.cell(today()).unwrap();
    assert!(cell.completed);
    assert_eq!(cell.tooltip, "Hoje: Treino concluído");

    let stored = load_completed_dates(tracker.store()).unwrap();
    assert!(stored.contains(today()));
    assert_eq!(
        tracker.store().entries().get("a3").map(String::as_str),
        Some("true")
    );
}

#[test]
fn partially_checked_categories_leave_today_pending() {
    let mut tracker = tracker();
    for id in ["a1", "a2", "b1", "b2", "b3", "b4", "p1", "p2", "p3"] {
        tracker.apply_checkbox_change(id, true).unwrap();
    }

    let view = tracker.view();
    assert!(!view.today_completed);
    assert_eq!(
        view.calendar.cell(today()).unwrap().tooltip,
        "Hoje: Treino pendente"
    );
}

#[test]
fn clicking_a_past_day_twice_restores_it() {
    let mut tracker = tracker();
    let past = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();

    let view = tracker.apply_calendar_toggle("2025-02-14").unwrap();
    let cell = view.calendar.cell(past).unwrap();
    assert!(cell.completed);
    assert_eq!(cell.tooltip, "Treino concluído");
    assert!(load_completed_dates(tracker.store()).unwrap().contains(past));

    let view = tracker.apply_calendar_toggle("2025-02-14").unwrap();
    let cell = view.calendar.cell(past).unwrap();
    assert!(!cell.completed);
    assert_eq!(cell.tooltip, "Treino pendente");
    assert!(load_completed_dates(tracker.store()).unwrap().is_empty());
}

#[test]
fn manual_history_survives_checklist_changes() {
    let mut tracker = tracker();
    tracker.apply_calendar_toggle("2025-03-03").unwrap();
    tracker.apply_checkbox_change("p1", true).unwrap();
    let view = tracker.apply_reset("treinoPerna").unwrap();

    let past = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    assert!(view.calendar.cell(past).unwrap().completed);
    assert_eq!(view.monthly.completed, 1);
}

#[test]
fn monthly_progress_reaches_full_in_february() {
    let mut store = MemoryStore::new();
    let dates: CompletedDates = (1..=24)
        .map(|day| NaiveDate::from_ymd_opt(2025, 2, day).unwrap())
        .collect();
    save_completed_dates(&mut store, &dates).unwrap();

    let feb = NaiveDate::from_ymd_opt(2025, 2, 27).unwrap();
    let tracker = Tracker::new(store, small_catalog(), Clock::fixed(feb));
    let view = tracker.view();

    assert_eq!(view.monthly.max_workouts, 24);
    assert_eq!(view.monthly.percentage, 100.0);
    assert_eq!(view.monthly.label, "100% concluído");
    assert_eq!(view.header, "fevereiro 2025 - Dia 27/02");
}

#[test]
fn today_outside_calendar_year_still_updates_history() {
    let next_year = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    let mut tracker = Tracker::new(MemoryStore::new(), small_catalog(), Clock::fixed(next_year))
        .with_calendar_year(2025);
    for id in ["a1", "a2", "a3"] {
        tracker.apply_checkbox_change(id, true).unwrap();
    }

    let view = tracker.view();
    assert!(view.today_completed);
    assert!(view.calendar.cell(next_year).is_none());
    assert_eq!(view.monthly.completed, 1);
}
