use crate::catalog::Catalog;
use crate::clock::Clock;
use crate::completion::parse_date;
use crate::storage::resolve_data_path;
use std::{env, path::Path, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub clock: Clock,
    /// Pinned calendar year; `None` follows the clock.
    pub calendar_year: Option<i32>,
    pub catalog: Catalog,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let clock = match env::var("APP_TODAY") {
            Ok(raw) => match parse_date(&raw) {
                Some(date) => Clock::fixed(date),
                None => {
                    warn!(value = %raw, "ignoring APP_TODAY, expected YYYY-MM-DD");
                    Clock::System
                }
            },
            Err(_) => Clock::System,
        };

        let calendar_year = env::var("CALENDAR_YEAR")
            .ok()
            .and_then(|value| {
                let parsed = value.parse::<i32>().ok();
                if parsed.is_none() {
                    warn!(value = %value, "ignoring CALENDAR_YEAR");
                }
                parsed
            });

        let catalog = match env::var("WORKOUT_CATALOG_PATH") {
            Ok(path) => Catalog::load(Path::new(&path)).unwrap_or_else(|err| {
                warn!(path = %path, "using built-in catalog: {err}");
                Catalog::default()
            }),
            Err(_) => Catalog::default(),
        };

        Self {
            port,
            data_path: resolve_data_path(),
            clock,
            calendar_year,
            catalog,
        }
    }
}
