use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the key-value port.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Rejected tracker commands. Storage failures are never reported here;
/// they surface as notices on the returned view.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date {date} is outside the calendar year {year}")]
    DateOutOfRange { date: String, year: i32 },
    #[error("unknown checkbox {0:?}")]
    UnknownCheckbox(String),
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no exercises group for {0}")]
    MissingCategory(&'static str),
    #[error("catalog lists {0} more than once")]
    DuplicateCategory(&'static str),
    #[error("checkbox id {0} is used by more than one exercise")]
    DuplicateCheckbox(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::UnknownCheckbox(_) | TrackerError::UnknownCategory(_) => {
                Self::not_found(err.to_string())
            }
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
