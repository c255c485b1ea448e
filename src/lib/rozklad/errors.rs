//! Error types of the timetable client and the lesson converter.

use super::models::ViewMode;

/// Result type for operations talking to the timetable export.
pub type RozkladResult<T> = Result<T, RozkladError>;

/// A required field of a feed row could not be parsed.
///
/// Any of these aborts the conversion of the whole batch of rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid lesson number {0:?}")]
    LessonNumber(String),

    #[error("invalid date {0:?}, expected D.M.YYYY")]
    Date(String),

    #[error("invalid lesson time {0:?}, expected H:MM-H:MM")]
    LessonTime(String),

    #[error("invalid teacher full name {0:?}, expected \"Last First Middle\"")]
    TeacherName(String),

    #[error("invalid subgroup field {0:?}, expected \"<group> (<subgroup>)\"")]
    SubGroup(String),

    #[error("malformed replacement announcement {0:?}")]
    Replacement(String),
}

/// Error type for fetching and converting a timetable.
#[derive(Debug, thiserror::Error)]
pub enum RozkladError {
    #[error("request to the timetable export failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode the timetable export: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Object lists carry their ids as strings.
    #[error("{kind} {name:?} has a non-numeric id {id:?}")]
    InvalidId {
        kind: &'static str,
        name: String,
        id: String,
    },

    #[error("no {mode} named {name:?} in the reference tables")]
    UnknownSubject { mode: ViewMode, name: String },

    #[error("failed to convert lessons: {0}")]
    Format(#[from] FormatError),
}
