use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced to callers of the schedule generator.
///
/// Only input-contract violations and export I/O fail. Inconsistent dependency
/// data never errors; the scheduler absorbs it and flags `has_conflict`.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("no work items supplied")]
    NoWorkItems,

    #[error("work item {index} ('{name}') has negative amount {amount}")]
    NegativeAmount {
        index: usize,
        name: String,
        amount: f64,
    },

    #[error("work item {index} ('{name}') has a non-finite amount")]
    NonFiniteAmount { index: usize, name: String },

    #[error("total amount must be a non-negative number (got {0})")]
    InvalidTotalAmount(f64),

    #[error("invalid project start date '{value}' (expected YYYY-MM-DD or an RFC 3339 timestamp)")]
    InvalidStartDate { value: String },

    #[error("schedule starting {start} runs past the latest supported calendar date")]
    StartDateOutOfRange { start: NaiveDate },

    #[error("unsupported export format '{0}' (expected json or csv)")]
    UnsupportedFormat(String),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// True for errors caused by the caller's input rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScheduleError::NoWorkItems
                | ScheduleError::NegativeAmount { .. }
                | ScheduleError::NonFiniteAmount { .. }
                | ScheduleError::InvalidTotalAmount(_)
                | ScheduleError::InvalidStartDate { .. }
                | ScheduleError::StartDateOutOfRange { .. }
                | ScheduleError::UnsupportedFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
