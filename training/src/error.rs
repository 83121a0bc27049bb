use crate::ActivityCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown activity code `{0}`")]
    UnknownActivity(String),
    #[error("Activity `{code}` expects {expected} values, got {actual}")]
    InvalidArguments {
        code: ActivityCode,
        expected: usize,
        actual: usize,
    },
    #[error("`{field}` must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
    #[error("Duration must be greater than zero, got {0} h")]
    InvalidDuration(f64),
    #[error("Failed to write summary: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "csv")]
    #[error("Failed to read packages: {0}")]
    Csv(#[from] csv::Error),
    #[cfg(feature = "csv")]
    #[error("Row {row}: `{value}` is not a number")]
    InvalidNumber { row: u64, value: String },
}
