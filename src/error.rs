use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid aptitude grade {0}, expected 1-8")]
    InvalidGrade(i64),

    #[error("Unknown distance type: {0}")]
    UnknownDistanceType(i64),

    #[error("Unknown running style: {0}")]
    UnknownRunningStyle(i64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
