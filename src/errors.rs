//! Unified error types.
//! The engine only ever fails with `ValidationError`; everything around it
//! (ingestion, config, export, CLI) returns `AppError`.

use std::io;
use thiserror::Error;

/// Structural problems in the inputs of a reconciliation run.
/// A caller showing one of these to a user should treat it as a setup
/// problem, not a data problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ---------------------------
    // Shift configuration
    // ---------------------------
    #[error("Custom shift requires both a start and an end time (HH:MM)")]
    CustomShiftIncomplete,

    #[error("Invalid shift time '{0}': expected HH:MM")]
    InvalidShiftTime(String),

    #[error("Invalid shift hour {0}: expected 0-23")]
    InvalidShiftHour(u32),

    #[error("Invalid overnight policy '{0}': expected auto, off or HH:MM")]
    InvalidOvernightPolicy(String),

    #[error("Invalid UTC offset '{0}': expected +HH:MM or -HH:MM")]
    InvalidOffset(String),

    // ---------------------------
    // Raw events
    // ---------------------------
    #[error("Event #{index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Event #{index}: unknown action '{value}'")]
    UnknownAction { index: usize, value: String },

    #[error("Event #{index}: unparseable timestamp '{value}'")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Event for '{employee}': timestamp {timestamp} ms is outside the representable range")]
    TimestampOutOfRange { employee: String, timestamp: i64 },

    #[error("Events for different employees in one batch ('{first}' and '{other}')")]
    MixedEmployees { first: String, other: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Unsupported input format: {0} (expected .json or .csv)")]
    InvalidInputFormat(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
