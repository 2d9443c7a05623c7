use thiserror::Error;

/// Errors raised by the seating grid and its session store.
///
/// Business-rule refusals (selecting a taken seat, reserving with nothing
/// selected) are not errors: those operations are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("invalid seating configuration: {0}")]
    InvalidConfiguration(String),

    #[error("seat '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("class '{0}' not found")]
    NotFound(String),

    #[error("class '{0}' is full")]
    Full(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("configuration out of range: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Layout(#[from] SeatingError),
}
