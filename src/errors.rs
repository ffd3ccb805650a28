use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Time value is empty")]
    Empty,

    #[error("Time value '{0}' has more than three ':'-separated components")]
    TooManyComponents(String),

    #[error("Invalid {component} component '{value}' in time value '{input}'")]
    InvalidComponent {
        component: &'static str,
        value: String,
        input: String,
    },

    #[error("Unknown time format '{0}'")]
    UnknownFormat(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("File I/O Error: {0}")]
    Io(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Preset Error: {0}")]
    Preset(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Share Token Error: {0}")]
    Share(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownSetting { kind: &'static str, value: String },

    #[error(transparent)]
    TimeParse(#[from] TimeParseError),
}

// Allow conversion from std::io::Error to AppError::Io
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
