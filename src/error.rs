use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f64 },
    InvalidWidthRange { min: f64, max: f64 },
    InvalidList { field: &'static str, value: String },
    UnknownDirection(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
            Self::InvalidWidthRange { min, max } => {
                write!(f, "min width {min} is larger than max width {max}")
            }
            Self::InvalidList { field, value } => write!(f, "cannot parse {field}: {value:?}"),
            Self::UnknownDirection(name) => {
                write!(f, "unknown direction {name:?} (expected left, right, up or down)")
            }
        }
    }
}

impl StdError for ConfigError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Config(ConfigError),
    /// The host surface is too small to hold a grid viewport.
    Viewport { width: u16, height: u16 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::Viewport { width, height } => {
                write!(f, "Terminal too small for a grid viewport ({width}x{height})")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Viewport { .. } => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
