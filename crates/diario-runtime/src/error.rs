use std::fmt;

/// Result type for diario-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Configuration file could not be read or written
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON (de)serialization failed
    Json(serde_json::Error),

    /// Stream message or request could not be decoded
    Message(diario_types::Error),

    /// User input rejected; the message is shown as-is
    Validation(String),

    /// CSV export failed
    Export(diario_engine::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Message(err) => write!(f, "Message error: {}", err),
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::Export(err) => write!(f, "Export error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Message(err) => Some(err),
            Error::Export(err) => Some(err),
            Error::Config(_) | Error::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<diario_types::Error> for Error {
    fn from(err: diario_types::Error) -> Self {
        Error::Message(err)
    }
}

impl From<diario_engine::Error> for Error {
    fn from(err: diario_engine::Error) -> Self {
        Error::Export(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
