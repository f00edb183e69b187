use std::convert::From;

use crate::{app::config::ConfigError, backend::BackendError};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Config(String),
    Backend(BackendError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::Backend(e) => match e {
                BackendError::Rejected(reason) => write!(f, "Rejected by wallet: {}", reason),
                BackendError::Unexpected(e) => write!(f, "{}", e),
            },
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Error::Config(error.to_string())
    }
}

impl From<BackendError> for Error {
    fn from(error: BackendError) -> Self {
        Error::Backend(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::from(ConfigError::InvalidField(
            "log_level",
            "Unknown value 'loud'".to_string(),
        ));
        assert!(matches!(error, Error::Config(_)));
        assert!(error.to_string().starts_with("Configuration error: "));

        let error = Error::from(BackendError::Rejected("locked".to_string()));
        assert_eq!(error.to_string(), "Rejected by wallet: locked");
    }
}
