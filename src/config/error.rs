//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    /// The `domain` field is absent or empty after trailing-slash stripping.
    ///
    /// This is the only error class mapped to exit code 2; everything else
    /// propagates as an ordinary fatal error.
    #[error("missing or empty `domain` in site config")]
    MissingDomain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.json"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.json"));

        let display = format!("{}", ConfigError::MissingDomain);
        assert!(display.contains("domain"));
    }
}
