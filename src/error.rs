// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Application-wide error type.
///
/// Every variant carries owned strings so errors can travel inside iced
/// messages, which must be `Clone`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// A required setting (the provider access key) is missing or invalid.
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// The image provider could not be reached or answered with a failure.
    #[error("Provider Error: {0}")]
    Provider(#[from] ProviderError),

    /// The element to export is not currently rendered.
    #[error("Render target missing: {0}")]
    RenderTargetMissing(String),

    /// Rasterization or PNG encoding failed.
    #[error("Export Error: {0}")]
    Export(String),

    #[error("I/O Error: {0}")]
    Io(String),

    /// The settings file could not be parsed or written.
    #[error("Config Error: {0}")]
    Config(String),
}

/// Failures reported by the image provider client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Connection, TLS or timeout failure.
    #[error("network failure: {0}")]
    Network(String),

    /// The provider answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Keyword search was called without a keyword.
    #[error("search query must not be empty")]
    InvalidQuery,
}

impl Error {
    /// Returns the i18n message key used when this error reaches a notification.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "error-missing-access-key",
            Error::Provider(_) => "error-provider-unavailable",
            Error::RenderTargetMissing(_) => "error-render-target-missing",
            Error::Export(_) => "error-export-failed",
            Error::Io(_) => "error-export-io",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_configuration_error() {
        let err = Error::Configuration("access key not set".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration Error: access key not set"
        );
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn provider_error_wraps_into_error() {
        let err: Error = ProviderError::Status {
            status: 401,
            message: "OAuth error".into(),
        }
        .into();
        assert_eq!(format!("{}", err), "Provider Error: HTTP 401: OAuth error");
    }

    #[test]
    fn config_error_from_invalid_toml() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_keys_are_distinct_per_category() {
        assert_eq!(
            Error::Configuration(String::new()).i18n_key(),
            "error-missing-access-key"
        );
        assert_ne!(
            Error::Export(String::new()).i18n_key(),
            Error::Io(String::new()).i18n_key()
        );
    }
}
