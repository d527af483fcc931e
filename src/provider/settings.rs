// SPDX-License-Identifier: MPL-2.0
//! Provider credentials and connection settings, validated once at startup.

use crate::app::config::{
    ProviderConfig, DEFAULT_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS,
    MIN_PROVIDER_TIMEOUT_SECS,
};
use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// A non-empty provider access key.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Validates a raw key, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Configuration("access key is empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

/// Everything needed to build an [`super::UnsplashClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub access_key: AccessKey,
    pub base_url: String,
    pub timeout: Duration,
}

impl ProviderSettings {
    /// Resolves settings from the config file and the environment.
    ///
    /// `env_key` is the value of `UNSPLASH_ACCESS_KEY` and wins over
    /// `[provider] access_key`. Fails with [`Error::Configuration`] when
    /// neither source provides a usable key.
    pub fn resolve(config: &ProviderConfig, env_key: Option<String>) -> Result<Self> {
        let raw = env_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| config.access_key.clone())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "set {} or [provider] access_key",
                    crate::app::config::ENV_ACCESS_KEY
                ))
            })?;
        let access_key = AccessKey::parse(&raw)?;

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Configuration("provider base_url is empty".to_string()));
        }

        let timeout_secs = config
            .timeout_secs
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS)
            .clamp(MIN_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS);

        Ok(Self {
            access_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            access_key: key.map(str::to_string),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = ProviderSettings::resolve(&config_with_key(None), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn whitespace_key_is_rejected() {
        let err = ProviderSettings::resolve(&config_with_key(Some("   ")), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn environment_key_overrides_config() {
        let settings =
            ProviderSettings::resolve(&config_with_key(Some("file")), Some("env".into()))
                .expect("settings");
        assert_eq!(settings.access_key.as_str(), "env");
    }

    #[test]
    fn blank_environment_key_falls_back_to_config() {
        let settings =
            ProviderSettings::resolve(&config_with_key(Some("file")), Some(" ".into()))
                .expect("settings");
        assert_eq!(settings.access_key.as_str(), "file");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed_and_timeout_clamped() {
        let config = ProviderConfig {
            access_key: Some("k".into()),
            base_url: "http://localhost:8080/".into(),
            timeout_secs: Some(10_000),
        };
        let settings = ProviderSettings::resolve(&config, None).expect("settings");
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(
            settings.timeout,
            Duration::from_secs(MAX_PROVIDER_TIMEOUT_SECS)
        );
    }

    #[test]
    fn debug_output_redacts_key() {
        let key = AccessKey::parse("secret-value").expect("key");
        assert_eq!(format!("{:?}", key), "AccessKey(***)");
    }
}
