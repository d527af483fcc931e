// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use crate::app::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `configured` (`[general] log_level`) if valid
/// 3. Default: `"info"`
///
/// Idempotent: only the first call takes effect.
pub fn init(configured: Option<&str>) {
    let filter = resolve_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), configured);

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    }
}

fn resolve_filter(env: Option<&str>, configured: Option<&str>) -> EnvFilter {
    [env, configured]
        .into_iter()
        .flatten()
        .filter(|directive| !directive.trim().is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_directive_wins() {
        let filter = resolve_filter(Some("warn"), Some("debug"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn configured_directive_is_used_without_environment() {
        let filter = resolve_filter(None, Some("iced_cardmaker=trace"));
        assert_eq!(filter.to_string(), "iced_cardmaker=trace");
    }

    #[test]
    fn invalid_directives_fall_back_to_default() {
        let filter = resolve_filter(Some("iced_cardmaker=bogus"), Some(""));
        assert_eq!(filter.to_string(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn init_is_idempotent() {
        init(Some("info"));
        init(Some("debug"));
    }
}
