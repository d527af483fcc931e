// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Provider**: Image API endpoint, credential source, timeouts
//! - **Export**: Rasterization scale and file naming
//! - **Logging**: Default tracing filter

// ==========================================================================
// Provider Defaults
// ==========================================================================

/// Base URL of the Unsplash REST API.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.unsplash.com";

/// Environment variable holding the provider access key.
/// Takes precedence over `[provider] access_key` in `settings.toml`.
pub const ENV_ACCESS_KEY: &str = "UNSPLASH_ACCESS_KEY";

/// Default HTTP timeout for provider requests (in seconds).
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 15;

/// Minimum provider timeout (in seconds).
pub const MIN_PROVIDER_TIMEOUT_SECS: u64 = 1;

/// Maximum provider timeout (in seconds).
pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Default rasterization scale (2x, matching a high-DPI screenshot).
pub const DEFAULT_EXPORT_SCALE: f32 = 2.0;

/// Minimum rasterization scale.
pub const MIN_EXPORT_SCALE: f32 = 1.0;

/// Maximum rasterization scale.
pub const MAX_EXPORT_SCALE: f32 = 4.0;

/// File stem used when the user did not enter a name.
pub const DEFAULT_EXPORT_FILE_STEM: &str = "thank-you";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_EXPORT_SCALE <= DEFAULT_EXPORT_SCALE);
    assert!(DEFAULT_EXPORT_SCALE <= MAX_EXPORT_SCALE);
    assert!(MIN_PROVIDER_TIMEOUT_SECS <= DEFAULT_PROVIDER_TIMEOUT_SECS);
    assert!(DEFAULT_PROVIDER_TIMEOUT_SECS <= MAX_PROVIDER_TIMEOUT_SECS);
};
