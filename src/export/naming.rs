// SPDX-License-Identifier: MPL-2.0
//! Export file names.

use crate::app::config::DEFAULT_EXPORT_FILE_STEM;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "png";

/// Returns the file name for a card signed `display_name`.
///
/// `""` gives `thank-you.png`, `"Ada"` gives `Ada.png`.
#[must_use]
pub fn export_file_name(display_name: &str) -> String {
    format!("{}.{EXTENSION}", sanitize_stem(display_name))
}

/// Makes `name` safe to use as a file stem.
///
/// Path separators, reserved punctuation and control characters become `_`.
/// Blank names and names made only of dots fall back to `thank-you`.
#[must_use]
pub fn sanitize_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        DEFAULT_EXPORT_FILE_STEM.to_string()
    } else {
        cleaned
    }
}

/// Returns `dir/file_name`, or `dir/<stem> (n).<ext>` for the lowest free `n`.
#[must_use]
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let as_path = Path::new(file_name);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXPORT_FILE_STEM.to_string());
    let extension = as_path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| EXTENSION.to_string());

    (1..)
        .map(|n| dir.join(format!("{stem} ({n}).{extension}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
