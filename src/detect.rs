// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment Signals
//!
//! The stores are initialized from two inputs the host provides: the user's
//! ordered list of preferred language tags and whether the system prefers a
//! dark color scheme.

use crate::registry::FALLBACK_LANGUAGE;

/// Tag prefixes with their language codes. Unmatched tags use the fallback.
pub const LANGUAGE_PREFIXES: &[(&str, &str)] = &[
    ("pt", "pt-br"),
    ("es", "es"),
    ("fr", "fr"),
    ("de", "de"),
];

/// Host-provided initialization inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub preferred_languages: Vec<String>,
    pub prefers_dark: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            preferred_languages: Vec::new(),
            prefers_dark: true,
        }
    }
}

impl Environment {
    pub fn new(preferred_languages: Vec<String>, prefers_dark: bool) -> Self {
        Self {
            preferred_languages,
            prefers_dark,
        }
    }

    /// Reads the OS language list and the terminal color scheme.
    pub fn detect() -> Self {
        let mut preferred_languages: Vec<String> = sys_locale::get_locales().collect();
        if preferred_languages.is_empty() {
            if let Ok(lang) = std::env::var("LANG") {
                preferred_languages.push(lang);
            }
        }

        let prefers_dark = std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| prefers_dark_from_colorfgbg(&value))
            .unwrap_or(true);

        tracing::debug!(?preferred_languages, prefers_dark, "Detected environment");
        Self {
            preferred_languages,
            prefers_dark,
        }
    }
}

/// Maps one language tag to a supported code by lowercase prefix.
pub fn match_language(tag: &str) -> Option<&'static str> {
    let tag = tag.trim().to_lowercase();
    LANGUAGE_PREFIXES
        .iter()
        .find(|(prefix, _)| tag.starts_with(prefix))
        .map(|(_, code)| *code)
}

/// Maps the most preferred tag; anything unmatched gets the fallback.
///
/// Later tags are never consulted.
pub fn detect_language<S: AsRef<str>>(preferred: &[S]) -> &'static str {
    preferred
        .first()
        .and_then(|tag| match_language(tag.as_ref()))
        .unwrap_or(FALLBACK_LANGUAGE)
}

/// Interprets `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background palette indices 0-6 and 8 are dark.
pub fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
