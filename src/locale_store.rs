// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locale Store
//!
//! Holds the active language code. The code is chosen once at construction
//! (persisted cookie, then preferred-language detection, then the fallback
//! language) and changes only through [`LocaleStore::set_language`], which
//! validates the code against the registry and persists it.

use crate::detect::{detect_language, Environment};
use crate::format::{DateFormatter, DateInput, DateTimeOptions, FormatMode};
use crate::registry::{LanguageConfig, Registry, DEFAULT_LOCALE_TAG};
use crate::resolve::{self, Variables};
use crate::storage::KeyValueStore;

/// Cookie holding the selected language code.
pub const LANGUAGE_COOKIE: &str = "language";

/// Picks the initial language code.
///
/// A persisted code wins when the registry knows it; otherwise the preferred
/// tags are matched by prefix. Registries without the detected code fall
/// back to their fallback language.
pub fn initial_language<S: AsRef<str>>(
    registry: &Registry,
    persisted: Option<&str>,
    preferred: &[S],
) -> String {
    if let Some(code) = persisted.filter(|code| registry.contains(code)) {
        return code.to_string();
    }
    let detected = detect_language(preferred);
    if registry.contains(detected) {
        detected.to_string()
    } else {
        registry.fallback_code().to_string()
    }
}

/// Language selection state with translation and formatting helpers.
#[derive(Debug)]
pub struct LocaleStore<S: KeyValueStore> {
    registry: Registry,
    storage: S,
    current: String,
}

impl<S: KeyValueStore> LocaleStore<S> {
    /// Builds the store and settles its initial language.
    ///
    /// A storage read failure is logged and treated as "nothing persisted".
    pub fn new(registry: Registry, storage: S, env: &Environment) -> Self {
        let persisted = match storage.get(LANGUAGE_COOKIE) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read saved language");
                None
            }
        };
        let current = initial_language(&registry, persisted.as_deref(), &env.preferred_languages);
        tracing::debug!(language = %current, "Locale store ready");

        Self {
            registry,
            storage,
            current,
        }
    }

    /// The active language code.
    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn current_config(&self) -> Option<&LanguageConfig> {
        self.registry.config(&self.current)
    }

    pub fn available_languages(&self) -> Vec<LanguageConfig> {
        self.registry.list_available()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Switches to `code` and persists it.
    ///
    /// Unknown codes are ignored and `false` is returned. A failed write is
    /// logged; the new language still applies for this session.
    pub fn set_language(&mut self, code: &str) -> bool {
        if !self.registry.contains(code) {
            tracing::debug!(code, "Ignoring unknown language");
            return false;
        }

        self.current = code.to_string();
        if let Err(e) = self.storage.set(LANGUAGE_COOKIE, code) {
            tracing::warn!(error = %e, "Could not save language");
        }
        true
    }

    /// Translates `key` with the active language, falling back to the
    /// registry's fallback language, then to the key itself.
    pub fn translate(&self, key: &str, variables: Option<&Variables>) -> String {
        resolve::resolve(
            self.registry.get(&self.current),
            key,
            self.registry.fallback_dictionary(),
            variables,
        )
    }

    /// Shorthand for [`LocaleStore::translate`] without variables.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None)
    }

    /// Shorthand for [`LocaleStore::translate`] with variables.
    pub fn t_with(&self, key: &str, variables: &Variables) -> String {
        self.translate(key, Some(variables))
    }

    /// Locale tag of the active language, or `en-US` when it has none.
    pub fn locale_tag(&self) -> &str {
        self.current_config()
            .and_then(|config| config.locale.as_deref())
            .unwrap_or(DEFAULT_LOCALE_TAG)
    }

    pub fn formatter(&self) -> DateFormatter {
        DateFormatter::for_tag(self.locale_tag())
    }

    pub fn format_date(
        &self,
        value: impl Into<DateInput>,
        options: Option<&DateTimeOptions>,
    ) -> String {
        self.formatter()
            .format(&value.into(), FormatMode::Date, options)
    }

    pub fn format_date_time(
        &self,
        value: impl Into<DateInput>,
        options: Option<&DateTimeOptions>,
    ) -> String {
        self.formatter()
            .format(&value.into(), FormatMode::DateTime, options)
    }

    pub fn format_time(
        &self,
        value: impl Into<DateInput>,
        options: Option<&DateTimeOptions>,
    ) -> String {
        self.formatter()
            .format(&value.into(), FormatMode::Time, options)
    }
}
