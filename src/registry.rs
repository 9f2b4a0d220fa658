// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dictionary Registry
//!
//! Maps language codes to display metadata and a translation dictionary.
//! Built once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::error::DictionaryError;

/// Language used when the active dictionary lacks a key.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Locale tag used for formatting when a language has none.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

/// Embedded language files, in the order they are listed to users.
const BUILTIN_LANGUAGE_FILES: &[(&str, &str)] = &[
    ("pt-br", include_str!("../locales/pt-br.json")),
    ("en", include_str!("../locales/en.json")),
    ("es", include_str!("../locales/es.json")),
    ("fr", include_str!("../locales/fr.json")),
    ("de", include_str!("../locales/de.json")),
];

/// Display metadata for a registered language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// On-disk shape of a language file.
#[derive(Debug, Deserialize)]
struct LanguageFile {
    config: LanguageConfig,
    translations: serde_json::Value,
}

#[derive(Debug, Clone)]
struct Entry {
    config: LanguageConfig,
    dictionary: Dictionary,
}

/// Ordered set of languages with one designated fallback.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
    fallback: String,
}

impl Registry {
    /// Creates an empty registry that falls back to `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// The five builtin languages with English as the fallback.
    pub fn builtin() -> Result<Self, DictionaryError> {
        let mut registry = Self::new(FALLBACK_LANGUAGE);
        for (code, source) in BUILTIN_LANGUAGE_FILES {
            registry.register_json(code, source)?;
        }
        Ok(registry)
    }

    /// Adds a language, replacing an existing entry for the same code in place.
    pub fn register(&mut self, config: LanguageConfig, dictionary: Dictionary) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.config.code == config.code)
        {
            Some(entry) => {
                entry.config = config;
                entry.dictionary = dictionary;
            }
            None => self.entries.push(Entry { config, dictionary }),
        }
    }

    /// Parses a `{ "config": ..., "translations": ... }` language file.
    pub fn register_json(&mut self, code: &str, source: &str) -> Result<(), DictionaryError> {
        let file: LanguageFile =
            serde_json::from_str(source).map_err(|source| DictionaryError::Parse {
                code: code.to_string(),
                source,
            })?;
        let dictionary = Dictionary::from_value(&file.config.code, &file.translations)?;
        self.register(file.config, dictionary);
        Ok(())
    }

    /// Returns the dictionary for `code`.
    pub fn get(&self, code: &str) -> Option<&Dictionary> {
        self.entry(code).map(|entry| &entry.dictionary)
    }

    /// Returns the metadata for `code`.
    pub fn config(&self, code: &str) -> Option<&LanguageConfig> {
        self.entry(code).map(|entry| &entry.config)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// All registered languages in registration order.
    pub fn list_available(&self) -> Vec<LanguageConfig> {
        self.entries.iter().map(|entry| entry.config.clone()).collect()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.config.code.as_str())
    }

    pub fn fallback_code(&self) -> &str {
        &self.fallback
    }

    /// Dictionary of the fallback language, if it is registered.
    pub fn fallback_dictionary(&self) -> Option<&Dictionary> {
        self.get(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, code: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.config.code == code)
    }
}
