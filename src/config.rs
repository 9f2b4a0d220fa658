// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::path::PathBuf;

use clap::ValueEnum;
use uiprefs::{CookieJar, Environment, LocalStorage, ThemeSet};

/// Cookie jar file name inside the data directory.
const COOKIE_FILE: &str = "cookies";

/// Local storage file name inside the data directory.
const LOCAL_STORAGE_FILE: &str = "local_storage.json";

/// Which themes the theme store may switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Catalog {
    /// Dark and light only (supports toggle)
    #[default]
    Two,
    /// All seven palettes
    Extended,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for persisted preferences.
    pub data_dir: PathBuf,
    /// Preferred languages and color scheme signal.
    pub env: Environment,
    /// Available theme set.
    pub catalog: Catalog,
}

impl CliConfig {
    /// Returns the cookie jar path (language cookie).
    pub fn cookie_path(&self) -> PathBuf {
        self.data_dir.join(COOKIE_FILE)
    }

    /// Returns the local storage path (theme key).
    pub fn local_storage_path(&self) -> PathBuf {
        self.data_dir.join(LOCAL_STORAGE_FILE)
    }

    pub fn cookie_jar(&self) -> CookieJar {
        CookieJar::new(self.cookie_path())
    }

    pub fn local_storage(&self) -> LocalStorage {
        LocalStorage::new(self.local_storage_path())
    }

    pub fn theme_set(&self) -> ThemeSet {
        match self.catalog {
            Catalog::Two => ThemeSet::two_state(),
            Catalog::Extended => ThemeSet::extended(),
        }
    }
}

/// Builds the environment from CLI overrides, detecting whatever is unset.
pub fn resolve_environment(languages: &[String], prefers_dark: Option<bool>) -> Environment {
    let detected = if languages.is_empty() || prefers_dark.is_none() {
        Environment::detect()
    } else {
        Environment::default()
    };

    let preferred_languages = if languages.is_empty() {
        detected.preferred_languages
    } else {
        languages
            .iter()
            .flat_map(|tag| tag.split(','))
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    };

    Environment::new(
        preferred_languages,
        prefers_dark.unwrap_or(detected.prefers_dark),
    )
}
