// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use uiprefs::{CookieJar, DocumentMarkers, LocalStorage, LocaleStore, Providers, Registry, ThemeStore};

use crate::config::CliConfig;

/// Stores as wired for the CLI: cookie jar for language, local storage for theme.
pub(crate) type CliProviders = Providers<CookieJar, LocalStorage>;

/// Builds the locale store from the builtin registry and the cookie jar.
pub(crate) fn open_locale(config: &CliConfig) -> Result<LocaleStore<CookieJar>> {
    let registry = Registry::builtin().context("Failed to load builtin dictionaries")?;
    Ok(LocaleStore::new(registry, config.cookie_jar(), &config.env))
}

/// Builds the theme store over local storage with fresh document markers.
pub(crate) fn open_theme(config: &CliConfig) -> ThemeStore<LocalStorage> {
    ThemeStore::new(
        config.theme_set(),
        config.local_storage(),
        DocumentMarkers::new(),
        &config.env,
    )
}

/// Installs both stores.
///
/// Every command reads its stores through this container.
pub(crate) fn open_providers(config: &CliConfig) -> Result<CliProviders> {
    Ok(CliProviders::new()
        .with_locale(open_locale(config)?)
        .with_theme(open_theme(config)))
}
