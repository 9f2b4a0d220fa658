// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Internationalization wrapper for CLI
//!
//! Provides convenient string lookup for the CLI's own messages using the
//! locale store.

use uiprefs::{KeyValueStore, LanguageConfig, LocaleStore, ThemeName, Variables};

/// Message lookup bound to a locale store.
pub struct I18n<'a, S: KeyValueStore> {
    store: &'a LocaleStore<S>,
}

impl<'a, S: KeyValueStore> I18n<'a, S> {
    pub fn new(store: &'a LocaleStore<S>) -> Self {
        Self { store }
    }

    /// Get a localized string by key.
    pub fn t(&self, key: &str) -> String {
        self.store.t(key)
    }

    /// Get a localized string with argument interpolation.
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let vars: Variables = args.iter().copied().collect();
        self.store.t_with(key, &vars)
    }

    /// Localized display name of a theme.
    pub fn theme_name(&self, theme: ThemeName) -> String {
        let key = format!("themes.{}", theme.as_str());
        let name = self.t(&key);
        if name == key {
            theme.definition().display_name.to_string()
        } else {
            name
        }
    }

    /// Get info about the current language.
    pub fn info(&self) -> Option<&LanguageConfig> {
        self.store.current_config()
    }
}

// INLINE_TEST_REQUIRED: Binary crate module - message wrapper is crate-private
#[cfg(test)]
mod tests {
    use super::*;
    use uiprefs::{Environment, MemoryStore, Registry, LANGUAGE_COOKIE};

    fn store(code: &str) -> LocaleStore<MemoryStore> {
        LocaleStore::new(
            Registry::builtin().unwrap(),
            MemoryStore::new().with(LANGUAGE_COOKIE, code),
            &Environment::default(),
        )
    }

    #[test]
    fn test_translation() {
        let store = store("fr");
        let i18n = I18n::new(&store);
        assert_eq!(i18n.t("settings.title"), "Paramètres");
        assert_eq!(i18n.info().map(|c| c.code.as_str()), Some("fr"));
    }

    #[test]
    fn test_args() {
        let store = store("es");
        let i18n = I18n::new(&store);
        assert_eq!(
            i18n.t_args("settings.themeChanged", &[("theme", "Oscuro")]),
            "Tema cambiado a Oscuro"
        );
    }

    #[test]
    fn test_theme_names_fall_back_to_catalog() {
        let store = store("de");
        let i18n = I18n::new(&store);
        assert_eq!(i18n.theme_name(ThemeName::Dark), "Dunkel");
        // German has no entry, English does
        assert_eq!(i18n.theme_name(ThemeName::Ocean), "Ocean");
    }
}
