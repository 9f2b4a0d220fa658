// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store Wiring
//!
//! Consumers receive both stores through one explicit container instead of
//! ambient globals. Reaching for a store that was never installed is a
//! wiring bug and surfaces as [`ProviderError::UsedOutsideProvider`].

use crate::error::ProviderError;
use crate::locale_store::LocaleStore;
use crate::markers::{DocumentMarkers, PresentationTarget};
use crate::storage::KeyValueStore;
use crate::theme_store::ThemeStore;

/// Container handed to consumers.
#[derive(Debug)]
pub struct Providers<L, T, M = DocumentMarkers>
where
    L: KeyValueStore,
    T: KeyValueStore,
    M: PresentationTarget,
{
    locale: Option<LocaleStore<L>>,
    theme: Option<ThemeStore<T, M>>,
}

impl<L, T, M> Default for Providers<L, T, M>
where
    L: KeyValueStore,
    T: KeyValueStore,
    M: PresentationTarget,
{
    fn default() -> Self {
        Self {
            locale: None,
            theme: None,
        }
    }
}

impl<L, T, M> Providers<L, T, M>
where
    L: KeyValueStore,
    T: KeyValueStore,
    M: PresentationTarget,
{
    /// An empty container; install stores before handing it out.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, store: LocaleStore<L>) -> Self {
        self.locale = Some(store);
        self
    }

    pub fn with_theme(mut self, store: ThemeStore<T, M>) -> Self {
        self.theme = Some(store);
        self
    }

    pub fn locale(&self) -> Result<&LocaleStore<L>, ProviderError> {
        self.locale.as_ref().ok_or(LOCALE_MISSING)
    }

    pub fn locale_mut(&mut self) -> Result<&mut LocaleStore<L>, ProviderError> {
        self.locale.as_mut().ok_or(LOCALE_MISSING)
    }

    pub fn theme(&self) -> Result<&ThemeStore<T, M>, ProviderError> {
        self.theme.as_ref().ok_or(THEME_MISSING)
    }

    pub fn theme_mut(&mut self) -> Result<&mut ThemeStore<T, M>, ProviderError> {
        self.theme.as_mut().ok_or(THEME_MISSING)
    }
}

const LOCALE_MISSING: ProviderError = ProviderError::UsedOutsideProvider {
    accessor: "locale",
    provider: "locale provider",
};

const THEME_MISSING: ProviderError = ProviderError::UsedOutsideProvider {
    accessor: "theme",
    provider: "theme provider",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Environment;
    use crate::registry::Registry;
    use crate::storage::MemoryStore;
    use crate::theme::{ThemeName, ThemeSet};

    type TestProviders = Providers<MemoryStore, MemoryStore>;

    #[test]
    fn test_missing_stores_are_hard_errors() {
        let mut providers = TestProviders::new();
        let err = providers.locale().unwrap_err();
        assert_eq!(err.to_string(), "locale must be used within a locale provider");
        assert!(providers.theme_mut().is_err());
    }

    #[test]
    fn test_installed_stores_are_independent() {
        let env = Environment::new(vec!["fr-FR".to_string()], false);
        let mut providers = TestProviders::new()
            .with_locale(LocaleStore::new(
                Registry::builtin().unwrap(),
                MemoryStore::new(),
                &env,
            ))
            .with_theme(ThemeStore::new(
                ThemeSet::two_state(),
                MemoryStore::new(),
                DocumentMarkers::new(),
                &env,
            ));

        providers.theme_mut().unwrap().toggle();
        assert_eq!(providers.theme().unwrap().current(), ThemeName::Dark);
        assert_eq!(providers.locale().unwrap().current_language(), "fr");

        providers.locale_mut().unwrap().set_language("es");
        assert_eq!(providers.theme().unwrap().current(), ThemeName::Dark);
    }
}
