// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Theme Store
//!
//! Holds the active theme. Every accepted change is written to storage
//! first and then mirrored onto the presentation markers; [`ThemeStore::toggle`]
//! goes through [`ThemeStore::set_theme`] so both paths resync identically.

use crate::detect::Environment;
use crate::markers::{apply_theme, DocumentMarkers, PresentationTarget};
use crate::storage::KeyValueStore;
use crate::theme::{ThemeInfo, ThemeName, ThemeSet, DEFAULT_THEME};

/// Local-storage key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Picks the initial theme.
///
/// Order: persisted name still in the set, the OS dark/light preference,
/// [`DEFAULT_THEME`], and finally the first theme of the set.
pub fn initial_theme(available: &ThemeSet, persisted: Option<&str>, prefers_dark: bool) -> ThemeName {
    if let Some(theme) = persisted.and_then(|name| available.find(name)) {
        return theme;
    }
    let preferred = if prefers_dark {
        ThemeName::Dark
    } else {
        ThemeName::Light
    };
    [preferred, DEFAULT_THEME]
        .into_iter()
        .find(|theme| available.contains(*theme))
        .unwrap_or(available.names()[0])
}

/// Theme selection state bound to a storage medium and a marker target.
#[derive(Debug)]
pub struct ThemeStore<S: KeyValueStore, M: PresentationTarget = DocumentMarkers> {
    available: ThemeSet,
    storage: S,
    markers: M,
    current: ThemeName,
}

impl<S: KeyValueStore, M: PresentationTarget> ThemeStore<S, M> {
    /// Builds the store, settles its initial theme and applies its markers.
    pub fn new(available: ThemeSet, storage: S, mut markers: M, env: &Environment) -> Self {
        let persisted = load_theme(&storage);
        let current = initial_theme(&available, persisted.as_deref(), env.prefers_dark);
        apply_theme(&mut markers, current);
        tracing::debug!(theme = %current, "Theme store ready");

        Self {
            available,
            storage,
            markers,
            current,
        }
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    pub fn available(&self) -> &[ThemeName] {
        self.available.names()
    }

    pub fn theme_set(&self) -> &ThemeSet {
        &self.available
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Switches to `theme`, persists it and resyncs the markers.
    ///
    /// Themes outside the available set are ignored and `false` is returned.
    pub fn set_theme(&mut self, theme: ThemeName) -> bool {
        if !self.available.contains(theme) {
            tracing::debug!(%theme, "Ignoring theme outside the available set");
            return false;
        }

        self.current = theme;
        save_theme(&mut self.storage, theme);
        apply_theme(&mut self.markers, theme);
        tracing::debug!(%theme, "Theme applied");
        true
    }

    /// [`ThemeStore::set_theme`] for a name given as text.
    pub fn set_theme_named(&mut self, name: &str) -> bool {
        match self.available.find(name) {
            Some(theme) => self.set_theme(theme),
            None => {
                tracing::debug!(name, "Ignoring unknown theme");
                false
            }
        }
    }

    /// Flips dark and light.
    ///
    /// Only defined for the two-state set; returns `None` otherwise.
    pub fn toggle(&mut self) -> Option<ThemeName> {
        if !self.available.is_two_state() {
            tracing::warn!("Toggle requires exactly the dark and light themes");
            return None;
        }
        let next = match self.current {
            ThemeName::Dark => ThemeName::Light,
            _ => ThemeName::Dark,
        };
        self.set_theme(next).then_some(next)
    }

    /// Switches to the theme matching the OS dark/light preference.
    pub fn sync_with_system(&mut self, prefers_dark: bool) -> bool {
        let theme = if prefers_dark {
            ThemeName::Dark
        } else {
            ThemeName::Light
        };
        self.set_theme(theme)
    }

    /// Removes the persisted theme; the current theme is kept.
    ///
    /// Returns `false` when the storage medium refused the removal.
    pub fn clear_saved(&mut self) -> bool {
        match self.storage.remove(THEME_STORAGE_KEY) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Could not clear saved theme");
                false
            }
        }
    }

    /// The persisted theme name, if storage is readable and holds one.
    pub fn saved(&self) -> Option<String> {
        load_theme(&self.storage)
    }

    pub fn is_dark(&self) -> bool {
        self.current == ThemeName::Dark
    }

    pub fn is_light(&self) -> bool {
        self.current == ThemeName::Light
    }

    pub fn info(&self) -> ThemeInfo {
        ThemeInfo::for_theme(self.current)
    }

    /// Picks `dark` for the dark theme and `light` for anything else.
    pub fn theme_value<T>(&self, light: T, dark: T) -> T {
        if self.is_dark() { dark } else { light }
    }
}

fn load_theme<S: KeyValueStore>(storage: &S) -> Option<String> {
    match storage.get(THEME_STORAGE_KEY) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load saved theme");
            None
        }
    }
}

fn save_theme<S: KeyValueStore>(storage: &mut S, theme: ThemeName) {
    if let Err(e) = storage.set(THEME_STORAGE_KEY, theme.as_str()) {
        tracing::warn!(error = %e, "Could not save theme");
    }
}
