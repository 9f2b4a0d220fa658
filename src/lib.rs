// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! uiprefs
//!
//! Language and theme preference stores: nested-key translation lookup with a
//! single fallback language, `{{variable}}` interpolation, locale-aware date
//! formatting, and a theme selector that mirrors its value onto document
//! presentation markers. Both stores persist one raw value in a key-value
//! medium and initialize from it, then from environment signals.

pub mod context;
pub mod detect;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod locale_store;
pub mod markers;
pub mod registry;
pub mod resolve;
pub mod storage;
pub mod theme;
pub mod theme_store;

pub use context::Providers;
pub use detect::Environment;
pub use dictionary::{Dictionary, Lookup, Node};
pub use error::{DictionaryError, ProviderError, StorageError, UnknownTheme};
pub use format::{DateFormatter, DateInput, DateTimeOptions, FormatMode, MonthStyle, NumberStyle};
pub use locale_store::{LocaleStore, LANGUAGE_COOKIE};
pub use markers::{DocumentMarkers, Element, PresentationTarget};
pub use registry::{LanguageConfig, Registry};
pub use resolve::{resolve, VarValue, Variables};
pub use storage::{CookieJar, KeyValueStore, LocalStorage, MemoryStore};
pub use theme::{ThemeCategory, ThemeDefinition, ThemeInfo, ThemeName, ThemeSet};
pub use theme_store::{ThemeStore, THEME_STORAGE_KEY};
