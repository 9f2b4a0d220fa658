// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Consumer contract tests: what a front end relies on from the public API.
//!
//! Contract scope:
//!   - both stores may share one storage medium without touching each other's keys
//!   - initial state comes from storage, then environment, then defaults
//!   - rejected mutations neither change state nor write
//!   - markers always describe exactly one theme
//!   - a blocked storage medium never breaks either store

use std::cell::RefCell;
use std::rc::Rc;

use uiprefs::{
    DocumentMarkers, Element, Environment, KeyValueStore, LocaleStore, MemoryStore, Providers,
    Registry, ThemeName, ThemeSet, ThemeStore, Variables, LANGUAGE_COOKIE, THEME_STORAGE_KEY,
};

type Shared = Rc<RefCell<MemoryStore>>;

fn providers(medium: &Shared, env: &Environment) -> Providers<Shared, Shared> {
    Providers::new()
        .with_locale(LocaleStore::new(
            Registry::builtin().unwrap(),
            Rc::clone(medium),
            env,
        ))
        .with_theme(ThemeStore::new(
            ThemeSet::two_state(),
            Rc::clone(medium),
            DocumentMarkers::new(),
            env,
        ))
}

// ============================================================
// Contract: shared medium, disjoint keys
// ============================================================

#[test]
fn contract_stores_use_disjoint_keys() {
    let medium = Shared::default();
    let env = Environment::new(vec!["en-US".into()], true);
    let mut p = providers(&medium, &env);

    p.locale_mut().unwrap().set_language("es");
    p.theme_mut().unwrap().set_theme(ThemeName::Light);

    let stored = medium.borrow();
    assert_eq!(stored.get(LANGUAGE_COOKIE).unwrap().as_deref(), Some("es"));
    assert_eq!(stored.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(stored.writes(), 2);
}

#[test]
fn contract_state_survives_restart() {
    let medium = Shared::default();
    let env = Environment::new(vec!["en-US".into()], true);
    {
        let mut p = providers(&medium, &env);
        p.locale_mut().unwrap().set_language("pt-br");
        p.theme_mut().unwrap().toggle();
    }

    let p = providers(&medium, &env);
    assert_eq!(p.locale().unwrap().current_language(), "pt-br");
    assert_eq!(p.theme().unwrap().current(), ThemeName::Light);
    assert_eq!(p.locale().unwrap().t("themes.light"), "Claro");
}

// ============================================================
// Contract: initialization order
// ============================================================

#[test]
fn contract_environment_used_when_nothing_persisted() {
    let medium = Shared::default();
    let env = Environment::new(vec!["fr-CA".into(), "de".into()], false);
    let p = providers(&medium, &env);

    assert_eq!(p.locale().unwrap().current_language(), "fr");
    assert_eq!(p.theme().unwrap().current(), ThemeName::Light);
    // Initialization alone never writes
    assert_eq!(medium.borrow().writes(), 0);
}

#[test]
fn contract_only_the_most_preferred_language_is_matched() {
    let medium = Shared::default();
    let env = Environment::new(vec!["ja-JP".into(), "fr-FR".into()], true);
    let p = providers(&medium, &env);

    assert_eq!(p.locale().unwrap().current_language(), "en");
}

#[test]
fn contract_stale_persisted_values_are_ignored() {
    let medium: Shared = Rc::new(RefCell::new(
        MemoryStore::new()
            .with(LANGUAGE_COOKIE, "klingon")
            .with(THEME_STORAGE_KEY, "sunset"),
    ));
    let env = Environment::new(vec!["de".into()], true);
    let p = providers(&medium, &env);

    assert_eq!(p.locale().unwrap().current_language(), "de");
    assert_eq!(p.theme().unwrap().current(), ThemeName::Dark);
}

// ============================================================
// Contract: rejected mutations
// ============================================================

#[test]
fn contract_rejected_mutations_do_not_write() {
    let medium = Shared::default();
    let env = Environment::default();
    let mut p = providers(&medium, &env);

    assert!(!p.locale_mut().unwrap().set_language("xx"));
    assert!(!p.theme_mut().unwrap().set_theme(ThemeName::Forest));
    assert!(!p.theme_mut().unwrap().set_theme_named("not-a-theme"));

    assert_eq!(medium.borrow().writes(), 0);
    assert_eq!(p.locale().unwrap().current_language(), "en");
    assert_eq!(p.theme().unwrap().current(), ThemeName::Dark);
}

// ============================================================
// Contract: markers
// ============================================================

#[test]
fn contract_markers_track_exactly_one_theme() {
    let medium = Shared::default();
    let env = Environment::default();
    let mut p = providers(&medium, &env);

    for _ in 0..3 {
        let theme = p.theme_mut().unwrap().toggle().unwrap();
        let markers = p.theme().unwrap().markers();
        assert_eq!(markers.active_themes(), vec![theme]);
        assert_eq!(markers.attribute(Element::Root, "data-theme"), Some(theme.as_str()));
        assert_eq!(markers.has_class(Element::Root, "dark"), theme == ThemeName::Dark);
    }
}

// ============================================================
// Contract: blocked storage
// ============================================================

#[test]
fn contract_blocked_storage_degrades_to_memory_state() {
    let medium: Shared = Rc::new(RefCell::new(MemoryStore::disabled()));
    let env = Environment::new(vec!["es-MX".into()], false);
    let mut p = providers(&medium, &env);

    assert_eq!(p.locale().unwrap().current_language(), "es");
    assert_eq!(p.theme().unwrap().current(), ThemeName::Light);

    assert!(p.locale_mut().unwrap().set_language("fr"));
    assert_eq!(p.theme_mut().unwrap().toggle(), Some(ThemeName::Dark));
    assert_eq!(p.locale().unwrap().current_language(), "fr");
    assert_eq!(p.theme().unwrap().current(), ThemeName::Dark);
}

// ============================================================
// Contract: resolution through the store
// ============================================================

#[test]
fn contract_translation_falls_back_then_echoes_key() {
    let medium = Shared::default();
    let env = Environment::new(vec!["de".into()], true);
    let p = providers(&medium, &env);
    let locale = p.locale().unwrap();

    let vars = Variables::new().with("name", "Ada");
    assert_eq!(locale.t_with("welcome.greeting", &vars), "Hallo, Ada!");

    let vars = Variables::new().with("seconds", 5);
    assert_eq!(
        locale.t_with("errors.timeout", &vars),
        "The request timed out after 5 seconds"
    );

    assert_eq!(locale.t("no.such.key"), "no.such.key");
    // A branch is not a string
    assert_eq!(locale.t("settings"), "settings");
}
