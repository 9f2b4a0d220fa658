// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Theme Commands
//!
//! List, inspect and change the active theme.

use anyhow::{bail, Result};
use uiprefs::markers::apply_theme;
use uiprefs::{DocumentMarkers, KeyValueStore, ThemeName, ThemeStore};

use crate::commands::common::open_providers;
use crate::config::CliConfig;
use crate::display;
use crate::i18n::I18n;

fn changed_message<S: KeyValueStore>(i18n: &I18n<'_, S>, theme: ThemeName) -> String {
    i18n.t_args(
        "settings.themeChanged",
        &[("theme", &i18n.theme_name(theme))],
    )
}

fn describe<S: KeyValueStore, T: KeyValueStore>(
    store: &ThemeStore<T>,
    i18n: &I18n<'_, S>,
) -> String {
    let info = store.info();
    format!(
        "{} {} ({}, {})",
        store.current().definition().icon,
        i18n.theme_name(store.current()),
        store.current(),
        info.primary
    )
}

/// List the themes of the configured catalog.
pub fn list(config: &CliConfig) -> Result<()> {
    let providers = open_providers(config)?;
    let i18n = I18n::new(providers.locale()?);
    let store = providers.theme()?;

    let themes: Vec<(ThemeName, String)> = store
        .available()
        .iter()
        .map(|&theme| (theme, i18n.theme_name(theme)))
        .collect();
    println!("{}", display::themes_table(&themes, store.current()));
    Ok(())
}

/// Show the active theme.
pub fn current(config: &CliConfig) -> Result<()> {
    let providers = open_providers(config)?;
    let i18n = I18n::new(providers.locale()?);
    let store = providers.theme()?;

    println!("{}", describe(store, &i18n));
    if store.saved().is_none() {
        display::info("Not saved yet; derived from the system color scheme");
    }
    Ok(())
}

/// Change the active theme.
pub fn set(config: &CliConfig, name: &str) -> Result<()> {
    let mut providers = open_providers(config)?;

    let applied = providers.theme_mut()?.set_theme_named(name);
    if !applied {
        display::warning(&format!("Theme not available: {}", name));
        display::info("Use 'uiprefs theme list' to see available themes");
        return Ok(());
    }

    let theme = providers.theme()?.current();
    let i18n = I18n::new(providers.locale()?);
    display::success(&changed_message(&i18n, theme));
    Ok(())
}

/// Flip between dark and light.
pub fn toggle(config: &CliConfig) -> Result<()> {
    let mut providers = open_providers(config)?;

    let Some(theme) = providers.theme_mut()?.toggle() else {
        bail!("Toggle only works with the two-state catalog (dark and light)");
    };

    let i18n = I18n::new(providers.locale()?);
    display::success(&changed_message(&i18n, theme));
    Ok(())
}

/// Switch to the theme matching the system color scheme.
pub fn sync_system(config: &CliConfig) -> Result<()> {
    let mut providers = open_providers(config)?;
    let prefers_dark = config.env.prefers_dark;

    if !providers.theme_mut()?.sync_with_system(prefers_dark) {
        display::warning("The system theme is not part of the configured catalog");
        return Ok(());
    }

    let theme = providers.theme()?.current();
    let i18n = I18n::new(providers.locale()?);
    display::success(&changed_message(&i18n, theme));
    Ok(())
}

/// Forget the saved theme so the next start follows the system again.
pub fn reset(config: &CliConfig) -> Result<()> {
    let mut providers = open_providers(config)?;
    if providers.theme_mut()?.clear_saved() {
        display::success("Saved theme cleared");
    } else {
        display::warning("Could not clear the saved theme");
    }
    Ok(())
}

/// Show the palette of a theme (the active one by default).
pub fn show(config: &CliConfig, name: Option<&str>) -> Result<()> {
    let providers = open_providers(config)?;
    let i18n = I18n::new(providers.locale()?);
    let store = providers.theme()?;

    let theme = match name {
        Some(name) => name.parse::<ThemeName>()?,
        None => store.current(),
    };

    let mut markers = DocumentMarkers::new();
    apply_theme(&mut markers, theme);
    display::display_theme(theme.definition(), &i18n.theme_name(theme), &markers);
    Ok(())
}

/// Pick the active theme interactively.
pub fn select(config: &CliConfig) -> Result<()> {
    use dialoguer::Select;

    let providers = open_providers(config)?;
    let i18n = I18n::new(providers.locale()?);
    let store = providers.theme()?;
    let themes = store.available().to_vec();

    let items: Vec<String> = themes
        .iter()
        .map(|&theme| format!("{} {}", theme.definition().icon, i18n.theme_name(theme)))
        .collect();
    let default = themes
        .iter()
        .position(|&theme| theme == store.current())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(i18n.t("settings.theme"))
        .items(&items)
        .default(default)
        .interact()?;

    set(config, themes[selection].as_str())
}
