// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Language Commands
//!
//! List, inspect and change the active language.

use anyhow::Result;

use crate::commands::common::open_providers;
use crate::config::CliConfig;
use crate::display;
use crate::i18n::I18n;

/// List all registered languages.
pub fn list(config: &CliConfig) -> Result<()> {
    let providers = open_providers(config)?;
    let locale = providers.locale()?;

    println!(
        "{}",
        display::languages_table(&locale.available_languages(), locale.current_language())
    );
    Ok(())
}

/// Show the active language.
pub fn current(config: &CliConfig) -> Result<()> {
    let providers = open_providers(config)?;
    let locale = providers.locale()?;

    match locale.current_config() {
        Some(lang) => println!(
            "{} {} ({}) [{}]",
            lang.flag,
            lang.native_name,
            lang.code,
            locale.locale_tag()
        ),
        None => println!("{}", locale.current_language()),
    }
    Ok(())
}

/// Change the active language.
pub fn set(config: &CliConfig, code: &str) -> Result<()> {
    let mut providers = open_providers(config)?;
    let locale = providers.locale_mut()?;

    if !locale.set_language(code) {
        display::warning(&format!("Unknown language: {}", code));
        display::info("Use 'uiprefs language list' to see available languages");
        return Ok(());
    }

    let i18n = I18n::new(locale);
    let name = i18n
        .info()
        .map(|lang| lang.native_name.clone())
        .unwrap_or_else(|| code.to_string());
    display::success(&i18n.t_args("settings.languageChanged", &[("language", &name)]));
    Ok(())
}

/// Pick the active language interactively.
pub fn select(config: &CliConfig) -> Result<()> {
    use dialoguer::Select;

    let providers = open_providers(config)?;
    let locale = providers.locale()?;
    let languages = locale.available_languages();

    let items: Vec<String> = languages
        .iter()
        .map(|lang| format!("{} {} ({})", lang.flag, lang.native_name, lang.code))
        .collect();
    let default = languages
        .iter()
        .position(|lang| lang.code == locale.current_language())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(I18n::new(locale).t("settings.language"))
        .items(&items)
        .default(default)
        .interact()?;

    set(config, &languages[selection].code)
}
