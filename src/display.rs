// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style as TableStyle},
    Table, Tabled,
};
use uiprefs::{DocumentMarkers, LanguageConfig, ThemeDefinition, ThemeName};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Row structure for language table display.
#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "")]
    current: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Flag")]
    flag: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Native")]
    native_name: String,
    #[tabled(rename = "Locale")]
    locale: String,
}

/// Renders the language list as a table, marking the current language.
pub fn languages_table(languages: &[LanguageConfig], current: &str) -> String {
    let rows: Vec<LanguageRow> = languages
        .iter()
        .map(|lang| LanguageRow {
            current: if lang.code == current { "*" } else { "" }.to_string(),
            code: lang.code.clone(),
            flag: lang.flag.clone(),
            name: lang.name.clone(),
            native_name: lang.native_name.clone(),
            locale: lang.locale.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    Table::new(rows)
        .with(TableStyle::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::center()))
        .to_string()
}

/// Row structure for theme table display.
#[derive(Tabled)]
struct ThemeRow {
    #[tabled(rename = "")]
    current: String,
    #[tabled(rename = "Theme")]
    name: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Display name")]
    display_name: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Renders the available themes, with `names` giving localized display names.
pub fn themes_table(themes: &[(ThemeName, String)], current: ThemeName) -> String {
    let rows: Vec<ThemeRow> = themes
        .iter()
        .map(|(theme, display_name)| ThemeRow {
            current: if *theme == current { "*" } else { "" }.to_string(),
            name: theme.as_str().to_string(),
            icon: theme.definition().icon.to_string(),
            display_name: display_name.clone(),
            category: format!("{:?}", theme.category()).to_lowercase(),
        })
        .collect();

    Table::new(rows)
        .with(TableStyle::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::center()))
        .to_string()
}

/// Row structure for color-role display.
#[derive(Tabled)]
struct ColorRow {
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "HSL")]
    value: String,
}

/// Displays a theme definition with its color roles and the document markers.
pub fn display_theme(def: &ThemeDefinition, display_name: &str, markers: &DocumentMarkers) {
    println!();
    println!(
        "  {} {}",
        def.icon,
        style(display_name).bold().cyan()
    );
    println!("  {}", style(def.description).dim());
    println!();

    let rows: Vec<ColorRow> = def
        .colors
        .roles()
        .iter()
        .map(|(role, value)| ColorRow {
            role: format!("--{}", role),
            value: value.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows).with(TableStyle::psql()));
    println!();
    println!("{}", style("Document markers").bold());
    for line in markers.to_string().lines() {
        println!("  {}", style(line).dim());
    }
    println!();
}
