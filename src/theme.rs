// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Theme Catalog
//!
//! Seven named palettes, each a complete table of color-role tokens
//! (HSL triplets such as `"222.2 84% 4.9%"`) plus display metadata.
//! Every [`ThemeName`] maps to exactly one [`ThemeDefinition`], and every
//! role in [`ThemeColors`] is a required field, so a partial theme cannot be
//! expressed.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTheme;

/// Theme applied when nothing else decides.
pub const DEFAULT_THEME: ThemeName = ThemeName::Dark;

/// Light theme used when a light palette is needed.
pub const DEFAULT_LIGHT_THEME: ThemeName = ThemeName::Light;

/// Identifier of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeName {
    Light,
    Minimal,
    Dark,
    Dracula,
    Ocean,
    Forest,
    Sunset,
}

impl ThemeName {
    /// Every theme, light palettes first.
    pub const ALL: [ThemeName; 7] = [
        ThemeName::Light,
        ThemeName::Minimal,
        ThemeName::Dark,
        ThemeName::Dracula,
        ThemeName::Ocean,
        ThemeName::Forest,
        ThemeName::Sunset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Minimal => "minimal",
            ThemeName::Dark => "dark",
            ThemeName::Dracula => "dracula",
            ThemeName::Ocean => "ocean",
            ThemeName::Forest => "forest",
            ThemeName::Sunset => "sunset",
        }
    }

    /// Per-theme CSS class, e.g. `dark-theme`.
    pub fn css_class(self) -> String {
        format!("{}-theme", self.as_str())
    }

    pub fn definition(self) -> &'static ThemeDefinition {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Minimal => &MINIMAL,
            ThemeName::Dark => &DARK,
            ThemeName::Dracula => &DRACULA,
            ThemeName::Ocean => &OCEAN,
            ThemeName::Forest => &FOREST,
            ThemeName::Sunset => &SUNSET,
        }
    }

    pub fn category(self) -> ThemeCategory {
        self.definition().category
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Whether a palette is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCategory {
    Light,
    Dark,
}

/// Color-role tokens of one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub card_foreground: &'static str,
    pub popover: &'static str,
    pub popover_foreground: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub secondary: &'static str,
    pub secondary_foreground: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub accent: &'static str,
    pub accent_foreground: &'static str,
    pub destructive: &'static str,
    pub destructive_foreground: &'static str,
    pub border: &'static str,
    pub input: &'static str,
    pub ring: &'static str,
    pub chart1: &'static str,
    pub chart2: &'static str,
    pub chart3: &'static str,
    pub chart4: &'static str,
    pub chart5: &'static str,
}

impl ThemeColors {
    /// `(role, value)` pairs using the CSS custom-property role names.
    pub fn roles(&self) -> [(&'static str, &'static str); 24] {
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("card-foreground", self.card_foreground),
            ("popover", self.popover),
            ("popover-foreground", self.popover_foreground),
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("secondary", self.secondary),
            ("secondary-foreground", self.secondary_foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("accent", self.accent),
            ("accent-foreground", self.accent_foreground),
            ("destructive", self.destructive),
            ("destructive-foreground", self.destructive_foreground),
            ("border", self.border),
            ("input", self.input),
            ("ring", self.ring),
            ("chart-1", self.chart1),
            ("chart-2", self.chart2),
            ("chart-3", self.chart3),
            ("chart-4", self.chart4),
            ("chart-5", self.chart5),
        ]
    }
}

/// A palette with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub name: ThemeName,
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: ThemeCategory,
    pub colors: ThemeColors,
}

/// All definitions in catalog order.
pub fn all_themes() -> impl Iterator<Item = &'static ThemeDefinition> {
    ThemeName::ALL.into_iter().map(ThemeName::definition)
}

pub fn themes_by_category(category: ThemeCategory) -> Vec<&'static ThemeDefinition> {
    all_themes().filter(|t| t.category == category).collect()
}

/// The set of themes a store may switch between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    names: Vec<ThemeName>,
}

impl ThemeSet {
    /// `{dark, light}`, the only set that supports toggling.
    pub fn two_state() -> Self {
        Self {
            names: vec![ThemeName::Dark, ThemeName::Light],
        }
    }

    /// The full seven-theme catalog.
    pub fn extended() -> Self {
        Self {
            names: ThemeName::ALL.to_vec(),
        }
    }

    /// A custom set; duplicates are dropped, first occurrence wins.
    ///
    /// Returns `None` for an empty set.
    pub fn from_names(names: impl IntoIterator<Item = ThemeName>) -> Option<Self> {
        let mut unique = Vec::new();
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        (!unique.is_empty()).then_some(Self { names: unique })
    }

    pub fn contains(&self, name: ThemeName) -> bool {
        self.names.contains(&name)
    }

    /// Looks up a name given as a string.
    pub fn find(&self, name: &str) -> Option<ThemeName> {
        self.names.iter().copied().find(|t| t.as_str() == name)
    }

    /// Non-empty by construction.
    pub fn names(&self) -> &[ThemeName] {
        &self.names
    }

    /// True when the set is exactly `{dark, light}`.
    pub fn is_two_state(&self) -> bool {
        self.names.len() == 2
            && self.contains(ThemeName::Dark)
            && self.contains(ThemeName::Light)
    }
}

/// Summary of a theme for settings screens.
///
/// `primary` and `background` are always `#rrggbb` swatches. Dark and light
/// carry hand-picked swatches; the other palettes convert their HSL tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub class: String,
    pub primary: String,
    pub background: String,
}

impl ThemeInfo {
    pub fn for_theme(theme: ThemeName) -> Self {
        let def = theme.definition();
        let (primary, background) = match theme {
            ThemeName::Dark => ("#3b82f6".to_string(), "#0f172a".to_string()),
            ThemeName::Light => ("#2563eb".to_string(), "#ffffff".to_string()),
            _ => (
                swatch(def.colors.primary),
                swatch(def.colors.background),
            ),
        };
        Self {
            name: def.display_name,
            description: def.description,
            icon: def.icon,
            class: theme.css_class(),
            primary,
            background,
        }
    }
}

fn swatch(token: &str) -> String {
    hsl_to_hex(token).unwrap_or_else(|| token.to_string())
}

/// Converts an HSL token such as `"222.2 84% 4.9%"` to `#rrggbb`.
pub fn hsl_to_hex(token: &str) -> Option<String> {
    let mut parts = token.split_whitespace();
    let hue: f64 = parts.next()?.parse().ok()?;
    let saturation = percent(parts.next()?)?;
    let lightness = percent(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Some(format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b)))
}

fn percent(text: &str) -> Option<f64> {
    let value: f64 = text.strip_suffix('%')?.parse().ok()?;
    Some(value / 100.0)
}

const LIGHT: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Light,
    display_name: "Light",
    description: "Default light theme with good readability",
    icon: "☀️",
    category: ThemeCategory::Light,
    colors: ThemeColors {
        background: "0 0% 100%",
        foreground: "222.2 84% 4.9%",
        card: "0 0% 100%",
        card_foreground: "222.2 84% 4.9%",
        popover: "0 0% 100%",
        popover_foreground: "222.2 84% 4.9%",
        primary: "221.2 83.2% 53.3%",
        primary_foreground: "210 40% 98%",
        secondary: "210 40% 96%",
        secondary_foreground: "222.2 84% 4.9%",
        muted: "210 40% 96%",
        muted_foreground: "215.4 16.3% 46.9%",
        accent: "210 40% 96%",
        accent_foreground: "222.2 84% 4.9%",
        destructive: "0 84.2% 60.2%",
        destructive_foreground: "210 40% 98%",
        border: "214.3 31.8% 91.4%",
        input: "214.3 31.8% 91.4%",
        ring: "221.2 83.2% 53.3%",
        chart1: "12 76% 61%",
        chart2: "173 58% 39%",
        chart3: "197 37% 24%",
        chart4: "43 74% 66%",
        chart5: "27 87% 67%",
    },
};

const MINIMAL: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Minimal,
    display_name: "Minimal",
    description: "Minimalist theme with neutral colors",
    icon: "⚪",
    category: ThemeCategory::Light,
    colors: ThemeColors {
        background: "0 0% 100%",
        foreground: "0 0% 10%",
        card: "0 0% 98%",
        card_foreground: "0 0% 10%",
        popover: "0 0% 98%",
        popover_foreground: "0 0% 10%",
        primary: "210 100% 50%",
        primary_foreground: "0 0% 100%",
        secondary: "0 0% 96%",
        secondary_foreground: "0 0% 10%",
        muted: "0 0% 96%",
        muted_foreground: "0 0% 50%",
        accent: "0 0% 96%",
        accent_foreground: "0 0% 10%",
        destructive: "0 100% 50%",
        destructive_foreground: "0 0% 100%",
        border: "0 0% 90%",
        input: "0 0% 90%",
        ring: "210 100% 50%",
        chart1: "210 100% 50%",
        chart2: "120 100% 40%",
        chart3: "0 100% 50%",
        chart4: "60 100% 50%",
        chart5: "300 100% 50%",
    },
};

const DARK: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Dark,
    display_name: "Dark",
    description: "Default dark theme to reduce eye strain",
    icon: "🌙",
    category: ThemeCategory::Dark,
    colors: ThemeColors {
        background: "222.2 84% 4.9%",
        foreground: "210 40% 98%",
        card: "222.2 84% 4.9%",
        card_foreground: "210 40% 98%",
        popover: "222.2 84% 4.9%",
        popover_foreground: "210 40% 98%",
        primary: "217.2 91.2% 59.8%",
        primary_foreground: "222.2 84% 4.9%",
        secondary: "217.2 32.6% 17.5%",
        secondary_foreground: "210 40% 98%",
        muted: "217.2 32.6% 17.5%",
        muted_foreground: "215 20.2% 65.1%",
        accent: "217.2 32.6% 17.5%",
        accent_foreground: "210 40% 98%",
        destructive: "0 62.8% 30.6%",
        destructive_foreground: "210 40% 98%",
        border: "217.2 32.6% 17.5%",
        input: "217.2 32.6% 17.5%",
        ring: "217.2 91.2% 59.8%",
        chart1: "220 70% 50%",
        chart2: "160 60% 45%",
        chart3: "30 80% 55%",
        chart4: "280 65% 60%",
        chart5: "340 75% 55%",
    },
};

const DRACULA: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Dracula,
    display_name: "Dracula",
    description: "Dracula-inspired dark theme with purple accents",
    icon: "🧛",
    category: ThemeCategory::Dark,
    colors: ThemeColors {
        background: "231 15% 18%",
        foreground: "60 30% 96%",
        card: "232 14% 31%",
        card_foreground: "60 30% 96%",
        popover: "232 14% 31%",
        popover_foreground: "60 30% 96%",
        primary: "265 89% 78%",
        primary_foreground: "231 15% 18%",
        secondary: "232 14% 31%",
        secondary_foreground: "60 30% 96%",
        muted: "232 14% 31%",
        muted_foreground: "226 14% 70%",
        accent: "232 14% 31%",
        accent_foreground: "60 30% 96%",
        destructive: "0 100% 67%",
        destructive_foreground: "60 30% 96%",
        border: "232 14% 31%",
        input: "232 14% 31%",
        ring: "265 89% 78%",
        chart1: "265 89% 78%",
        chart2: "135 94% 65%",
        chart3: "326 100% 74%",
        chart4: "65 92% 76%",
        chart5: "31 100% 71%",
    },
};

const OCEAN: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Ocean,
    display_name: "Ocean",
    description: "Dark theme with ocean blue tones",
    icon: "🌊",
    category: ThemeCategory::Dark,
    colors: ThemeColors {
        background: "200 50% 10%",
        foreground: "180 100% 90%",
        card: "200 50% 15%",
        card_foreground: "180 100% 90%",
        popover: "200 50% 15%",
        popover_foreground: "180 100% 90%",
        primary: "180 100% 50%",
        primary_foreground: "200 50% 10%",
        secondary: "200 50% 20%",
        secondary_foreground: "180 100% 90%",
        muted: "200 50% 20%",
        muted_foreground: "180 50% 70%",
        accent: "200 50% 20%",
        accent_foreground: "180 100% 90%",
        destructive: "0 100% 60%",
        destructive_foreground: "180 100% 90%",
        border: "200 50% 25%",
        input: "200 50% 25%",
        ring: "180 100% 50%",
        chart1: "180 100% 50%",
        chart2: "200 100% 60%",
        chart3: "220 100% 70%",
        chart4: "160 100% 40%",
        chart5: "240 100% 60%",
    },
};

const FOREST: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Forest,
    display_name: "Forest",
    description: "Dark theme with forest green tones",
    icon: "🌲",
    category: ThemeCategory::Dark,
    colors: ThemeColors {
        background: "120 25% 15%",
        foreground: "120 20% 90%",
        card: "120 25% 20%",
        card_foreground: "120 20% 90%",
        popover: "120 25% 20%",
        popover_foreground: "120 20% 90%",
        primary: "120 60% 50%",
        primary_foreground: "120 25% 15%",
        secondary: "120 25% 25%",
        secondary_foreground: "120 20% 90%",
        muted: "120 25% 25%",
        muted_foreground: "120 15% 70%",
        accent: "120 25% 25%",
        accent_foreground: "120 20% 90%",
        destructive: "0 80% 55%",
        destructive_foreground: "120 20% 90%",
        border: "120 25% 30%",
        input: "120 25% 30%",
        ring: "120 60% 50%",
        chart1: "120 60% 50%",
        chart2: "140 60% 45%",
        chart3: "100 60% 55%",
        chart4: "80 60% 60%",
        chart5: "160 60% 40%",
    },
};

const SUNSET: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Sunset,
    display_name: "Sunset",
    description: "Dark theme with warm sunset tones",
    icon: "🌅",
    category: ThemeCategory::Dark,
    colors: ThemeColors {
        background: "20 30% 15%",
        foreground: "30 20% 90%",
        card: "20 30% 20%",
        card_foreground: "30 20% 90%",
        popover: "20 30% 20%",
        popover_foreground: "30 20% 90%",
        primary: "30 100% 60%",
        primary_foreground: "20 30% 15%",
        secondary: "20 30% 25%",
        secondary_foreground: "30 20% 90%",
        muted: "20 30% 25%",
        muted_foreground: "30 15% 70%",
        accent: "20 30% 25%",
        accent_foreground: "30 20% 90%",
        destructive: "0 85% 60%",
        destructive_foreground: "30 20% 90%",
        border: "20 30% 30%",
        input: "20 30% 30%",
        ring: "30 100% 60%",
        chart1: "30 100% 60%",
        chart2: "15 100% 55%",
        chart3: "45 100% 65%",
        chart4: "0 100% 60%",
        chart5: "60 100% 50%",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_has_a_complete_definition() {
        for name in ThemeName::ALL {
            let def = name.definition();
            assert_eq!(def.name, name);
            for (role, value) in def.colors.roles() {
                assert!(!value.is_empty(), "{name} lacks {role}");
            }
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for name in ThemeName::ALL {
            assert_eq!(name.as_str().parse::<ThemeName>(), Ok(name));
        }
        assert_eq!(
            "neon".parse::<ThemeName>(),
            Err(UnknownTheme("neon".to_string()))
        );
        assert!("Dark".parse::<ThemeName>().is_err());
        let err = "neon".parse::<ThemeName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: neon");
    }

    #[test]
    fn test_categories() {
        let light: Vec<_> = themes_by_category(ThemeCategory::Light)
            .iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(light, vec![ThemeName::Light, ThemeName::Minimal]);
        assert_eq!(themes_by_category(ThemeCategory::Dark).len(), 5);
        assert_eq!(DEFAULT_THEME.category(), ThemeCategory::Dark);
        assert_eq!(DEFAULT_LIGHT_THEME.category(), ThemeCategory::Light);
    }

    #[test]
    fn test_theme_sets() {
        let two = ThemeSet::two_state();
        assert!(two.is_two_state());
        assert_eq!(two.find("light"), Some(ThemeName::Light));
        assert_eq!(two.find("ocean"), None);

        let extended = ThemeSet::extended();
        assert!(!extended.is_two_state());
        assert_eq!(extended.names().len(), 7);

        let custom =
            ThemeSet::from_names([ThemeName::Light, ThemeName::Dark, ThemeName::Light]).unwrap();
        assert!(custom.is_two_state());
        assert_eq!(ThemeSet::from_names([]), None);
    }

    #[test]
    fn test_theme_info() {
        let dark = ThemeInfo::for_theme(ThemeName::Dark);
        assert_eq!(dark.class, "dark-theme");
        assert_eq!(dark.background, "#0f172a");

        let ocean = ThemeInfo::for_theme(ThemeName::Ocean);
        assert_eq!(ocean.class, "ocean-theme");
        assert_eq!(ocean.primary, "#00ffff");
        assert_eq!(ocean.background, "#0d1e26");
        assert_eq!(ThemeName::Forest.css_class(), "forest-theme");
    }

    #[test]
    fn test_theme_info_swatches_are_hex() {
        for theme in ThemeName::ALL {
            let info = ThemeInfo::for_theme(theme);
            for value in [&info.primary, &info.background] {
                assert_eq!(value.len(), 7, "{theme}: {value}");
                assert!(value.starts_with('#'), "{theme}: {value}");
            }
        }
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex("0 0% 100%").as_deref(), Some("#ffffff"));
        assert_eq!(hsl_to_hex("222.2 84% 4.9%").as_deref(), Some("#020817"));
        assert_eq!(hsl_to_hex("not a color"), None);
        assert_eq!(hsl_to_hex("10 20%"), None);
    }
}
