// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Date formatting command.

use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use uiprefs::{DateInput, DateTimeOptions, FormatMode, MonthStyle, NumberStyle};

use crate::commands::common::open_providers;
use crate::config::CliConfig;

/// Presentation mode selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Date,
    Datetime,
    Time,
}

impl From<Mode> for FormatMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Date => FormatMode::Date,
            Mode::Datetime => FormatMode::DateTime,
            Mode::Time => FormatMode::Time,
        }
    }
}

/// Optional overrides of the mode's default components.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub long_month: bool,
    pub seconds: bool,
    pub hour12: Option<bool>,
}

/// Applies overrides; `None` keeps the mode defaults untouched.
pub fn options_for(mode: FormatMode, overrides: Overrides) -> Option<DateTimeOptions> {
    if !overrides.long_month && !overrides.seconds && overrides.hour12.is_none() {
        return None;
    }
    let mut opts = mode.default_options();
    if overrides.long_month && opts.month.is_some() {
        opts.month = Some(MonthStyle::Long);
        opts.day = Some(NumberStyle::Numeric);
    }
    if overrides.seconds && opts.hour.is_some() {
        opts.second = Some(NumberStyle::TwoDigit);
    }
    opts.hour12 = overrides.hour12;
    Some(opts)
}

/// Format `value` (or now) with the active language's conventions.
pub fn run(config: &CliConfig, value: Option<&str>, mode: Mode, overrides: Overrides) -> Result<()> {
    let providers = open_providers(config)?;
    let locale = providers.locale()?;

    let input = match value {
        Some(text) => DateInput::from(text),
        None => DateInput::from(Local::now().fixed_offset()),
    };
    let mode = FormatMode::from(mode);
    let options = options_for(mode, overrides);
    let out = match mode {
        FormatMode::Date => locale.format_date(input, options.as_ref()),
        FormatMode::DateTime => locale.format_date_time(input, options.as_ref()),
        FormatMode::Time => locale.format_time(input, options.as_ref()),
    };
    println!("{}", out);
    Ok(())
}

// INLINE_TEST_REQUIRED: Binary crate module - option mapping is crate-private
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_defaults() {
        assert_eq!(options_for(FormatMode::Date, Overrides::default()), None);
    }

    #[test]
    fn test_long_month_only_touches_dates() {
        let overrides = Overrides {
            long_month: true,
            ..Overrides::default()
        };
        let opts = options_for(FormatMode::Date, overrides).unwrap();
        assert_eq!(opts.month, Some(MonthStyle::Long));

        let opts = options_for(FormatMode::Time, overrides).unwrap();
        assert_eq!(opts.month, None);
    }

    #[test]
    fn test_seconds_and_clock() {
        let overrides = Overrides {
            seconds: true,
            hour12: Some(false),
            ..Overrides::default()
        };
        let opts = options_for(FormatMode::DateTime, overrides).unwrap();
        assert_eq!(opts.second, Some(NumberStyle::TwoDigit));
        assert_eq!(opts.hour12, Some(false));
    }
}
