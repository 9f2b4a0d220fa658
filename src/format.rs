// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locale-Aware Date Formatting
//!
//! Formats instants for display using the conventions of a locale tag
//! (`en-US`, `pt-BR`, ...). Three presentation modes exist, each with its own
//! default component set:
//!
//! | Mode | Default components |
//! |------|--------------------|
//! | [`FormatMode::Date`] | year, 2-digit month, 2-digit day |
//! | [`FormatMode::DateTime`] | the above plus 2-digit hour and minute |
//! | [`FormatMode::Time`] | 2-digit hour and minute |
//!
//! Caller options replace the mode defaults rather than merging with them.
//! When they lack the components a mode requires, numeric ones are added:
//! date mode always shows year, month and day; time mode always shows hour,
//! minute and second; date-time mode adds all six only when neither part is
//! requested. Options that set only `hour12` therefore give `1/5/2024`.
//!
//! Unknown tags use `en-US` conventions. Unparseable input renders as
//! `"Invalid Date"`.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Rendered in place of a value that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// A value to format: an instant, a wall-clock time, or text to parse.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Instant(DateTime<FixedOffset>),
    Local(NaiveDateTime),
    Text(String),
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Local(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Local(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl DateInput {
    /// Wall-clock value in the instant's own offset.
    pub fn to_local(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::Instant(dt) => Some(dt.naive_local()),
            DateInput::Local(naive) => Some(*naive),
            DateInput::Text(text) => parse_date_text(text),
        }
    }
}

/// Parses RFC 3339, `YYYY-MM-DDTHH:MM[:SS]`, or `YYYY-MM-DD`.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
}

/// Width of a numeric component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Numeric,
    TwoDigit,
}

/// Presentation of the month component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Long,
    Short,
}

/// Which components to render and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeOptions {
    pub year: Option<NumberStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumberStyle>,
    pub hour: Option<NumberStyle>,
    pub minute: Option<NumberStyle>,
    pub second: Option<NumberStyle>,
    /// Overrides the locale's 12/24-hour clock.
    pub hour12: Option<bool>,
}

impl DateTimeOptions {
    pub fn date() -> Self {
        Self {
            year: Some(NumberStyle::Numeric),
            month: Some(MonthStyle::TwoDigit),
            day: Some(NumberStyle::TwoDigit),
            ..Self::default()
        }
    }

    pub fn date_time() -> Self {
        Self {
            hour: Some(NumberStyle::TwoDigit),
            minute: Some(NumberStyle::TwoDigit),
            ..Self::date()
        }
    }

    pub fn time() -> Self {
        Self {
            hour: Some(NumberStyle::TwoDigit),
            minute: Some(NumberStyle::TwoDigit),
            ..Self::default()
        }
    }

    fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }
}

/// The three presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    Date,
    DateTime,
    Time,
}

impl FormatMode {
    pub fn default_options(self) -> DateTimeOptions {
        match self {
            FormatMode::Date => DateTimeOptions::date(),
            FormatMode::DateTime => DateTimeOptions::date_time(),
            FormatMode::Time => DateTimeOptions::time(),
        }
    }

    /// Adds the numeric components this mode cannot render without.
    pub fn complete(self, mut options: DateTimeOptions) -> DateTimeOptions {
        let (needs_date, needs_time) = match self {
            FormatMode::Date => (!options.has_date(), false),
            FormatMode::Time => (false, !options.has_time()),
            FormatMode::DateTime => {
                let bare = !options.has_date() && !options.has_time();
                (bare, bare)
            }
        };
        if needs_date {
            options.year = Some(NumberStyle::Numeric);
            options.month = Some(MonthStyle::Numeric);
            options.day = Some(NumberStyle::Numeric);
        }
        if needs_time {
            options.hour = Some(NumberStyle::Numeric);
            options.minute = Some(NumberStyle::Numeric);
            options.second = Some(NumberStyle::Numeric);
        }
        options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthDayYear,
    DayMonthYear,
}

/// Formatting conventions for one locale tag.
#[derive(Debug)]
struct Conventions {
    tag: &'static str,
    order: DateOrder,
    separator: &'static str,
    hour12: bool,
    joiner: &'static str,
    long_months: [&'static str; 12],
    short_months: [&'static str; 12],
}

const EN_US: Conventions = Conventions {
    tag: "en-US",
    order: DateOrder::MonthDayYear,
    separator: "/",
    hour12: true,
    joiner: ", ",
    long_months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

const PT_BR: Conventions = Conventions {
    tag: "pt-BR",
    order: DateOrder::DayMonthYear,
    separator: "/",
    hour12: false,
    joiner: ", ",
    long_months: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ],
    short_months: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
};

const ES_ES: Conventions = Conventions {
    tag: "es-ES",
    order: DateOrder::DayMonthYear,
    separator: "/",
    hour12: false,
    joiner: ", ",
    long_months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    short_months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
};

const FR_FR: Conventions = Conventions {
    tag: "fr-FR",
    order: DateOrder::DayMonthYear,
    separator: "/",
    hour12: false,
    joiner: " ",
    long_months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    short_months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
};

const DE_DE: Conventions = Conventions {
    tag: "de-DE",
    order: DateOrder::DayMonthYear,
    separator: ".",
    hour12: false,
    joiner: ", ",
    long_months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    short_months: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
};

const ALL_CONVENTIONS: [&Conventions; 5] = [&EN_US, &PT_BR, &ES_ES, &FR_FR, &DE_DE];

/// Formats dates with the conventions of one locale tag.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    conventions: &'static Conventions,
}

impl DateFormatter {
    /// Conventions for `tag`, matched case-insensitively; `en-US` otherwise.
    pub fn for_tag(tag: &str) -> Self {
        let conventions = ALL_CONVENTIONS
            .iter()
            .copied()
            .find(|c| c.tag.eq_ignore_ascii_case(tag))
            .unwrap_or(&EN_US);
        Self { conventions }
    }

    /// The locale tag whose conventions are in use.
    pub fn tag(&self) -> &'static str {
        self.conventions.tag
    }

    /// Formats `value` using `options`, or the mode's defaults when absent.
    ///
    /// See the module docs for how partial options are completed.
    pub fn format(
        &self,
        value: &DateInput,
        mode: FormatMode,
        options: Option<&DateTimeOptions>,
    ) -> String {
        let Some(local) = value.to_local() else {
            tracing::debug!(?value, "Unparseable date input");
            return INVALID_DATE.to_string();
        };
        let options = match options {
            Some(opts) => mode.complete(*opts),
            None => mode.default_options(),
        };

        let date = self.date_part(&local, &options);
        let time = self.time_part(&local, &options);
        match (date.is_empty(), time.is_empty()) {
            (false, false) => format!("{}{}{}", date, self.conventions.joiner, time),
            (false, true) => date,
            _ => time,
        }
    }

    fn date_part(&self, local: &NaiveDateTime, options: &DateTimeOptions) -> String {
        let c = self.conventions;
        let year = options.year.map(|style| match style {
            NumberStyle::Numeric => local.year().to_string(),
            NumberStyle::TwoDigit => format!("{:02}", local.year().rem_euclid(100)),
        });
        let day = options.day.map(|style| number(local.day(), style));
        let month_index = local.month0() as usize;

        let textual = matches!(options.month, Some(MonthStyle::Long | MonthStyle::Short));
        let month = options.month.map(|style| match style {
            MonthStyle::Numeric => local.month().to_string(),
            MonthStyle::TwoDigit => format!("{:02}", local.month()),
            MonthStyle::Long => c.long_months[month_index].to_string(),
            MonthStyle::Short => c.short_months[month_index].to_string(),
        });

        if textual {
            return textual_date(c, day, month, year);
        }

        let ordered = match c.order {
            DateOrder::MonthDayYear => [month, day, year],
            DateOrder::DayMonthYear => [day, month, year],
        };
        ordered
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(c.separator)
    }

    fn time_part(&self, local: &NaiveDateTime, options: &DateTimeOptions) -> String {
        let hour12 = options.hour12.unwrap_or(self.conventions.hour12);
        let mut parts = Vec::new();

        if let Some(style) = options.hour {
            let hour = if hour12 {
                match local.hour() % 12 {
                    0 => 12,
                    h => h,
                }
            } else {
                local.hour()
            };
            parts.push(number(hour, style));
        }
        let padded = options.hour.is_some();
        if let Some(style) = options.minute {
            let style = if padded { NumberStyle::TwoDigit } else { style };
            parts.push(number(local.minute(), style));
        }
        if let Some(style) = options.second {
            let style = if padded || options.minute.is_some() {
                NumberStyle::TwoDigit
            } else {
                style
            };
            parts.push(number(local.second(), style));
        }

        let mut out = parts.join(":");
        if hour12 && options.hour.is_some() {
            out.push_str(if local.hour() < 12 { " AM" } else { " PM" });
        }
        out
    }
}

fn number(value: u32, style: NumberStyle) -> String {
    match style {
        NumberStyle::Numeric => value.to_string(),
        NumberStyle::TwoDigit => format!("{:02}", value),
    }
}

fn textual_date(
    c: &Conventions,
    day: Option<String>,
    month: Option<String>,
    year: Option<String>,
) -> String {
    match (day, month, year) {
        (Some(d), Some(m), Some(y)) => match c.tag {
            "en-US" => format!("{} {}, {}", m, d, y),
            "pt-BR" | "es-ES" => format!("{} de {} de {}", d, m, y),
            "de-DE" => format!("{}. {} {}", d, m, y),
            _ => format!("{} {} {}", d, m, y),
        },
        (day, month, year) => {
            let ordered = match c.order {
                DateOrder::MonthDayYear => [month, day, year],
                DateOrder::DayMonthYear => [day, month, year],
            };
            ordered.into_iter().flatten().collect::<Vec<_>>().join(" ")
        }
    }
}
