// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation lookup command.

use anyhow::{anyhow, Result};
use uiprefs::Variables;

use crate::commands::common::open_providers;
use crate::config::CliConfig;

/// Parses `name=value` text variables and `name=number` numeric variables.
pub fn parse_variables(texts: &[String], numbers: &[String]) -> Result<Variables> {
    let mut vars = Variables::new();
    for pair in texts {
        let (name, value) = split_pair(pair)?;
        vars.set(name, value);
    }
    for pair in numbers {
        let (name, value) = split_pair(pair)?;
        if let Ok(n) = value.parse::<i64>() {
            vars.set(name, n);
        } else {
            let x: f64 = value
                .parse()
                .map_err(|_| anyhow!("Not a number: {}", value))?;
            vars.set(name, x);
        }
    }
    Ok(vars)
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(anyhow!("Expected name=value, got '{}'", pair)),
    }
}

/// Print the translation of `key` in the active language.
pub fn run(config: &CliConfig, key: &str, texts: &[String], numbers: &[String]) -> Result<()> {
    let providers = open_providers(config)?;
    let locale = providers.locale()?;

    let vars = parse_variables(texts, numbers)?;
    let out = if vars.is_empty() {
        locale.translate(key, None)
    } else {
        locale.translate(key, Some(&vars))
    };
    println!("{}", out);
    Ok(())
}

// INLINE_TEST_REQUIRED: Binary crate module - parser is crate-private
#[cfg(test)]
mod tests {
    use super::*;
    use uiprefs::resolve::interpolate;

    #[test]
    fn test_parse_variables() {
        let vars = parse_variables(
            &["name=Ada".to_string(), "eq=a=b".to_string()],
            &["count=3".to_string(), "ratio=0.5".to_string()],
        )
        .unwrap();
        assert_eq!(
            interpolate("{{name}} {{eq}} {{count}} {{ratio}}", &vars),
            "Ada a=b 3 0.5"
        );
    }

    #[test]
    fn test_parse_variables_rejects_bad_input() {
        assert!(parse_variables(&["novalue".to_string()], &[]).is_err());
        assert!(parse_variables(&["=x".to_string()], &[]).is_err());
        assert!(parse_variables(&[], &["n=abc".to_string()]).is_err());
    }
}
