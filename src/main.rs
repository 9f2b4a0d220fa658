// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! uiprefs CLI
//!
//! Command-line front end for the language and theme preference stores.

mod commands;
mod config;
mod display;
mod i18n;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use commands::datetime::{Mode, Overrides};
use config::{Catalog, CliConfig};

#[derive(Parser)]
#[command(name = "uiprefs")]
#[command(version, about = "Language and theme preferences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir / uiprefs)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Preferred language tags, most preferred first (default: system locales)
    #[arg(
        long = "lang-pref",
        global = true,
        env = "UIPREFS_LANGUAGES",
        value_delimiter = ','
    )]
    lang_pref: Vec<String>,

    /// Whether the system prefers a dark color scheme
    #[arg(long, global = true, env = "UIPREFS_PREFERS_DARK", action = ArgAction::Set)]
    prefers_dark: Option<bool>,

    /// Themes the theme store may switch between
    #[arg(long, global = true, value_enum, default_value_t = Catalog::Two)]
    catalog: Catalog,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the active language
    #[command(subcommand)]
    Language(LanguageCommands),

    /// Manage the active theme
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Translate a key in the active language
    Translate {
        /// Dot-separated translation key
        key: String,
        /// Text variable (name=value)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
        /// Numeric variable (name=number)
        #[arg(long = "num", value_name = "NAME=NUMBER")]
        nums: Vec<String>,
    },

    /// Format a date with the active language's conventions
    Date {
        /// Date text (RFC 3339 or YYYY-MM-DD[ HH:MM[:SS]]); defaults to now
        value: Option<String>,
        /// Which components to show
        #[arg(long, value_enum, default_value_t = Mode::Date)]
        mode: Mode,
        /// Spell out the month
        #[arg(long)]
        long_month: bool,
        /// Include seconds
        #[arg(long)]
        seconds: bool,
        /// Force the 12-hour (true) or 24-hour (false) clock
        #[arg(long, action = ArgAction::Set)]
        hour12: Option<bool>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum LanguageCommands {
    /// List available languages
    List,
    /// Show the active language
    Current,
    /// Switch to a language by code
    Set {
        /// Language code (e.g. en, pt-br)
        code: String,
    },
    /// Choose a language interactively
    Select,
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// List available themes
    List,
    /// Show the active theme
    Current,
    /// Switch to a theme by name
    Set {
        /// Theme name (e.g. dark, ocean)
        name: String,
    },
    /// Flip between dark and light
    Toggle,
    /// Follow the system color scheme
    SyncSystem,
    /// Forget the saved theme
    Reset,
    /// Show a theme's palette and the resulting document markers
    Show {
        /// Theme name (default: active theme)
        name: Option<String>,
    },
    /// Choose a theme interactively
    Select,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Resolve data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("uiprefs")
    });

    let config = CliConfig {
        data_dir,
        env: config::resolve_environment(&cli.lang_pref, cli.prefers_dark),
        catalog: cli.catalog,
    };
    tracing::debug!(?config, "Configuration resolved");

    match cli.command {
        Commands::Language(cmd) => match cmd {
            LanguageCommands::List => commands::language::list(&config)?,
            LanguageCommands::Current => commands::language::current(&config)?,
            LanguageCommands::Set { code } => commands::language::set(&config, &code)?,
            LanguageCommands::Select => commands::language::select(&config)?,
        },
        Commands::Theme(cmd) => match cmd {
            ThemeCommands::List => commands::theme::list(&config)?,
            ThemeCommands::Current => commands::theme::current(&config)?,
            ThemeCommands::Set { name } => commands::theme::set(&config, &name)?,
            ThemeCommands::Toggle => commands::theme::toggle(&config)?,
            ThemeCommands::SyncSystem => commands::theme::sync_system(&config)?,
            ThemeCommands::Reset => commands::theme::reset(&config)?,
            ThemeCommands::Show { name } => commands::theme::show(&config, name.as_deref())?,
            ThemeCommands::Select => commands::theme::select(&config)?,
        },
        Commands::Translate { key, vars, nums } => {
            commands::translate::run(&config, &key, &vars, &nums)?;
        }
        Commands::Date {
            value,
            mode,
            long_month,
            seconds,
            hour12,
        } => {
            let overrides = Overrides {
                long_month,
                seconds,
                hour12,
            };
            commands::datetime::run(&config, value.as_deref(), mode, overrides)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "uiprefs", &mut io::stdout());
        }
    }

    Ok(())
}
