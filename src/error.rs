// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types
//!
//! Every routine miss (unknown key, rejected language or theme) is modelled as
//! a plain return value. Only storage access, dictionary construction, theme
//! name parsing and store wiring produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the persistent key-value medium.
///
/// Stores catch these, log them and keep running in memory.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The medium has been switched off for this session.
    #[error("storage is disabled")]
    Disabled,

    /// Reading or writing the backing file failed.
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but could not be parsed.
    #[error("storage file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// Invalid dictionary source document.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary for '{code}' is not valid JSON: {source}")]
    Parse {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    /// A leaf was neither a string nor an object.
    #[error("dictionary for '{code}' has a non-string leaf at '{path}'")]
    InvalidLeaf { code: String, path: String },

    #[error("dictionary root for '{code}' must be an object")]
    NotAnObject { code: String },
}

/// A consumer reached for a store that was never installed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{accessor} must be used within a {provider}")]
    UsedOutsideProvider {
        accessor: &'static str,
        provider: &'static str,
    },
}

/// Text that names no theme in the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);
