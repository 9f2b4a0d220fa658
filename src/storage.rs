// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent Key-Value Media
//!
//! Stores persist one raw string value under one key. Two media are
//! provided, mirroring what a browser offers: a cookie jar with expiry and
//! path scope, and a flat local-storage map. Both are file-backed so state
//! survives between runs; [`MemoryStore`] is the in-process stand-in.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::error::StorageError;

/// One year, the lifetime of the language cookie.
pub const COOKIE_MAX_AGE_SECS: i64 = 31_536_000;

/// A synchronous string key-value medium.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// A medium shared by several stores on the same thread.
impl<S: KeyValueStore> KeyValueStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.borrow_mut().remove(key)
    }
}

/// In-memory medium. Can be switched off to simulate blocked storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    disabled: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails with [`StorageError::Disabled`].
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Builder-style pre-seeding.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Number of successful `set`/`remove` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        self.values.remove(key);
        self.writes += 1;
        Ok(())
    }
}

/// A single cookie entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub expires: Option<DateTime<Utc>>,
}

impl Cookie {
    /// A root-scoped cookie expiring `max_age_secs` after `now`.
    pub fn new(name: &str, value: &str, now: DateTime<Utc>, max_age_secs: i64) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            path: "/".to_string(),
            expires: Some(now + Duration::seconds(max_age_secs)),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|at| at <= now)
    }

    /// Serializes as `name=value; Path=/; Expires=<RFC 3339>`.
    pub fn to_line(&self) -> String {
        let mut line = format!("{}={}; Path={}", self.name, self.value, self.path);
        if let Some(expires) = self.expires {
            line.push_str("; Expires=");
            line.push_str(&expires.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        line
    }

    /// Parses a line written by [`Cookie::to_line`]. Unknown attributes are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split("; ");
        let (name, value) = parts.next()?.split_once('=')?;
        if name.is_empty() {
            return None;
        }

        let mut cookie = Cookie {
            name: name.to_string(),
            value: value.to_string(),
            path: "/".to_string(),
            expires: None,
        };
        for attr in parts {
            match attr.split_once('=') {
                Some(("Path", path)) => cookie.path = path.to_string(),
                Some(("Expires", at)) => {
                    cookie.expires = DateTime::parse_from_rfc3339(at)
                        .ok()
                        .map(|dt| dt.with_timezone(&Utc));
                }
                _ => {}
            }
        }
        Some(cookie)
    }
}

/// File-backed cookie jar, one cookie per line.
#[derive(Debug, Clone)]
pub struct CookieJar {
    path: PathBuf,
    max_age_secs: i64,
}

impl CookieJar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age_secs: COOKIE_MAX_AGE_SECS,
        }
    }

    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age_secs = secs;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All cookies on disk, expired ones included.
    pub fn cookies(&self) -> Result<Vec<Cookie>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Cookie::parse_line)
            .collect())
    }

    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Result<Option<String>, StorageError> {
        Ok(self
            .cookies()?
            .into_iter()
            .find(|cookie| cookie.name == key && !cookie.is_expired(now))
            .map(|cookie| cookie.value))
    }

    pub fn set_at(&mut self, key: &str, value: &str, now: DateTime<Utc>) -> Result<(), StorageError> {
        let mut cookies: Vec<Cookie> = self
            .cookies()?
            .into_iter()
            .filter(|cookie| cookie.name != key && !cookie.is_expired(now))
            .collect();
        cookies.push(Cookie::new(key, value, now, self.max_age_secs));
        self.write(&cookies)
    }

    fn write(&self, cookies: &[Cookie]) -> Result<(), StorageError> {
        let mut content = String::new();
        for cookie in cookies {
            content.push_str(&cookie.to_line());
            content.push('\n');
        }
        write_file(&self.path, &content)
    }
}

impl KeyValueStore for CookieJar {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.get_at(key, Utc::now())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_at(key, value, Utc::now())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let cookies: Vec<Cookie> = self
            .cookies()?
            .into_iter()
            .filter(|cookie| cookie.name != key)
            .collect();
        self.write(&cookies)
    }
}

/// File-backed flat string map stored as a JSON object.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(values).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        write_file(&self.path, &content)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_memory_store_roundtrip_and_write_count() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_disabled_memory_store_errors() {
        let mut store = MemoryStore::disabled();
        assert!(matches!(store.get("k"), Err(StorageError::Disabled)));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Disabled)));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_cookie_line_format() {
        let cookie = Cookie::new("language", "fr", at(0), COOKIE_MAX_AGE_SECS);
        insta::assert_snapshot!(cookie.to_line(), @"language=fr; Path=/; Expires=1971-01-01T00:00:00Z");
        assert_eq!(Cookie::parse_line(&cookie.to_line()), Some(cookie));
    }

    #[test]
    fn test_cookie_parse_rejects_garbage() {
        assert_eq!(Cookie::parse_line("no-equals-sign"), None);
        assert_eq!(Cookie::parse_line("=value"), None);
        let bare = Cookie::parse_line("a=b").unwrap();
        assert_eq!(bare.path, "/");
        assert_eq!(bare.expires, None);
    }

    #[test]
    fn test_cookie_jar_persists_and_expires() {
        let dir = tempdir().unwrap();
        let mut jar = CookieJar::new(dir.path().join("cookies")).with_max_age(60);

        jar.set_at("language", "de", at(1_000)).unwrap();
        jar.set_at("other", "x", at(1_000)).unwrap();
        assert_eq!(
            jar.get_at("language", at(1_030)).unwrap().as_deref(),
            Some("de")
        );
        assert_eq!(jar.get_at("other", at(1_030)).unwrap().as_deref(), Some("x"));

        // Expired after max-age
        assert_eq!(jar.get_at("language", at(1_060)).unwrap(), None);

        // A fresh jar on the same file sees the same cookies
        let reopened = CookieJar::new(jar.path());
        assert_eq!(
            reopened.get_at("other", at(1_001)).unwrap().as_deref(),
            Some("x")
        );
    }

    #[test]
    fn test_cookie_jar_overwrites_same_name() {
        let dir = tempdir().unwrap();
        let mut jar = CookieJar::new(dir.path().join("cookies"));
        jar.set_at("language", "de", at(0)).unwrap();
        jar.set_at("language", "es", at(10)).unwrap();
        assert_eq!(jar.cookies().unwrap().len(), 1);
        assert_eq!(jar.get_at("language", at(20)).unwrap().as_deref(), Some("es"));

        jar.remove("language").unwrap();
        assert!(jar.cookies().unwrap().is_empty());
    }

    #[test]
    fn test_local_storage_roundtrip() {
        let dir = tempdir().unwrap();
        let mut storage = LocalStorage::new(dir.path().join("nested").join("local.json"));
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "light").unwrap();
        storage.set("other", "1").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));

        storage.remove("theme").unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_local_storage_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let storage = LocalStorage::new(&path);
        assert!(matches!(
            storage.get("theme"),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_shared_store_keys_are_disjoint() {
        let shared = Rc::new(RefCell::new(MemoryStore::new()));
        let mut a = Rc::clone(&shared);
        let mut b = Rc::clone(&shared);
        a.set("language", "fr").unwrap();
        b.set("theme", "dark").unwrap();
        assert_eq!(a.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(shared.borrow().writes(), 2);
    }
}
