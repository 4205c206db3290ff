//! Allow-list reconciliation.
//!
//! Turns an ordered host list into the positional `whitelist.<n>` form fields
//! the serverclass endpoint expects, and parses single filter keys.
//!
//! Invariants:
//! - Indices are dense, zero-based, and follow source order.
//! - Duplicate hosts keep distinct slots.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use splunk_ds_config::constants::{ALLOW_LIST_PREFIX, DENY_LIST_PREFIX};

/// Build the allow list for `hosts`, preserving order.
pub fn reconcile<S: AsRef<str>>(hosts: &[S]) -> AllowList {
    AllowList {
        entries: hosts
            .iter()
            .enumerate()
            .map(|(i, host)| (FilterKey::allow(i), host.as_ref().to_string()))
            .collect(),
    }
}

/// Ordered mapping of positional allow-list keys to hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<(FilterKey, String)>,
}

impl AllowList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Host stored under `key` (e.g. `whitelist.1`).
    pub fn get(&self, key: &str) -> Option<&str> {
        let key: FilterKey = key.parse().ok()?;
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, host)| host.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FilterKey, &str)> {
        self.entries.iter().map(|(k, host)| (k, host.as_str()))
    }

    /// Form fields in key order.
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, host)| (k.to_string(), host.clone()))
            .collect()
    }
}

impl Serialize for AllowList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, host) in &self.entries {
            map.serialize_entry(&key.to_string(), host)?;
        }
        map.end()
    }
}

/// Which list a filter key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Allow,
    Deny,
}

impl FilterKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Allow => ALLOW_LIST_PREFIX,
            Self::Deny => DENY_LIST_PREFIX,
        }
    }
}

/// A single positional filter key: `whitelist.<n>` or `blacklist.<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterKey {
    pub kind: FilterKind,
    pub index: usize,
}

impl FilterKey {
    pub fn allow(index: usize) -> Self {
        Self {
            kind: FilterKind::Allow,
            index,
        }
    }

    pub fn deny(index: usize) -> Self {
        Self {
            kind: FilterKind::Deny,
            index,
        }
    }
}

impl Default for FilterKey {
    fn default() -> Self {
        Self::allow(0)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind.prefix(), self.index)
    }
}

impl Serialize for FilterKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error returned when a filter key does not match `whitelist.<n>` / `blacklist.<n>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid filter key '{0}': expected whitelist.<n> or blacklist.<n> (e.g. whitelist.0)")]
pub struct InvalidFilterKey(String);

impl FromStr for FilterKey {
    type Err = InvalidFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidFilterKey(s.to_string());

        let (prefix, index) = s.split_once('.').ok_or_else(invalid)?;
        let kind = match prefix {
            p if p == ALLOW_LIST_PREFIX => FilterKind::Allow,
            p if p == DENY_LIST_PREFIX => FilterKind::Deny,
            _ => return Err(invalid()),
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = index.parse().map_err(|_| invalid())?;

        Ok(Self { kind, index })
    }
}
