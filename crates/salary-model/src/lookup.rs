use std::collections::HashMap;

use serde::Serialize;

/// Country name and region for one ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionEntry {
    pub country: String,
    pub region: Option<String>,
}

/// Country-code lookup keyed case-insensitively on the alpha-2 code.
#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    map: HashMap<String, RegionEntry>,
}

impl RegionLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, RegionEntry)>,
        S: AsRef<str>,
    {
        let mut lookup = Self::new();
        for (code, entry) in entries {
            lookup.insert(code.as_ref(), entry);
        }
        lookup
    }

    /// Adds an entry. The first entry for a code wins; returns false for a duplicate.
    pub fn insert(&mut self, code: &str, entry: RegionEntry) -> bool {
        let key = code.trim().to_ascii_uppercase();
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, entry);
        true
    }

    pub fn get(&self, code: &str) -> Option<&RegionEntry> {
        self.map.get(&code.trim().to_ascii_uppercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
