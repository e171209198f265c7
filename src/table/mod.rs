//! JIS X 0401 prefecture tables.
//!
//! Both directions are embedded as JSON via `include_str!`, validated at
//! compile time by `build.rs`, and parsed once into a `OnceLock` singleton.
//! `PrefectureTable::from_json` builds a table from arbitrary text.


use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

pub const DEFAULT_CODE_JSON: &str = include_str!("data/jis_x_0401_code.json");
pub const DEFAULT_NAME_JSON: &str = include_str!("data/jis_x_0401_name.json");

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("table is empty")]
    Empty,
    #[error("invalid code (expected two ASCII digits): {0:?}")]
    InvalidCode(String),
    #[error("empty name for code: {0}")]
    EmptyName(String),
    #[error("code/name tables are not inverse: {code} <-> {name}")]
    NotInverse { code: String, name: String },
}

/// Immutable code ↔ name mapping.
#[derive(Debug, Clone)]
pub struct PrefectureTable {
    code_to_name: BTreeMap<String, String>,
    name_to_code: HashMap<String, String>,
}

impl PrefectureTable {
    /// Get or initialize the global singleton built from the embedded tables.
    pub fn global() -> &'static PrefectureTable {
        static INSTANCE: OnceLock<PrefectureTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let table = Self::from_json(DEFAULT_CODE_JSON, DEFAULT_NAME_JSON)
                .expect("embedded prefecture tables must be valid");
            tracing::debug!(entries = table.len(), "prefecture tables loaded");
            table
        })
    }

    /// Parse a code → name table and a name → code table and check that
    /// each is the exact inverse of the other.
    pub fn from_json(code_json: &str, name_json: &str) -> Result<Self, TableError> {
        let code_to_name: BTreeMap<String, String> =
            serde_json::from_str(code_json).map_err(|e| TableError::Parse(e.to_string()))?;
        let name_to_code: HashMap<String, String> =
            serde_json::from_str(name_json).map_err(|e| TableError::Parse(e.to_string()))?;

        if code_to_name.is_empty() || name_to_code.is_empty() {
            return Err(TableError::Empty);
        }

        for (code, name) in &code_to_name {
            if !is_code_key(code) {
                return Err(TableError::InvalidCode(code.clone()));
            }
            if name.is_empty() {
                return Err(TableError::EmptyName(code.clone()));
            }
            if name_to_code.get(name) != Some(code) {
                return Err(TableError::NotInverse {
                    code: code.clone(),
                    name: name.clone(),
                });
            }
        }

        // Every forward pair has its reverse, so a size mismatch means the
        // name table carries extra entries.
        if name_to_code.len() != code_to_name.len() {
            let (name, code) = name_to_code
                .iter()
                .find(|(name, code)| code_to_name.get(*code) != Some(*name))
                .map(|(n, c)| (n.clone(), c.clone()))
                .unwrap_or_default();
            return Err(TableError::NotInverse { code, name });
        }

        Ok(Self {
            code_to_name,
            name_to_code,
        })
    }

    pub fn len(&self) -> usize {
        self.code_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_name.is_empty()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.code_to_name.contains_key(code)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_code.contains_key(name)
    }

    /// `(code, name)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.code_to_name
            .iter()
            .map(|(c, n)| (c.as_str(), n.as_str()))
    }

    pub(crate) fn get_name(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    pub(crate) fn get_code(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }
}

fn is_code_key(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the embedded code → name JSON.
pub fn default_code_json() -> &'static str {
    DEFAULT_CODE_JSON
}

/// Returns the embedded name → code JSON.
pub fn default_name_json() -> &'static str {
    DEFAULT_NAME_JSON
}
