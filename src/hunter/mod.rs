//! Hunter entity model.
//!
//! Defines the directory record shape, its canonical identity, and the
//! minimal parsing and validation needed to send and receive records.

mod draft;

pub use draft::{Field, FieldError, HunterDraft, ValidHunter, DEFAULT_GENDER, DEFAULT_LICENSE};

use serde::{Deserialize, Serialize};

/// Canonical identity of a hunter record.
///
/// The backend returns either a numeric/string `id` or a Mongo-style string
/// `_id`. Ingress code resolves whichever is present into this single type,
/// so the dual-field ambiguity never leaves the wire layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HunterId {
    Num(i64),
    Text(String),
}

impl std::fmt::Display for HunterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HunterId::Num(n) => write!(f, "{}", n),
            HunterId::Text(s) => f.write_str(s),
        }
    }
}

/// One directory record.
///
/// A record without an identity cannot be deleted or used as a stable list
/// key; the server is expected to assign one on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Hunter {
    pub id: Option<HunterId>,
    pub name: String,
    /// Display asset URL.
    pub image: Option<String>,
    pub age: u32,
    /// Centimeters.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub gender: String,
    pub skills: Vec<String>,
    pub license_type: String,
}

/// Split a comma-separated skill list into trimmed, non-empty entries.
///
/// Total: empty or all-whitespace input yields an empty vector.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
