//! Analysis records - the persisted unit at the storage boundary

use crate::breakdown::BreakdownItem;
use crate::structure::ArgumentStructure;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier for an analysis, based on UUIDv7.
///
/// UUIDv7 gives chronological sortability for history views and requires
/// no coordination between concurrent analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnalysisId(u128);

impl AnalysisId {
    /// Generate a new UUIDv7-based AnalysisId.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse an AnalysisId from its UUID string form.
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid analysis id: {}", e))
    }

    /// The timestamp component (milliseconds since Unix epoch).
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are the Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for AnalysisId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AnalysisId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AnalysisId::from_string(&s).map_err(D::Error::custom)
    }
}

/// The persisted record of one argument analysis.
///
/// This is the shape handed to the storage collaborator: the canonical
/// structure, the flat breakdown list, and the two derived summary fields
/// consumed by stat displays, plus the original and improved argument
/// text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Unique identifier.
    pub id: AnalysisId,

    /// When the analysis was produced (seconds since Unix epoch).
    pub created_at: u64,

    /// The argument text that was analyzed.
    pub original_argument: String,

    /// The rewritten, improved version of the argument.
    pub improved_argument: String,

    /// The canonical argument structure.
    pub structure: ArgumentStructure,

    /// The flat, classified breakdown findings.
    pub breakdown: Vec<BreakdownItem>,

    /// First logical flaw, or the fixed no-flaws placeholder.
    pub key_flaw: String,

    /// Count of unstated assumptions plus implicit premises.
    pub assumptions_count: usize,
}
