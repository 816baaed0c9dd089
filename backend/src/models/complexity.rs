//! Project complexity category
//!
//! The fee schedule is keyed by a closed set of complexity categories.
//! Keeping the set closed at the type level makes an unknown category
//! unrepresentable past the string boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project complexity category
///
/// Serialized as lowercase strings (`"low"`, `"medium"`, `"high"`) to match
/// the schedule configuration format.
///
/// # Example
/// ```
/// use fee_quoter_core_rs::Complexity;
///
/// let c: Complexity = "medium".parse().unwrap();
/// assert_eq!(c, Complexity::Medium);
/// assert_eq!(c.as_str(), "medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Low-complexity project (lowest fee table)
    Low,

    /// Medium-complexity project
    Medium,

    /// High-complexity project (highest fee table)
    High,
}

/// Error returned when parsing an unknown category label
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown complexity category '{label}' (expected low, medium, or high)")]
pub struct ParseComplexityError {
    /// The label that failed to parse
    pub label: String,
}

impl Complexity {
    /// All categories, in schedule order
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    /// Lowercase label used in configuration and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ParseComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            other => Err(ParseComplexityError {
                label: other.to_string(),
            }),
        }
    }
}
