//! Carrier code records produced by the WS table parser.

use serde::{Deserialize, Serialize};

use super::Carrier;

/// The registration a carrier code is tied to.
///
/// WS labels the type in English or French; unrecognized labels are carried
/// through unchanged as [`CodeType::Other`] so they still display correctly
/// in the selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeType {
    /// A personal registration code.
    Personal,
    /// A corporate registration code.
    Corporate,
    /// An AGA code; folded into Corporate during aggregation.
    Aga,
    /// A label the engine does not recognize, passed through verbatim.
    Other(String),
}

impl CodeType {
    /// Parses a WS code-type label, translating the known French synonyms.
    ///
    /// # Example
    ///
    /// ```
    /// use override_engine::models::CodeType;
    ///
    /// assert_eq!(CodeType::from_label("Personnel"), CodeType::Personal);
    /// assert_eq!(CodeType::from_label("Corporatif"), CodeType::Corporate);
    /// assert_eq!(CodeType::from_label("AGA"), CodeType::Aga);
    /// assert_eq!(
    ///     CodeType::from_label("Sub-Agent"),
    ///     CodeType::Other("Sub-Agent".to_string())
    /// );
    /// ```
    pub fn from_label(label: &str) -> CodeType {
        match label {
            "Personal" | "Personnel" => CodeType::Personal,
            "Corporate" | "Corporatif" => CodeType::Corporate,
            "AGA" => CodeType::Aga,
            other => CodeType::Other(other.to_string()),
        }
    }

    /// Returns the English label for this code type.
    pub fn label(&self) -> &str {
        match self {
            CodeType::Personal => "Personal",
            CodeType::Corporate => "Corporate",
            CodeType::Aga => "AGA",
            CodeType::Other(label) => label,
        }
    }
}

impl std::fmt::Display for CodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the WS carrier table that survived parsing.
///
/// Records are session-scoped: they exist only between a parse and the
/// aggregation of the user's selection, and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierCodeRecord {
    /// The carrier the code belongs to, normalized from the WS display name.
    pub carrier: Carrier,
    /// The registration type of the code.
    pub code_type: CodeType,
    /// The status string as it appeared on WS (bilingual).
    pub status: String,
    /// The override code itself; may be empty.
    pub code: String,
}
