//! The per-carrier code mapping built from the user's final selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Carrier, CodeType};

/// The codes recorded against a single carrier.
///
/// Multiple selected codes of the same type are concatenated with a single
/// space, in selection order. AGA codes are folded into `corporate` before
/// they reach this struct. Unrecognized code types are carried in `extra`
/// but never read by dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierCodes {
    /// Personal registration code(s), space-separated if several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<String>,
    /// Corporate registration code(s), space-separated if several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporate: Option<String>,
    /// Codes under labels the engine does not recognize.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl CarrierCodes {
    /// Builds the code string exposed to the email template: the personal
    /// and corporate codes joined with a single space, using the empty
    /// string for whichever is absent.
    pub fn email_code_line(&self) -> String {
        format!(
            "{} {}",
            self.personal.as_deref().unwrap_or(""),
            self.corporate.as_deref().unwrap_or("")
        )
    }

    fn record(&mut self, code_type: &CodeType, code: &str) {
        // AGA codes are requested on the corporate side of carrier forms.
        let slot = match code_type {
            CodeType::Personal => &mut self.personal,
            CodeType::Corporate | CodeType::Aga => &mut self.corporate,
            CodeType::Other(label) => {
                self.extra
                    .entry(label.clone())
                    .and_modify(|existing| {
                        existing.push(' ');
                        existing.push_str(code);
                    })
                    .or_insert_with(|| code.to_string());
                return;
            }
        };
        match slot {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(code);
            }
            None => *slot = Some(code.to_string()),
        }
    }
}

/// Mapping of carrier to the codes selected for notification.
///
/// Built once per session from the user's selection; consumed by dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMap(BTreeMap<Carrier, CarrierCodes>);

impl CodeMap {
    /// Creates an empty code map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selected code against a carrier, folding AGA into
    /// Corporate and concatenating repeats with a single space.
    pub fn record(&mut self, carrier: Carrier, code_type: &CodeType, code: &str) {
        self.0.entry(carrier).or_default().record(code_type, code);
    }

    /// Returns the codes recorded for a carrier, if any.
    pub fn get(&self, carrier: Carrier) -> Option<&CarrierCodes> {
        self.0.get(&carrier)
    }

    /// Iterates the carriers that have codes recorded.
    pub fn carriers(&self) -> impl Iterator<Item = Carrier> + '_ {
        self.0.keys().copied()
    }

    /// Returns true if no codes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
