//! Code selection and aggregation.
//!
//! Turns parsed WS records into the confirmation choice list shown to the
//! user (with the records that need carrier notice preselected), then folds
//! the user's final selection into the per-carrier code map consumed by
//! dispatch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::locale::Lexicon;
use crate::models::{Carrier, CarrierCodeRecord, CodeMap, CodeType, OverrideChangeFlags};
use crate::tables;

/// Translation source string shown in place of an empty code.
pub const NO_CODE_LABEL: &str = "(No Code)";

/// One entry of the code confirmation choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeChoice {
    /// Index of the backing record in the parsed record list.
    pub index: usize,
    /// Display label, `[<status>] [<type>] <carrier> - <code>`.
    pub label: String,
    /// Whether the record should be checked by default.
    pub preselected: bool,
}

/// Returns true if a record should be preselected for notification.
///
/// All three conditions must hold independently: the status is strictly
/// active (pending is not enough, even though the parser keeps pending
/// rows), the carrier asks for notice of one of the flagged changes, and
/// the code is non-empty. A record failing any condition still appears in
/// the choice list for manual opt-in.
pub fn should_select(record: &CarrierCodeRecord, flags: &OverrideChangeFlags) -> bool {
    should_select_in(record, &flags.carriers())
}

fn should_select_in(record: &CarrierCodeRecord, notify_set: &BTreeSet<Carrier>) -> bool {
    if !tables::is_active_status(&record.status) {
        return false;
    }
    if !notify_set.contains(&record.carrier) {
        return false;
    }
    if record.code.is_empty() {
        return false;
    }
    true
}

/// Builds the confirmation choice list for the parsed records.
///
/// Every record appears in the list, in record order; preselection follows
/// [`should_select`]. Each label token is passed through the host's word
/// lookup.
pub fn build_choice_list(
    records: &[CarrierCodeRecord],
    flags: &OverrideChangeFlags,
    lexicon: &impl Lexicon,
) -> Vec<CodeChoice> {
    let notify_set = flags.carriers();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let code = if record.code.is_empty() {
                lexicon.word(NO_CODE_LABEL)
            } else {
                record.code.clone()
            };
            let label = format!(
                "[{}] [{}] {} - {}",
                lexicon.word(&record.status),
                lexicon.word(record.code_type.label()),
                lexicon.word(record.carrier.short_name()),
                code
            );
            CodeChoice {
                index,
                label,
                preselected: should_select_in(record, &notify_set),
            }
        })
        .collect()
}

/// Aggregates the user's final selection into the per-carrier code map.
///
/// Indices are resolved in selection order; AGA codes fold into Corporate
/// and repeated codes for the same carrier and type concatenate with a
/// single space (see [`CodeMap::record`]).
///
/// # Errors
///
/// Returns [`EngineError::SelectionIndexOutOfRange`] if an index does not
/// resolve to a parsed record. Indices come from the choice list the engine
/// built, so this is a precondition violation.
pub fn aggregate_selection(
    selected: &[usize],
    records: &[CarrierCodeRecord],
) -> EngineResult<CodeMap> {
    let mut code_map = CodeMap::new();
    for &index in selected {
        let record = records
            .get(index)
            .ok_or(EngineError::SelectionIndexOutOfRange {
                index,
                len: records.len(),
            })?;
        code_map.record(record.carrier, &record.code_type, &record.code);
    }
    Ok(code_map)
}

/// Returns the carriers whose document sets are needed for a code map.
///
/// Aliases resolve to their parent carrier (Penncorp selections produce
/// La Capitale forms) and the result is deduplicated preserving first
/// occurrence. Aliasing only relabels which template set is used; codes are
/// never merged across the alias boundary.
pub fn resolve_handled_carriers(code_map: &CodeMap) -> Vec<Carrier> {
    let mut seen = BTreeSet::new();
    let mut carriers = Vec::new();
    for carrier in code_map.carriers() {
        let resolved = carrier.resolve_alias();
        if seen.insert(resolved) {
            carriers.push(resolved);
        }
    }
    carriers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Passthrough;

    fn record(carrier: Carrier, code_type: CodeType, status: &str, code: &str) -> CarrierCodeRecord {
        CarrierCodeRecord {
            carrier,
            code_type,
            status: status.to_string(),
            code: code.to_string(),
        }
    }

    fn money_flags() -> OverrideChangeFlags {
        OverrideChangeFlags {
            money: true,
            ..Default::default()
        }
    }

    // =========================================================================
    // SL-001: preselection requires active status, notified carrier, and code
    // =========================================================================
    #[test]
    fn test_sl_001_should_select_requires_all_three() {
        let flags = money_flags();

        let qualifying = record(Carrier::CanadaLife, CodeType::Personal, "Active", "CL1");
        assert!(should_select(&qualifying, &flags));

        // Empty code disqualifies even when carrier and status qualify.
        let no_code = record(Carrier::CanadaLife, CodeType::Personal, "Active", "");
        assert!(!should_select(&no_code, &flags));

        // Carrier not in the notify set for these flags.
        let wrong_carrier = record(Carrier::SunLife, CodeType::Personal, "Active", "SL1");
        assert!(!should_select(&wrong_carrier, &flags));

        // Pending is recognized by the parser but never preselected.
        let pending = record(Carrier::CanadaLife, CodeType::Personal, "Pend-Carr", "CL1");
        assert!(!should_select(&pending, &flags));
    }

    // =========================================================================
    // SL-002: French active status preselects too
    // =========================================================================
    #[test]
    fn test_sl_002_french_active_status() {
        let flags = money_flags();
        let actif = record(Carrier::Ia, CodeType::Corporate, "Actif", "IA1");
        assert!(should_select(&actif, &flags));

        let en_attente = record(
            Carrier::Ia,
            CodeType::Corporate,
            "En attente - Assureur",
            "IA1",
        );
        assert!(!should_select(&en_attente, &flags));
    }

    // =========================================================================
    // SL-003: every record appears in the list, preselected or not
    // =========================================================================
    #[test]
    fn test_sl_003_choice_list_includes_everything() {
        let records = vec![
            record(Carrier::CanadaLife, CodeType::Personal, "Active", "CL1"),
            record(Carrier::SunLife, CodeType::Personal, "Active", "SL1"),
            record(Carrier::CanadaLife, CodeType::Corporate, "Pend-Carr", ""),
        ];
        let choices = build_choice_list(&records, &money_flags(), &Passthrough);
        assert_eq!(choices.len(), 3);
        assert!(choices[0].preselected);
        assert!(!choices[1].preselected);
        assert!(!choices[2].preselected);
        assert_eq!(choices[1].index, 1);
    }

    // =========================================================================
    // SL-004: label format with and without a code
    // =========================================================================
    #[test]
    fn test_sl_004_label_format() {
        let records = vec![
            record(Carrier::CanadaLife, CodeType::Personal, "Active", "CL1"),
            record(Carrier::Ia, CodeType::Aga, "Pend-Carr", ""),
        ];
        let choices = build_choice_list(&records, &money_flags(), &Passthrough);
        assert_eq!(choices[0].label, "[Active] [Personal] Canada Life - CL1");
        assert_eq!(choices[1].label, "[Pend-Carr] [AGA] IA - (No Code)");
    }

    // =========================================================================
    // SL-005: AGA and Corporate selections merge into one Corporate entry
    // =========================================================================
    #[test]
    fn test_sl_005_aga_merges_into_corporate() {
        let records = vec![
            record(Carrier::Ia, CodeType::Aga, "Active", "AGA1"),
            record(Carrier::Ia, CodeType::Corporate, "Active", "CORP1"),
        ];
        let code_map = aggregate_selection(&[0, 1], &records).unwrap();
        let codes = code_map.get(Carrier::Ia).unwrap();
        assert_eq!(codes.corporate.as_deref(), Some("AGA1 CORP1"));
        assert_eq!(codes.personal, None);
    }

    // =========================================================================
    // SL-006: aggregation honors selection order, not record order
    // =========================================================================
    #[test]
    fn test_sl_006_selection_order_preserved() {
        let records = vec![
            record(Carrier::Empire, CodeType::Corporate, "Active", "FIRST"),
            record(Carrier::Empire, CodeType::Corporate, "Active", "SECOND"),
        ];
        let code_map = aggregate_selection(&[1, 0], &records).unwrap();
        let codes = code_map.get(Carrier::Empire).unwrap();
        assert_eq!(codes.corporate.as_deref(), Some("SECOND FIRST"));
    }

    // =========================================================================
    // SL-007: an out-of-range index is a precondition violation
    // =========================================================================
    #[test]
    fn test_sl_007_out_of_range_index() {
        let records = vec![record(Carrier::Empire, CodeType::Personal, "Active", "E1")];
        match aggregate_selection(&[3], &records) {
            Err(EngineError::SelectionIndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("Expected SelectionIndexOutOfRange, got {:?}", other),
        }
    }

    // =========================================================================
    // SL-008: alias resolution relabels and deduplicates handled carriers
    // =========================================================================
    #[test]
    fn test_sl_008_alias_resolution_dedupes() {
        let records = vec![
            record(Carrier::Penncorp, CodeType::Personal, "Active", "P1"),
            record(Carrier::LaCapitale, CodeType::Personal, "Active", "LC1"),
            record(Carrier::SunLife, CodeType::Personal, "Active", "SL1"),
        ];
        let code_map = aggregate_selection(&[0, 1, 2], &records).unwrap();
        let handled = resolve_handled_carriers(&code_map);
        assert_eq!(handled, vec![Carrier::LaCapitale, Carrier::SunLife]);

        // Aliasing relabels the document set but never merges codes.
        assert_eq!(
            code_map.get(Carrier::Penncorp).unwrap().personal.as_deref(),
            Some("P1")
        );
        assert_eq!(
            code_map.get(Carrier::LaCapitale).unwrap().personal.as_deref(),
            Some("LC1")
        );
    }

    #[test]
    fn test_empty_selection_yields_empty_map() {
        let records = vec![record(Carrier::Empire, CodeType::Personal, "Active", "E1")];
        let code_map = aggregate_selection(&[], &records).unwrap();
        assert!(code_map.is_empty());
        assert!(resolve_handled_carriers(&code_map).is_empty());
    }
}
