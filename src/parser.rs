//! WS carrier table parsing.
//!
//! The WS carrier table arrives as free text pasted out of the WS code
//! listing: tab-delimited rows, one record per line, an optional bilingual
//! header row, and at least six columns of which only the carrier name,
//! code-type label, code, and status (columns 0, 1, 2, and 5) are used.

use crate::error::{EngineError, EngineResult};
use crate::models::{Carrier, CarrierCodeRecord, CodeType};
use crate::tables;

/// The user-facing validation message for a structurally malformed table.
///
/// This is a translation source string; the hosting form passes it through
/// its word lookup before display.
pub const INVALID_TABLE_MESSAGE: &str = "Invalid WS Carrier table";

const HEADER_LABELS: &[&str] = &["Carrier Name", "Nom de l'assureur"];

/// Parses a pasted WS carrier table into code records.
///
/// The header row is stripped if present, trailing blank lines are trimmed,
/// and each remaining row is split on tabs with every field trimmed. A row
/// is kept only when its carrier display name is recognized and its status
/// is active or pending; anything else is silently dropped. Kept rows are
/// normalized and emitted in input order.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTable`] on the first row with fewer than
/// six columns. Parsing aborts entirely: no partial result is returned.
///
/// # Example
///
/// ```
/// use override_engine::models::{Carrier, CodeType};
/// use override_engine::parser::parse_carrier_table;
///
/// let records =
///     parse_carrier_table("Canada Life / Canada-Vie\tPersonnel\tABC123\tX\tY\tActive").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].carrier, Carrier::CanadaLife);
/// assert_eq!(records[0].code_type, CodeType::Personal);
/// assert_eq!(records[0].status, "Active");
/// assert_eq!(records[0].code, "ABC123");
/// ```
pub fn parse_carrier_table(raw_table: &str) -> EngineResult<Vec<CarrierCodeRecord>> {
    let mut lines: Vec<&str> = raw_table.split('\n').collect();

    // Skip the first row if it's the header row.
    if let Some(first) = lines.first() {
        let first = first.trim();
        if HEADER_LABELS.iter().any(|label| first.starts_with(label)) {
            lines.remove(0);
        }
    }

    // Remove blank lines at the end.
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut records = Vec::new();
    for (index, row) in lines.iter().enumerate() {
        let fields: Vec<&str> = row.trim().split('\t').map(str::trim).collect();
        if fields.len() < 6 {
            return Err(EngineError::MalformedTable {
                line: index + 1,
                columns: fields.len(),
            });
        }

        let display_name = fields[0];
        let code_type = CodeType::from_label(fields[1]);
        let code = fields[2];
        // Columns 3 and 4 are reserved WS columns.
        let status = fields[5];

        let Some(carrier) = Carrier::from_ws_name(display_name) else {
            continue;
        };
        if !tables::is_recognized_status(status) {
            continue;
        }

        records.push(CarrierCodeRecord {
            carrier,
            code_type,
            status: status.to_string(),
            code: code.to_string(),
        });
    }
    Ok(records)
}

/// Validates a pasted WS carrier table for the input form.
///
/// Only structural malformation (a row with too few columns) fails
/// validation; recoverable issues such as unknown carriers or statuses are
/// dropped by the parser rather than reported. The form surfaces
/// [`INVALID_TABLE_MESSAGE`] on failure.
pub fn validate_carrier_table(raw_table: &str) -> EngineResult<()> {
    parse_carrier_table(raw_table).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(carrier: &str, code_type: &str, code: &str, status: &str) -> String {
        format!("{carrier}\t{code_type}\t{code}\t-\t-\t{status}")
    }

    // =========================================================================
    // PT-001: a single valid row parses and normalizes
    // =========================================================================
    #[test]
    fn test_pt_001_valid_row_parses() {
        let records =
            parse_carrier_table("Canada Life / Canada-Vie\tPersonnel\tABC123\tX\tY\tActive")
                .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].carrier, Carrier::CanadaLife);
        assert_eq!(records[0].code_type, CodeType::Personal);
        assert_eq!(records[0].status, "Active");
        assert_eq!(records[0].code, "ABC123");
    }

    // =========================================================================
    // PT-002: English and French header rows are stripped
    // =========================================================================
    #[test]
    fn test_pt_002_header_rows_stripped() {
        for header in [
            "Carrier Name\tType\tCode\tA\tB\tStatus",
            "Nom de l'assureur\tType\tCode\tA\tB\tStatut",
        ] {
            let input = format!(
                "{header}\n{}",
                row("Sun Life / Sun Life", "Personal", "SL1", "Active")
            );
            let records = parse_carrier_table(&input).unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].carrier, Carrier::SunLife);
        }
    }

    // =========================================================================
    // PT-003: trailing blank lines are trimmed
    // =========================================================================
    #[test]
    fn test_pt_003_trailing_blank_lines_trimmed() {
        let input = format!("{}\n\n  \n", row("Empire Life / Empire Vie", "Corporate", "E1", "Actif"));
        let records = parse_carrier_table(&input).unwrap();
        assert_eq!(records.len(), 1);
    }

    // =========================================================================
    // PT-004: a row with fewer than 6 fields aborts the whole parse
    // =========================================================================
    #[test]
    fn test_pt_004_short_row_is_format_error() {
        let input = format!(
            "{}\nSun Life / Sun Life\tPersonal\tSL1\tX\tActive",
            row("Empire Life / Empire Vie", "Corporate", "E1", "Active")
        );
        match parse_carrier_table(&input) {
            Err(EngineError::MalformedTable { line, columns }) => {
                assert_eq!(line, 2);
                assert_eq!(columns, 5);
            }
            other => panic!("Expected MalformedTable, got {:?}", other),
        }
    }

    // =========================================================================
    // PT-005: unrecognized carriers and statuses are dropped, not errors
    // =========================================================================
    #[test]
    fn test_pt_005_unrecognized_rows_silently_dropped() {
        let input = [
            row("Acme Mutual / Acme Mutuelle", "Personal", "A1", "Active"),
            row("Sun Life / Sun Life", "Personal", "SL1", "Terminated"),
            row("Sun Life / Sun Life", "Personal", "SL2", "Active"),
        ]
        .join("\n");
        let records = parse_carrier_table(&input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "SL2");
    }

    // =========================================================================
    // PT-006: pending statuses are kept, bilingual
    // =========================================================================
    #[test]
    fn test_pt_006_pending_statuses_kept() {
        let input = [
            row("Sun Life / Sun Life", "Personal", "SL1", "Pend-Carr"),
            row("Manulife / Manuvie", "Corporatif", "M1", "En attente - Assureur"),
        ]
        .join("\n");
        let records = parse_carrier_table(&input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, "Pend-Carr");
        assert_eq!(records[1].carrier, Carrier::Manulife);
        assert_eq!(records[1].code_type, CodeType::Corporate);
    }

    // =========================================================================
    // PT-007: rows keep their input order
    // =========================================================================
    #[test]
    fn test_pt_007_rows_keep_input_order() {
        let input = [
            row("Sun Life / Sun Life", "Personal", "SL1", "Active"),
            row("Empire Life / Empire Vie", "Corporate", "E1", "Active"),
            row("Sun Life / Sun Life", "AGA", "SL2", "Active"),
        ]
        .join("\n");
        let records = parse_carrier_table(&input).unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["SL1", "E1", "SL2"]);
    }

    // =========================================================================
    // PT-008: fields are trimmed of surrounding whitespace
    // =========================================================================
    #[test]
    fn test_pt_008_fields_trimmed() {
        let input = "  Sun Life / Sun Life \t Personal \t SL1 \t-\t-\t Active  ";
        let records = parse_carrier_table(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "SL1");
        assert_eq!(records[0].status, "Active");
    }

    // =========================================================================
    // PT-009: empty input parses to nothing
    // =========================================================================
    #[test]
    fn test_pt_009_empty_input_is_empty() {
        assert!(parse_carrier_table("").unwrap().is_empty());
        assert!(parse_carrier_table("\n\n").unwrap().is_empty());
        assert!(
            parse_carrier_table("Carrier Name\tType\tCode\tA\tB\tStatus\n")
                .unwrap()
                .is_empty()
        );
    }

    // =========================================================================
    // PT-010: parsing is idempotent on re-serialized accepted records
    // =========================================================================
    #[test]
    fn test_pt_010_idempotent_on_reserialized_records() {
        let input = [
            row("Canada Life / Canada-Vie", "Personnel", "ABC123", "Active"),
            row("Manulife / Manuvie", "AGA", "M1", "Pend-Carr"),
            row(
                "La Capitale Fin Security(formerly Penncorp) / La Capitale (Penncorp)",
                "Corporate",
                "",
                "Actif",
            ),
        ]
        .join("\n");
        let records = parse_carrier_table(&input).unwrap();

        let reserialized: String = records
            .iter()
            .map(|r| {
                format!(
                    "{}\t{}\t{}\t\t\t{}",
                    r.carrier.ws_name(),
                    r.code_type,
                    r.code,
                    r.status
                )
            })
            .collect::<Vec<String>>()
            .join("\n");
        let reparsed = parse_carrier_table(&reserialized).unwrap();
        assert_eq!(records, reparsed);
    }

    #[test]
    fn test_validate_surfaces_only_structural_errors() {
        assert!(validate_carrier_table("").is_ok());
        assert!(
            validate_carrier_table(&row("Acme Mutual / Acme", "Personal", "A1", "Active")).is_ok()
        );
        assert!(validate_carrier_table("Sun Life / Sun Life\tPersonal\tSL1").is_err());
    }
}
