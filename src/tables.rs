//! Static lookup tables for rate banding, branch codes, and carrier data.
//!
//! Every table here mirrors a published carrier rate sheet or a fixed piece
//! of brokerage data. Tables are immutable, initialized once, and never
//! user-configurable.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::models::Carrier;

/// Canada Life annuity band table: life rate threshold (percentage points)
/// to banded annuity rate.
///
/// Thresholds are strictly increasing and banded in 5-point increments,
/// matched by "greatest threshold <= input". The published sheet skips 145
/// and 185; floor matching covers those gaps.
pub static ANNUITY_BAND_TABLE: LazyLock<Vec<(u32, Decimal)>> = LazyLock::new(|| {
    vec![
        (0, Decimal::new(0, 2)),
        (25, Decimal::new(625, 2)),
        (50, Decimal::new(1250, 2)),
        (55, Decimal::new(1375, 2)),
        (60, Decimal::new(1500, 2)),
        (65, Decimal::new(1625, 2)),
        (70, Decimal::new(1750, 2)),
        (75, Decimal::new(1875, 2)),
        (80, Decimal::new(2000, 2)),
        (85, Decimal::new(2125, 2)),
        (90, Decimal::new(2250, 2)),
        (95, Decimal::new(2375, 2)),
        (100, Decimal::new(2500, 2)),
        (105, Decimal::new(2625, 2)),
        (110, Decimal::new(2750, 2)),
        (115, Decimal::new(2875, 2)),
        (120, Decimal::new(3000, 2)),
        (125, Decimal::new(3125, 2)),
        (130, Decimal::new(3250, 2)),
        (135, Decimal::new(3375, 2)),
        (140, Decimal::new(3500, 2)),
        (150, Decimal::new(3750, 2)),
        (155, Decimal::new(3875, 2)),
        (160, Decimal::new(4000, 2)),
        (165, Decimal::new(4125, 2)),
        (170, Decimal::new(4250, 2)),
        (175, Decimal::new(4375, 2)),
        (180, Decimal::new(4500, 2)),
        (190, Decimal::new(4750, 2)),
        (195, Decimal::new(4875, 2)),
        (200, Decimal::new(5000, 2)),
    ]
});

/// Canada Life equity rate table: dense per-integer-point from 70 to 100,
/// with an explicit 0.00 sentinel at the minimum. Matched by exact key.
pub static EQUITY_RATE_TABLE: LazyLock<Vec<(u32, Decimal)>> = LazyLock::new(|| {
    vec![
        (70, Decimal::new(0, 2)),
        (71, Decimal::new(229, 2)),
        (72, Decimal::new(371, 2)),
        (73, Decimal::new(486, 2)),
        (74, Decimal::new(600, 2)),
        (75, Decimal::new(714, 2)),
        (76, Decimal::new(943, 2)),
        (77, Decimal::new(1086, 2)),
        (78, Decimal::new(1200, 2)),
        (79, Decimal::new(1314, 2)),
        (80, Decimal::new(1429, 2)),
        (81, Decimal::new(1657, 2)),
        (82, Decimal::new(1800, 2)),
        (83, Decimal::new(1914, 2)),
        (84, Decimal::new(2029, 2)),
        (85, Decimal::new(2143, 2)),
        (86, Decimal::new(2371, 2)),
        (87, Decimal::new(2514, 2)),
        (88, Decimal::new(2629, 2)),
        (89, Decimal::new(2743, 2)),
        (90, Decimal::new(2857, 2)),
        (91, Decimal::new(3086, 2)),
        (92, Decimal::new(3229, 2)),
        (93, Decimal::new(3343, 2)),
        (94, Decimal::new(3457, 2)),
        (95, Decimal::new(3571, 2)),
        (96, Decimal::new(3800, 2)),
        (97, Decimal::new(3943, 2)),
        (98, Decimal::new(4057, 2)),
        (99, Decimal::new(4171, 2)),
        (100, Decimal::new(4286, 2)),
    ]
});

/// IA money-product rate table: dense per-integer-point from 72 to 100,
/// with a `("00", "00")` zero sentinel. Values are pairs of two-digit
/// (personal, corporate) code strings. Matched by exact key.
pub const MONEY_PRODUCT_TABLE: &[(u32, (&str, &str))] = &[
    (0, ("00", "00")),
    (72, ("00", "01")),
    (73, ("00", "02")),
    (74, ("00", "04")),
    (75, ("00", "05")),
    (76, ("00", "06")),
    (77, ("00", "08")),
    (78, ("00", "09")),
    (79, ("00", "11")),
    (80, ("00", "12")),
    (81, ("01", "13")),
    (82, ("03", "15")),
    (83, ("04", "16")),
    (84, ("05", "18")),
    (85, ("06", "19")),
    (86, ("08", "20")),
    (87, ("09", "22")),
    (88, ("10", "23")),
    (89, ("11", "25")),
    (90, ("13", "26")),
    (91, ("14", "27")),
    (92, ("15", "29")),
    (93, ("16", "30")),
    (94, ("18", "32")),
    (95, ("19", "33")),
    (96, ("20", "34")),
    (97, ("21", "36")),
    (98, ("23", "37")),
    (99, ("24", "39")),
    (100, ("25", "40")),
];

/// Empire Life MGA codes by FH branch. An empty string means Empire has no
/// code for that branch.
pub const EMPIRE_BRANCH_CODES: &[(&str, &str)] = &[
    ("Barrie", "A13346"),
    ("Burlington", "A32284"),
    ("Calgary", "A31833"),
    ("Edmonton", "A31833"),
    ("Fredericton", "B17727"),
    ("Halifax-Dartmouth", "A39745"),
    ("Kingston", "A16441"),
    ("Kitchener", "A13346"),
    ("London", "A16087"),
    ("Moncton", "B17727"),
    ("Ottawa", "A47737"),
    ("Saskatoon", "A13951"),
    ("Sudbury", "A42697"),
    ("Toronto", "A35326"),
    ("Vancouver", "A54066"),
    ("Victoria", "B12121"),
    ("Winnipeg", "A14237"),
    ("Richmond", ""),
    ("Markham", ""),
];

/// Equitable Life MGA codes by FH branch.
pub const EQUITABLE_BRANCH_CODES: &[(&str, &str)] = &[
    ("Barrie", "6G8H1"),
    ("Burlington", "6G8G1"),
    ("Calgary", "6G8Z1"),
    ("Edmonton", "6G8Z1"),
    ("Fredericton", "6G8Z6"),
    ("Halifax-Dartmouth", "6G8J1"),
    ("Kingston", "6G8V1"),
    ("Kitchener", "6G8A1"),
    ("London", "6G8I1"),
    ("Moncton", "6G8Z6"),
    ("Ottawa", "6G8V1"),
    ("Saskatoon", "611C9"),
    ("Sudbury", "6G8K1"),
    ("Toronto", "6G8B1"),
    ("Vancouver", "6G8E1"),
    ("Victoria", "611M1"),
    ("Winnipeg", "6G8Z1"),
    ("Richmond", ""),
    ("Markham", ""),
];

/// SSQ MGA codes by FH branch.
pub const SSQ_BRANCH_CODES: &[(&str, &str)] = &[
    ("Barrie", "253606"),
    ("Burlington", "253600"),
    ("Calgary", "253373"),
    ("Edmonton", "253374"),
    ("Fredericton", "253607"),
    ("Halifax-Dartmouth", "253607"),
    ("Kingston", "253602"),
    ("Kitchener", "253609"),
    ("London", "253608"),
    ("Moncton", "253607"),
    ("Ottawa", "253610"),
    ("Saskatoon", "253375"),
    ("Sudbury", "253603"),
    ("Toronto", "253606"),
    ("Vancouver", "253700"),
    ("Victoria", "214000"),
    ("Winnipeg", "268000"),
    ("Richmond", ""),
    ("Markham", ""),
];

/// Manulife MGA codes by FH branch.
pub const MANULIFE_BRANCH_CODES: &[(&str, &str)] = &[
    ("Barrie", "1268"),
    ("Burlington", "1268"),
    ("Calgary", "3241"),
    ("Edmonton", "3241"),
    ("Fredericton", "3248"),
    ("Halifax-Dartmouth", "2794"),
    ("Kingston", "1270"),
    ("Kitchener", "1268"),
    ("London", "1269"),
    ("Moncton", "3248"),
    ("Ottawa", "1270"),
    ("Saskatoon", "3241"),
    ("Sudbury", "1268"),
    ("Toronto", "1271"),
    ("Vancouver", "3249"),
    ("Victoria", "1649"),
    ("Winnipeg", "3241"),
    ("Richmond", ""),
    ("Markham", ""),
];

/// Carriers that want notice when a life rate crosses a 5% band boundary.
pub const LIFE_ROUNDED_CARRIERS: &[Carrier] = &[
    Carrier::Assumption,
    Carrier::Bmo,
    Carrier::CanadaLife,
    Carrier::Cpp,
    Carrier::Foresters,
    Carrier::Ivari,
    Carrier::Rbc,
    Carrier::SpecialtyLife,
    Carrier::Ssq,
    Carrier::SunLife,
    Carrier::Uv,
];

/// Carriers that want notice of any life rate change.
pub const LIFE_ANY_CARRIERS: &[Carrier] = &[
    Carrier::Desjardins,
    Carrier::Empire,
    Carrier::Equitable,
    Carrier::Ia,
    Carrier::LaCapitale,
    Carrier::Penncorp,
    Carrier::Manulife,
];

/// Carriers that want notice of money rate changes.
pub const MONEY_CARRIERS: &[Carrier] = &[
    Carrier::CanadaLife,
    Carrier::Desjardins,
    Carrier::Empire,
    Carrier::Ia,
    Carrier::Manulife,
];

/// WS statuses that count as active, in English and French.
pub const ACTIVE_STATUSES: &[&str] = &["Active", "Actif"];

/// WS statuses the parser accepts (active plus pending), in English and
/// French. A strictly wider set than [`ACTIVE_STATUSES`]: pending codes are
/// listed for manual opt-in but never preselected.
pub const RECOGNIZED_STATUSES: &[&str] =
    &["Active", "Pend-Carr", "Actif", "En attente - Assureur"];

/// Returns true if the WS status string counts as active.
pub fn is_active_status(status: &str) -> bool {
    ACTIVE_STATUSES.contains(&status)
}

/// Returns true if the WS status string is one the parser keeps.
pub fn is_recognized_status(status: &str) -> bool {
    RECOGNIZED_STATUSES.contains(&status)
}

/// Returns the contracting/compensation email address for a carrier in the
/// requested language.
///
/// The English and French desks are the same mailbox for every carrier
/// except CPP, which runs a separate French-language contracting desk.
pub fn carrier_email_address(carrier: Carrier, language: crate::locale::Language) -> &'static str {
    use crate::locale::Language;

    if carrier == Carrier::Cpp && language == Language::Fr {
        return "misesouscontrat@ppcqc.ca";
    }
    match carrier {
        Carrier::Assumption => "contrats@assomption.ca",
        Carrier::Bmo => "insurance.agencyservices@bmo.com",
        Carrier::CanadaLife => "CanadaLife.Contracts&Licensing@canadalife.com",
        Carrier::Cpp => "contracting@cpp.ca",
        Carrier::Desjardins => "compensation@dfs.ca",
        Carrier::Empire => "contracting@empire.ca",
        Carrier::Equitable => "fieldpayroll@equitable.ca",
        Carrier::Foresters => "info@foresters.com",
        Carrier::Ia => "iat-compensation@ia.ca",
        Carrier::Ivari => "distributioncompensation@ivari.ca",
        Carrier::LaCapitale | Carrier::Penncorp => "contrat.remuneration@lacapitale.com",
        Carrier::Manulife => "dccpsa2@manulife.ca",
        Carrier::Rbc => "inslccs@rbc.com",
        Carrier::SpecialtyLife => "contracting.compensation@slinsurance.ca",
        Carrier::Ssq => "compensation@ssq.ca",
        Carrier::SunLife => "REMUN@sunlife.com",
        Carrier::Uv => "ind.remuneration@uvassurance.ca",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    #[test]
    fn test_annuity_thresholds_strictly_increasing() {
        let table = &*ANNUITY_BAND_TABLE;
        for window in table.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "thresholds must be strictly increasing: {:?}",
                window
            );
        }
    }

    #[test]
    fn test_annuity_table_contains_zero_entry() {
        assert_eq!(ANNUITY_BAND_TABLE.first().map(|e| e.0), Some(0));
    }

    #[test]
    fn test_annuity_table_has_expected_gaps() {
        // The published sheet skips 145 and 185.
        let keys: Vec<u32> = ANNUITY_BAND_TABLE.iter().map(|e| e.0).collect();
        assert!(!keys.contains(&145));
        assert!(!keys.contains(&185));
    }

    #[test]
    fn test_equity_table_dense_from_70_to_100() {
        let keys: Vec<u32> = EQUITY_RATE_TABLE.iter().map(|e| e.0).collect();
        assert_eq!(keys, (70..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_money_product_table_dense_from_72_to_100() {
        let keys: Vec<u32> = MONEY_PRODUCT_TABLE
            .iter()
            .map(|e| e.0)
            .filter(|k| *k != 0)
            .collect();
        assert_eq!(keys, (72..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_money_product_sentinel_is_zero_pair() {
        assert_eq!(MONEY_PRODUCT_TABLE[0], (0, ("00", "00")));
    }

    #[test]
    fn test_branch_tables_cover_the_same_branches() {
        let branches: Vec<&str> = EMPIRE_BRANCH_CODES.iter().map(|e| e.0).collect();
        for table in [EQUITABLE_BRANCH_CODES, SSQ_BRANCH_CODES, MANULIFE_BRANCH_CODES] {
            let other: Vec<&str> = table.iter().map(|e| e.0).collect();
            assert_eq!(branches, other);
        }
    }

    #[test]
    fn test_newer_branches_have_no_codes_yet() {
        for table in [
            EMPIRE_BRANCH_CODES,
            EQUITABLE_BRANCH_CODES,
            SSQ_BRANCH_CODES,
            MANULIFE_BRANCH_CODES,
        ] {
            for branch in ["Richmond", "Markham"] {
                let code = table.iter().find(|e| e.0 == branch).map(|e| e.1);
                assert_eq!(code, Some(""));
            }
        }
    }

    #[test]
    fn test_status_sets() {
        assert!(is_active_status("Active"));
        assert!(is_active_status("Actif"));
        assert!(!is_active_status("Pend-Carr"));

        assert!(is_recognized_status("Pend-Carr"));
        assert!(is_recognized_status("En attente - Assureur"));
        assert!(!is_recognized_status("Terminated"));
    }

    #[test]
    fn test_active_statuses_subset_of_recognized() {
        for status in ACTIVE_STATUSES {
            assert!(is_recognized_status(status));
        }
    }

    #[test]
    fn test_cpp_has_a_separate_french_desk() {
        assert_eq!(
            carrier_email_address(Carrier::Cpp, Language::En),
            "contracting@cpp.ca"
        );
        assert_eq!(
            carrier_email_address(Carrier::Cpp, Language::Fr),
            "misesouscontrat@ppcqc.ca"
        );
    }

    #[test]
    fn test_other_carriers_share_the_desk_across_languages() {
        assert_eq!(
            carrier_email_address(Carrier::SunLife, Language::En),
            carrier_email_address(Carrier::SunLife, Language::Fr),
        );
    }

    #[test]
    fn test_penncorp_mail_goes_to_la_capitale() {
        assert_eq!(
            carrier_email_address(Carrier::Penncorp, Language::En),
            carrier_email_address(Carrier::LaCapitale, Language::En),
        );
    }
}
