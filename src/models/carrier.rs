//! Carrier model and name normalization.
//!
//! This module defines the closed set of carriers the brokerage deals with,
//! the normalization from WS display names to canonical short names, and the
//! one-level alias used for acquired brands.

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// A carrier known to the brokerage.
///
/// The WS carrier table refers to these by bilingual display names
/// (see [`Carrier::from_ws_name`]); everywhere else the canonical short
/// name from [`Carrier::short_name`] is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Carrier {
    /// Assumption Life.
    Assumption,
    /// BMO Insurance.
    Bmo,
    /// Canada Life.
    CanadaLife,
    /// CPP (Co-operators / PPC in French material).
    Cpp,
    /// Desjardins Insurance.
    Desjardins,
    /// Empire Life.
    Empire,
    /// Equitable Life.
    Equitable,
    /// Foresters.
    Foresters,
    /// Industrial Alliance.
    Ia,
    /// ivari.
    Ivari,
    /// La Capitale Insurance.
    LaCapitale,
    /// Manulife.
    Manulife,
    /// Penncorp (acquired by La Capitale in 2006; alias of [`Carrier::LaCapitale`]).
    Penncorp,
    /// RBC Insurance.
    Rbc,
    /// Specialty Life.
    SpecialtyLife,
    /// SSQ Life Insurance.
    Ssq,
    /// Sun Life.
    SunLife,
    /// UV Insurance.
    Uv,
}

impl Carrier {
    /// Returns the canonical short name, e.g. `"Canada Life"`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Carrier::Assumption => "Assumption",
            Carrier::Bmo => "BMO",
            Carrier::CanadaLife => "Canada Life",
            Carrier::Cpp => "CPP",
            Carrier::Desjardins => "Desjardins",
            Carrier::Empire => "Empire",
            Carrier::Equitable => "Equitable",
            Carrier::Foresters => "Foresters",
            Carrier::Ia => "IA",
            Carrier::Ivari => "Ivari",
            Carrier::LaCapitale => "La Capitale",
            Carrier::Manulife => "Manulife",
            Carrier::Penncorp => "Penncorp",
            Carrier::Rbc => "RBC",
            Carrier::SpecialtyLife => "Specialty Life",
            Carrier::Ssq => "SSQ",
            Carrier::SunLife => "Sun Life",
            Carrier::Uv => "UV",
        }
    }

    /// Normalizes a WS display name to a carrier.
    ///
    /// The WS carrier table uses bilingual display names with slashes.
    /// Unknown display names return `None` and are dropped by the parser,
    /// not errored.
    ///
    /// # Example
    ///
    /// ```
    /// use override_engine::models::Carrier;
    ///
    /// assert_eq!(
    ///     Carrier::from_ws_name("Canada Life / Canada-Vie"),
    ///     Some(Carrier::CanadaLife)
    /// );
    /// assert_eq!(Carrier::from_ws_name("Acme Mutual"), None);
    /// ```
    pub fn from_ws_name(display_name: &str) -> Option<Carrier> {
        let carrier = match display_name {
            "Assumption Life / Assomption Vie" => Carrier::Assumption,
            "BMO Insurance / BMO Assurance" => Carrier::Bmo,
            "Canada Life / Canada-Vie" => Carrier::CanadaLife,
            "CPP / PPC" => Carrier::Cpp,
            "Desjardins Insurance / Desjardins Assurances" => Carrier::Desjardins,
            "Empire Life / Empire Vie" => Carrier::Empire,
            "Equitable Life / Équitable Vie" => Carrier::Equitable,
            "Foresters / Foresters" => Carrier::Foresters,
            "Industrial Alliance Insurance/Industrielle Alliance Assurance" => Carrier::Ia,
            "ivari / ivari" => Carrier::Ivari,
            // Special case: the WS listing for the acquired Penncorp book
            // still appears under a combined La Capitale heading.
            "La Capitale Fin Security(formerly Penncorp) / La Capitale (Penncorp)" => {
                Carrier::Penncorp
            }
            "La Capitale Insurance / La Capitale Assurance" => Carrier::LaCapitale,
            "Manulife / Manuvie" => Carrier::Manulife,
            "RBC Insurance / RBC Assurances" => Carrier::Rbc,
            "Specialty Life / Specialite Vie" => Carrier::SpecialtyLife,
            "SSQ Life Insurance / SSQ Assurance Vie" => Carrier::Ssq,
            "Sun Life / Sun Life" => Carrier::SunLife,
            "UV Insurance/ UV Assurance" => Carrier::Uv,
            _ => return None,
        };
        Some(carrier)
    }

    /// Returns the bilingual WS display name for this carrier, the inverse
    /// of [`Carrier::from_ws_name`].
    pub fn ws_name(&self) -> &'static str {
        match self {
            Carrier::Assumption => "Assumption Life / Assomption Vie",
            Carrier::Bmo => "BMO Insurance / BMO Assurance",
            Carrier::CanadaLife => "Canada Life / Canada-Vie",
            Carrier::Cpp => "CPP / PPC",
            Carrier::Desjardins => "Desjardins Insurance / Desjardins Assurances",
            Carrier::Empire => "Empire Life / Empire Vie",
            Carrier::Equitable => "Equitable Life / Équitable Vie",
            Carrier::Foresters => "Foresters / Foresters",
            Carrier::Ia => "Industrial Alliance Insurance/Industrielle Alliance Assurance",
            Carrier::Ivari => "ivari / ivari",
            Carrier::LaCapitale => "La Capitale Insurance / La Capitale Assurance",
            Carrier::Manulife => "Manulife / Manuvie",
            Carrier::Penncorp => {
                "La Capitale Fin Security(formerly Penncorp) / La Capitale (Penncorp)"
            }
            Carrier::Rbc => "RBC Insurance / RBC Assurances",
            Carrier::SpecialtyLife => "Specialty Life / Specialite Vie",
            Carrier::Ssq => "SSQ Life Insurance / SSQ Assurance Vie",
            Carrier::SunLife => "Sun Life / Sun Life",
            Carrier::Uv => "UV Insurance/ UV Assurance",
        }
    }

    /// Resolves a carrier alias to the carrier whose document set is used.
    ///
    /// Penncorp codes are requested by La Capitale (which acquired Penncorp
    /// in 2006), so Penncorp resolves to La Capitale. Every other carrier
    /// resolves to itself. Aliasing relabels which document template set is
    /// used; it never merges codes across the alias boundary.
    pub fn resolve_alias(&self) -> Carrier {
        match self {
            Carrier::Penncorp => Carrier::LaCapitale,
            other => *other,
        }
    }

    /// Derives the attachment variable identifier for this carrier and
    /// language: the short name with spaces replaced by underscores, then
    /// an underscore and the language code.
    ///
    /// # Example
    ///
    /// ```
    /// use override_engine::locale::Language;
    /// use override_engine::models::Carrier;
    ///
    /// assert_eq!(
    ///     Carrier::CanadaLife.attachment_variable(Language::En),
    ///     "Canada_Life_EN"
    /// );
    /// ```
    pub fn attachment_variable(&self, language: Language) -> String {
        format!("{}_{}", self.short_name().replace(' ', "_"), language.code())
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ws_name_normalizes_bilingual_names() {
        assert_eq!(
            Carrier::from_ws_name("Canada Life / Canada-Vie"),
            Some(Carrier::CanadaLife)
        );
        assert_eq!(
            Carrier::from_ws_name("Equitable Life / Équitable Vie"),
            Some(Carrier::Equitable)
        );
        assert_eq!(
            Carrier::from_ws_name("Industrial Alliance Insurance/Industrielle Alliance Assurance"),
            Some(Carrier::Ia)
        );
    }

    #[test]
    fn test_from_ws_name_unknown_is_none() {
        assert_eq!(Carrier::from_ws_name("Acme Mutual / Acme Mutuelle"), None);
        assert_eq!(Carrier::from_ws_name(""), None);
    }

    #[test]
    fn test_from_ws_name_penncorp_special_case() {
        assert_eq!(
            Carrier::from_ws_name(
                "La Capitale Fin Security(formerly Penncorp) / La Capitale (Penncorp)"
            ),
            Some(Carrier::Penncorp)
        );
        assert_eq!(
            Carrier::from_ws_name("La Capitale Insurance / La Capitale Assurance"),
            Some(Carrier::LaCapitale)
        );
    }

    #[test]
    fn test_resolve_alias_penncorp_to_la_capitale() {
        assert_eq!(Carrier::Penncorp.resolve_alias(), Carrier::LaCapitale);
    }

    #[test]
    fn test_resolve_alias_identity_for_non_aliases() {
        assert_eq!(Carrier::SunLife.resolve_alias(), Carrier::SunLife);
        assert_eq!(Carrier::LaCapitale.resolve_alias(), Carrier::LaCapitale);
    }

    #[test]
    fn test_attachment_variable_replaces_spaces() {
        assert_eq!(
            Carrier::SpecialtyLife.attachment_variable(Language::Fr),
            "Specialty_Life_FR"
        );
        assert_eq!(Carrier::Uv.attachment_variable(Language::En), "UV_EN");
    }

    #[test]
    fn test_display_uses_short_name() {
        assert_eq!(Carrier::CanadaLife.to_string(), "Canada Life");
        assert_eq!(Carrier::Ia.to_string(), "IA");
    }

    #[test]
    fn test_ws_name_round_trips_every_carrier() {
        for carrier in [
            Carrier::Assumption,
            Carrier::Bmo,
            Carrier::CanadaLife,
            Carrier::Cpp,
            Carrier::Desjardins,
            Carrier::Empire,
            Carrier::Equitable,
            Carrier::Foresters,
            Carrier::Ia,
            Carrier::Ivari,
            Carrier::LaCapitale,
            Carrier::Manulife,
            Carrier::Penncorp,
            Carrier::Rbc,
            Carrier::SpecialtyLife,
            Carrier::Ssq,
            Carrier::SunLife,
            Carrier::Uv,
        ] {
            assert_eq!(Carrier::from_ws_name(carrier.ws_name()), Some(carrier));
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Carrier::CanadaLife).unwrap();
        assert_eq!(json, "\"canada_life\"");
        let back: Carrier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Carrier::CanadaLife);
    }
}
