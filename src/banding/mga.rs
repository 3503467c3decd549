//! MGA branch-code lookup for the carriers that require one per office.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::tables::{
    EMPIRE_BRANCH_CODES, EQUITABLE_BRANCH_CODES, MANULIFE_BRANCH_CODES, SSQ_BRANCH_CODES,
};

/// The carriers that track a managing-general-agent code per FH branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MgaCarrier {
    /// Empire Life.
    Empire,
    /// Equitable Life.
    Equitable,
    /// SSQ Life Insurance.
    Ssq,
    /// Manulife.
    Manulife,
}

impl MgaCarrier {
    fn branch_table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            MgaCarrier::Empire => EMPIRE_BRANCH_CODES,
            MgaCarrier::Equitable => EQUITABLE_BRANCH_CODES,
            MgaCarrier::Ssq => SSQ_BRANCH_CODES,
            MgaCarrier::Manulife => MANULIFE_BRANCH_CODES,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MgaCarrier::Empire => "Empire",
            MgaCarrier::Equitable => "Equitable",
            MgaCarrier::Ssq => "SSQ",
            MgaCarrier::Manulife => "Manulife",
        }
    }
}

/// Returns the MGA code a carrier uses for an FH branch.
///
/// Branch names come from a fixed enumeration upstream, so a missing branch
/// is a precondition violation and propagates as
/// [`EngineError::BranchNotFound`]. An empty string is a valid result: it
/// means the carrier has not issued a code for that branch yet.
///
/// # Example
///
/// ```
/// use override_engine::banding::{MgaCarrier, mga_code};
///
/// assert_eq!(mga_code(MgaCarrier::Empire, "Barrie").unwrap(), "A13346");
/// assert_eq!(mga_code(MgaCarrier::Ssq, "Markham").unwrap(), "");
/// ```
pub fn mga_code(carrier: MgaCarrier, branch: &str) -> EngineResult<&'static str> {
    carrier
        .branch_table()
        .iter()
        .find(|(name, _)| *name == branch)
        .map(|(_, code)| *code)
        .ok_or_else(|| EngineError::BranchNotFound {
            carrier: carrier.name().to_string(),
            branch: branch.to_string(),
        })
}
