//! Override change categories and the carriers they require notice to.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Carrier;
use crate::tables;

/// Which compensation categories changed for the agent.
///
/// Each flag pulls in a static list of carriers that must be notified of
/// that kind of change; see [`OverrideChangeFlags::carriers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideChangeFlags {
    /// Any change to life rates.
    #[serde(default)]
    pub life_any: bool,
    /// A change to life rates that crossed a 5% band boundary.
    #[serde(default)]
    pub life_rounded: bool,
    /// A change to money (investment/annuity) rates.
    #[serde(default)]
    pub money: bool,
}

impl OverrideChangeFlags {
    /// Returns the deduplicated set of carriers that ask to be notified of
    /// the changes indicated by these flags.
    ///
    /// A carrier appearing under multiple set flags is returned once. Since
    /// La Capitale only asks for life rates, it is absent when only `money`
    /// is set.
    pub fn carriers(&self) -> BTreeSet<Carrier> {
        let mut carriers = BTreeSet::new();
        if self.life_any {
            carriers.extend(tables::LIFE_ANY_CARRIERS);
        }
        if self.life_rounded {
            carriers.extend(tables::LIFE_ROUNDED_CARRIERS);
        }
        if self.money {
            carriers.extend(tables::MONEY_CARRIERS);
        }
        carriers
    }
}
