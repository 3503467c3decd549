//! Configuration types for notification dispatch.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::locale::Language;

/// The compliance inbox every send is redirected to unless the
/// configuration explicitly opts into live sending.
pub const DEFAULT_REDIRECT_ADDRESS: &str = "benjamin.sengupta@financialhorizons.com";

/// Where outbound carrier mail is actually delivered.
///
/// Defaults to [`MailPolicy::Redirect`] at the compliance inbox. Live
/// sending to real carrier addresses must be explicitly and deliberately
/// enabled with `mode: live` in the configuration file; there is no way to
/// reach carriers by omission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum MailPolicy {
    /// Every To and Cc is replaced with a single fixed address.
    Redirect {
        /// The address that receives all redirected mail.
        #[serde(default = "default_redirect_address")]
        redirect_address: String,
    },
    /// Mail goes to the real carrier contracting desks.
    Live,
}

fn default_redirect_address() -> String {
    DEFAULT_REDIRECT_ADDRESS.to_string()
}

impl Default for MailPolicy {
    fn default() -> Self {
        MailPolicy::Redirect {
            redirect_address: default_redirect_address(),
        }
    }
}

impl MailPolicy {
    /// Returns the (to, cc) pair actually used for a resolved carrier
    /// address under this policy.
    pub fn delivery_addresses<'a>(&'a self, carrier_address: &'a str) -> (&'a str, &'a str) {
        match self {
            MailPolicy::Redirect { redirect_address } => (redirect_address, redirect_address),
            MailPolicy::Live => (carrier_address, carrier_address),
        }
    }

    /// Returns true when mail reaches real carrier addresses.
    pub fn is_live(&self) -> bool {
        matches!(self, MailPolicy::Live)
    }
}

/// Runtime configuration for notification dispatch.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// The notification language, selecting address tables, attachment
    /// variants, and date formats.
    #[serde(default = "default_language")]
    pub language: Language,
    /// Where outbound mail is delivered.
    #[serde(default)]
    pub mail: MailPolicy,
}

fn default_language() -> Language {
    Language::En
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            mail: MailPolicy::default(),
        }
    }
}
