//! Localization boundary for the Override Notification Engine.
//!
//! The engine supplies only English/French source strings; the actual
//! translation mechanism lives in the hosting application and is reached
//! through the [`Lexicon`] trait. This module also produces the localized
//! "today" strings exposed to the email template.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The active notification language.
///
/// Selects which carrier email addresses, attachment variants, and date
/// formats are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// French.
    Fr,
}

impl Language {
    /// Returns the upper-case language code used in attachment variable
    /// names and address-table keys.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Word-translation lookup provided by the hosting application.
///
/// Every user-facing label built by the engine is passed through `word`
/// before display. The engine only ever supplies the source string.
pub trait Lexicon {
    /// Translates a source string for the active language.
    fn word(&self, source: &str) -> String;
}

/// A [`Lexicon`] that returns every source string unchanged.
///
/// Used wherever no translation host is wired in (tests, the HTTP API).
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Lexicon for Passthrough {
    fn word(&self, source: &str) -> String {
        source.to_string()
    }
}

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the month name for a date, e.g. `"August"` / `"août"`.
pub fn month_name(date: NaiveDate, language: Language) -> &'static str {
    let index = date.month0() as usize;
    match language {
        Language::En => ENGLISH_MONTHS[index],
        Language::Fr => FRENCH_MONTHS[index],
    }
}

/// Returns the long-format date string exposed to the email template,
/// e.g. `"August 29, 2022"` / `"29 août 2022"`.
pub fn long_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::En => format!("{} {}, {}", month_name(date, language), date.day(), date.year()),
        Language::Fr => format!("{} {} {}", date.day(), month_name(date, language), date.year()),
    }
}

/// Returns the two-digit year suffix, e.g. `"22"` for 2022.
pub fn year_suffix(date: NaiveDate) -> String {
    format!("{:02}", date.year() % 100)
}
