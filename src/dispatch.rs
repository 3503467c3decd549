//! Notification dispatch to carriers.
//!
//! For each carrier needing notice, resolves the attachment and recipient
//! address, exposes the carrier name, code line, and date strings to the
//! email template, sends through the host's transport, and reports
//! per-carrier success or failure. A failed send never stops the remaining
//! carriers: the report always covers every pair attempted.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::MailPolicy;
use crate::error::EngineResult;
use crate::locale::{self, Language, Lexicon};
use crate::models::{Carrier, CarrierCodes, CodeMap};
use crate::tables;

/// Opaque handle to a generated attachment.
///
/// Produced by the hosting document system; the engine only carries it from
/// attachment resolution to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentHandle(pub String);

/// Resolves attachment variable identifiers to document handles.
///
/// The hosting application owns attachment generation; the engine derives
/// the variable name (see [`Carrier::attachment_variable`]) and asks the
/// resolver for the handle.
pub trait AttachmentResolver {
    /// Resolves a derived attachment variable to its handle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AttachmentNotFound`] when the variable does
    /// not resolve.
    fn resolve(&self, variable: &str) -> EngineResult<AttachmentHandle>;
}

/// Named values the email template renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// The carrier's short name.
    pub carrier_name: String,
    /// The carrier's personal and corporate codes joined with a space.
    pub code_line: String,
    /// Today's date in the long localized format, e.g. "August 29, 2022".
    pub date_long: String,
    /// Today's localized month name.
    pub month: String,
    /// Two-digit year suffix, e.g. "22".
    pub year_suffix: String,
}

impl TemplateVars {
    fn new(carrier: Carrier, codes: Option<&CarrierCodes>, today: NaiveDate, language: Language) -> Self {
        let code_line = codes
            .map(CarrierCodes::email_code_line)
            .unwrap_or_else(|| " ".to_string());
        Self {
            carrier_name: carrier.short_name().to_string(),
            code_line,
            date_long: locale::long_date(today, language),
            month: locale::month_name(today, language).to_string(),
            year_suffix: locale::year_suffix(today),
        }
    }
}

/// An outbound notification email, ready for the host's transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient address (after the mail policy is applied).
    pub to: String,
    /// Carbon-copy address (after the mail policy is applied).
    pub cc: String,
    /// The carrier's generated notification documents.
    pub attachments: Vec<AttachmentHandle>,
    /// Identifier of the template the host renders for the body.
    pub template: String,
    /// Named values visible to the template.
    pub variables: TemplateVars,
}

/// The email transport owned by the hosting application.
///
/// Sends are blocking and report plain success or failure; transport-level
/// failures are captured per carrier, never raised.
pub trait EmailTransport {
    /// Attempts to send one email, returning whether it was accepted.
    fn send(&self, email: &OutboundEmail) -> bool;
}

/// The outcome of one carrier's notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailOutcome {
    /// The carrier that was notified.
    pub carrier: Carrier,
    /// The address the email was actually sent to.
    pub address: String,
    /// Whether the transport accepted the email.
    pub sent: bool,
}

/// Per-carrier outcomes of a dispatch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// One outcome per (carrier, attachment) pair, in dispatch order.
    pub outcomes: Vec<EmailOutcome>,
}

impl DispatchReport {
    /// Renders the report as an HTML fragment: one styled line per carrier
    /// showing the carrier, the address used, and a localized Sent or
    /// Failed-to-send marker.
    pub fn to_html(&self, lexicon: &impl Lexicon) -> String {
        let mut result = String::new();
        for outcome in &self.outcomes {
            let carrier = lexicon.word(outcome.carrier.short_name());
            if outcome.sent {
                result.push_str(&format!(
                    "<span class=\"email-success\">[{}] {} - {}</span><br>",
                    lexicon.word("Sent"),
                    carrier,
                    outcome.address
                ));
            } else {
                result.push_str(&format!(
                    "<span class=\"email-failure\">[{}] {} - {} - {}</span><br>",
                    lexicon.word("Failure"),
                    carrier,
                    outcome.address,
                    lexicon.word("Failed to send")
                ));
            }
        }
        result
    }

    /// Returns true if every attempted send was accepted.
    pub fn all_sent(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.sent)
    }
}

/// Resolves the attachment handle for each handled carrier.
///
/// The attachment variable is the carrier short name with spaces replaced
/// by underscores, suffixed with the language code.
///
/// # Errors
///
/// Returns [`EngineError::AttachmentNotFound`] if any variable fails to
/// resolve; attachments are all-or-nothing since dispatch cannot proceed
/// with a missing document.
pub fn resolve_attachments(
    carriers: &[Carrier],
    language: Language,
    resolver: &impl AttachmentResolver,
) -> EngineResult<Vec<(Carrier, AttachmentHandle)>> {
    carriers
        .iter()
        .map(|&carrier| {
            let variable = carrier.attachment_variable(language);
            let handle = resolver.resolve(&variable)?;
            Ok((carrier, handle))
        })
        .collect()
}

/// Sends one notification email per (carrier, attachment) pair.
///
/// The recipient comes from the bilingual carrier address table, filtered
/// through the mail policy (which redirects everything to a fixed address
/// unless live sending was explicitly enabled). Every pair is attempted
/// regardless of earlier failures; the report records one outcome per pair
/// in order.
pub fn send_carrier_emails(
    pairs: &[(Carrier, AttachmentHandle)],
    code_map: &CodeMap,
    template: &str,
    language: Language,
    policy: &MailPolicy,
    transport: &impl EmailTransport,
) -> DispatchReport {
    let today = chrono::Local::now().date_naive();
    let mut report = DispatchReport::default();

    for (carrier, attachment) in pairs {
        let carrier_address = tables::carrier_email_address(*carrier, language);
        let (to, cc) = policy.delivery_addresses(carrier_address);

        let email = OutboundEmail {
            to: to.to_string(),
            cc: cc.to_string(),
            attachments: vec![attachment.clone()],
            template: template.to_string(),
            variables: TemplateVars::new(*carrier, code_map.get(*carrier), today, language),
        };

        let sent = transport.send(&email);
        if sent {
            info!(carrier = %carrier, to = %email.to, "Carrier notification sent");
        } else {
            warn!(carrier = %carrier, to = %email.to, "Carrier notification failed to send");
        }
        report.outcomes.push(EmailOutcome {
            carrier: *carrier,
            address: email.to,
            sent,
        });
    }
    report
}
