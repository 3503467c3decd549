//! Override Notification Engine for carrier compensation codes.
//!
//! This crate computes banded "override" compensation rates from published
//! carrier rate sheets, parses the WS carrier code table an agent pastes in,
//! selects and aggregates the codes that carriers must be notified about,
//! and dispatches the notification emails with their per-carrier attachments.

#![warn(missing_docs)]

pub mod api;
pub mod banding;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod locale;
pub mod models;
pub mod parser;
pub mod selection;
pub mod tables;
