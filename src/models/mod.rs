//! Core data models for the Override Notification Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod carrier;
mod change_flags;
mod code_map;
mod code_record;

pub use carrier::Carrier;
pub use change_flags::OverrideChangeFlags;
pub use code_map::{CarrierCodes, CodeMap};
pub use code_record::{CarrierCodeRecord, CodeType};
