//! Configuration loading for the Override Notification Engine.
//!
//! The band tables and carrier lists are static data and are not configured
//! here; the configuration covers only the runtime dispatch settings, most
//! importantly the mail delivery policy.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_REDIRECT_ADDRESS, DispatchConfig, MailPolicy};
