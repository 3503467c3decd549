//! Application state for the Override Notification Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::locale::Language;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded dispatch configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dispatch configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured notification language.
    ///
    /// Attachment variables and carrier addresses derived during a request
    /// follow this language.
    pub fn language(&self) -> Language {
        self.config.config().language
    }
}
