//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dispatch
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::DispatchConfig;

/// Loads and provides access to the dispatch configuration.
///
/// # Example
///
/// ```no_run
/// use override_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/override/dispatch.yaml").unwrap();
/// assert!(!loader.config().mail.is_live());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DispatchConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML or
    /// unknown fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }
}
