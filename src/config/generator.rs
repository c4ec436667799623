//! Generator settings.

use config::ConfigError;
use serde::Deserialize;

use crate::options::{IdOption, Options, with_charset, with_default_length};

/// Generator settings as read from files or the environment.
///
/// Unset fields fall back to the generator's built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorSettings {
    /// Sampling alphabet.
    #[serde(default)]
    pub charset: Option<String>,

    /// Default identifier length.
    #[serde(default)]
    pub default_length: Option<usize>,

    /// Seed for a reproducible source. Only meant for tests and fixtures.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorSettings {
    /// Convert the settings into override items, charset first.
    #[must_use]
    pub fn options(&self) -> Vec<IdOption> {
        let mut options = Vec::with_capacity(2);
        if let Some(charset) = &self.charset {
            options.push(with_charset(charset));
        }
        if let Some(length) = self.default_length {
            options.push(with_default_length(length));
        }
        options
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        Options::resolve(self.options())
            .map(|_| ())
            .map_err(|e| ConfigError::Message(format!("generator: {e}")))
    }
}
