//! Generation defaults.

use serde::Deserialize;

use crate::domain::DEFAULT_SEPARATOR;

/// Defaults applied when the command line leaves a value unset.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Number of values to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Payload length for character and byte strategies.
    #[serde(default = "default_length")]
    pub length: usize,

    /// Separator between values.
    #[serde(default = "default_separator")]
    pub separator: String,
}

const fn default_count() -> usize {
    1
}

const fn default_length() -> usize {
    12
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            length: default_length(),
            separator: default_separator(),
        }
    }
}
