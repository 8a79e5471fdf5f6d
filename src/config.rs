// src/config.rs

//! Configuration for the `cga-codegen` binary.
//!
//! The config is read from a JSON file whose path is the binary's first
//! argument. Every field has a default, so a partial file (or none at all)
//! is fine:
//!
//! ```json
//! { "codegen": { "dimensions": 4, "scalar_type": "f32" } }
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codegen::GeneratorConfig;

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)] // Missing sections fall back to their defaults.
pub struct Config {
    /// Kernel generator settings.
    pub codegen: GeneratorConfig,
}

impl Config {
    /// Parses a JSON document. Unknown fields are ignored.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Configuration used when no file is given.
pub static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);
