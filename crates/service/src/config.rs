// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Service configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! need_policy = "strict"
//! report_safe_sequence = true
//! ```

use allocator::NeedPolicy;
use std::path::Path;

/// Configuration for the allocator service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceConfig {
    /// Need policy name: `"strict"` or `"lenient"`.
    #[serde(default = "default_policy")]
    pub need_policy: String,
    /// Whether initialize responses carry the safe completion sequence.
    #[serde(default = "default_true")]
    pub report_safe_sequence: bool,
}

fn default_policy() -> String {
    NeedPolicy::default().as_str().to_string()
}

fn default_true() -> bool {
    true
}

impl ServiceConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::ServiceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::ServiceError::Config(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::ServiceError> {
        toml::from_str(toml_str)
            .map_err(|e| super::ServiceError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::ServiceError> {
        toml::to_string_pretty(self)
            .map_err(|e| super::ServiceError::Config(format!("TOML serialise error: {e}")))
    }

    /// Parses the need policy name.
    pub fn parse_policy(&self) -> Result<NeedPolicy, super::ServiceError> {
        self.need_policy
            .parse()
            .map_err(super::ServiceError::Config)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            need_policy: default_policy(),
            report_safe_sequence: true,
        }
    }
}
