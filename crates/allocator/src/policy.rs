// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! How requests are checked against a process's declared maximum need.

use std::fmt;
use std::str::FromStr;

/// Whether a request may exceed the requesting process's remaining need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedPolicy {
    /// Deny any request with `request[j] > need[pid][j]`.
    #[default]
    Strict,
    /// Skip the need check; only availability and safety decide.
    ///
    /// A granted over-request leaves the process holding more than its
    /// declared maximum, and its derived need saturates at zero.
    Lenient,
}

impl NeedPolicy {
    /// Returns the policy name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl FromStr for NeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!(
                "unknown need policy '{other}'; expected 'strict' or 'lenient'"
            )),
        }
    }
}

impl fmt::Display for NeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(NeedPolicy::default(), NeedPolicy::Strict);
    }

    #[test]
    fn test_parse() {
        assert_eq!("strict".parse::<NeedPolicy>().unwrap(), NeedPolicy::Strict);
        assert_eq!(" Lenient ".parse::<NeedPolicy>().unwrap(), NeedPolicy::Lenient);
        assert!("bogus".parse::<NeedPolicy>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(NeedPolicy::Lenient.to_string(), "lenient");
    }
}
