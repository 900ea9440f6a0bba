// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validated names for Cargo examples and build profiles.

use crate::error::LaunchError;
use std::fmt;
use std::str::FromStr;

/// Checks a target or profile name against the character set Cargo accepts.
///
/// The example name ends up inside the artifact file name, so anything that
/// could act as a path separator is rejected here.
pub(crate) fn validate(kind: &'static str, value: &str) -> Result<(), LaunchError> {
    let reason = if value.is_empty() {
        Some("must not be empty")
    } else if value.starts_with('-') {
        Some("must not start with '-'")
    } else if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some("only ASCII letters, digits, '-' and '_' are allowed")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(LaunchError::InvalidName {
            kind,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Name of an example target, e.g. `ch01` or `cornell_box`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExampleName(String);

impl ExampleName {
    pub fn parse(value: &str) -> Result<Self, LaunchError> {
        validate("example", value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ExampleName {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ExampleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_cargo_target_names() {
        for name in ["ch01", "cornell_box", "final-scene", "Teapot2"] {
            assert_eq!(ExampleName::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn rejects_names_that_could_escape_output_dir() {
        for name in ["", "../ch01", "a/b", "a\\b", "ch 01", "-release", "ch01.ppm"] {
            assert!(
                matches!(
                    ExampleName::parse(name),
                    Err(LaunchError::InvalidName { kind: "example", .. })
                ),
                "'{}' should be rejected",
                name
            );
        }
    }

    #[test]
    fn parses_through_from_str() {
        let name: ExampleName = "earth".parse().unwrap();
        assert_eq!(name.to_string(), "earth");
    }
}
