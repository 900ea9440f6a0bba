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

use crate::error::LaunchError;
use crate::name;
use std::fmt;

/// Profile used when neither the command line nor `Launcher.toml` names one.
pub const DEFAULT_PROFILE: &str = "dev-raytrace";

/// Build configuration passed to Cargo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildProfile {
    /// `--profile <name>`.
    Named(String),
    /// `--release`.
    Release,
}

impl BuildProfile {
    pub fn named(name: &str) -> Result<Self, LaunchError> {
        name::validate("profile", name)?;
        Ok(Self::Named(name.to_string()))
    }

    pub fn cargo_args(&self) -> Vec<String> {
        match self {
            BuildProfile::Named(name) => vec!["--profile".to_string(), name.clone()],
            BuildProfile::Release => vec!["--release".to_string()],
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildProfile::Named(name) => f.write_str(name),
            BuildProfile::Release => f.write_str("release"),
        }
    }
}
